//! `pipeline` form field extraction
//!
//! The editor posts `FormData` (multipart); scripts and curl tend to send
//! urlencoded bodies. Both carry the graph as a JSON string in one field.

use async_trait::async_trait;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;
use serde::Deserialize;

use crate::error::DagCheckError;

pub const PIPELINE_FIELD: &str = "pipeline";

/// Raw `pipeline` field, not yet decoded as JSON
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineForm {
    pub pipeline: String,
}

#[derive(Deserialize)]
struct UrlEncodedFields {
    pipeline: Option<String>,
}

fn missing_field() -> DagCheckError {
    DagCheckError::MissingField {
        field: PIPELINE_FIELD.to_string(),
    }
}

#[async_trait]
impl<S> FromRequest<S> for PipelineForm
where
    S: Send + Sync,
{
    type Rejection = DagCheckError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if is_multipart {
            from_multipart(req, state).await
        } else {
            let Form(fields) = Form::<UrlEncodedFields>::from_request(req, state)
                .await
                .map_err(|e| DagCheckError::InvalidForm {
                    reason: e.to_string(),
                })?;
            fields
                .pipeline
                .map(|pipeline| Self { pipeline })
                .ok_or_else(missing_field)
        }
    }
}

async fn from_multipart<S>(req: Request, state: &S) -> Result<PipelineForm, DagCheckError>
where
    S: Send + Sync,
{
    let invalid = |reason: String| DagCheckError::InvalidForm { reason };

    let mut multipart = Multipart::from_request(req, state)
        .await
        .map_err(|e| invalid(e.to_string()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| invalid(e.to_string()))?
    {
        if field.name() != Some(PIPELINE_FIELD) {
            continue;
        }
        let pipeline = field.text().await.map_err(|e| invalid(e.to_string()))?;
        return Ok(PipelineForm { pipeline });
    }

    Err(missing_field())
}
