//! Route handlers

use axum::Json;
use serde_json::{json, Value};

use crate::ast::Pipeline;
use crate::dag::{DagValidator, ValidationResult};
use crate::error::Result;

use super::form::PipelineForm;

pub async fn ping() -> Json<Value> {
    Json(json!({ "Ping": "Pong" }))
}

#[tracing::instrument(name = "parse_pipeline", skip_all, fields(bytes = form.pipeline.len()))]
pub async fn parse_pipeline(form: PipelineForm) -> Result<Json<ValidationResult>> {
    let pipeline = Pipeline::from_json(&form.pipeline)?;
    let result = DagValidator::new().validate_pipeline(&pipeline);

    tracing::info!(
        num_nodes = result.num_nodes,
        num_edges = result.num_edges,
        is_dag = result.is_dag,
        "pipeline checked"
    );

    Ok(Json(result))
}
