//! CORS policy: one browser origin, any method and header, credentials on.
//!
//! Wildcards are not allowed together with credentials, so methods and
//! headers are mirrored from the preflight request instead. The origin is a
//! one-entry list so the allow header is only sent back on a match.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::error::{DagCheckError, Result};

pub fn cors_layer(origin: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(origin).map_err(|e| DagCheckError::ConfigError {
        reason: format!("Invalid CORS origin '{}': {}", origin, e),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
