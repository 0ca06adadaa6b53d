//! HTTP surface
//!
//! - `GET /`: liveness check
//! - `POST /pipelines/parse`: DAG check of the posted pipeline
//!
//! Handlers are stateless; the only process-wide pieces are the listener
//! and the CORS layer built from [`ServerConfig`].

mod cors;
mod form;
mod routes;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::Result;

pub use cors::cors_layer;
pub use form::{PipelineForm, PIPELINE_FIELD};

/// Build the application router
pub fn router(config: &ServerConfig) -> Result<Router> {
    Ok(Router::new()
        .route("/", get(routes::ping))
        .route("/pipelines/parse", post(routes::parse_pipeline))
        .layer(cors_layer(&config.allowed_origin)?)
        .layer(TraceLayer::new_for_http()))
}

/// Bind and serve until Ctrl-C
pub async fn serve(config: ServerConfig) -> Result<()> {
    let app = router(&config)?;
    let listener = TcpListener::bind(config.bind_addr()).await?;

    tracing::info!(
        addr = %listener.local_addr()?,
        allowed_origin = %config.allowed_origin,
        "dagcheck listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C");
        return;
    }
    tracing::info!("shutdown requested");
}
