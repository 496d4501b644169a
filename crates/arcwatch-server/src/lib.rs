//! HTTP boundary: router assembly and server loop.

pub mod config;
pub mod error;
pub mod handler;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use arcwatch_provider::MetaforgeSource;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::AppState;

/// Builds the router around the given state.
///
/// The endpoint is public and read-only, so CORS is fully permissive.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/user_events", get(handler::user_events))
        .route("/api/translations", get(handler::translations))
        .route("/health", get(handler::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the server until the listener fails.
pub async fn run(config: ServerConfig) -> ServerResult<()> {
    let source = MetaforgeSource::new(config.schedule.clone())?;
    let state = AppState::new(Arc::new(source));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, upstream = %config.schedule.url, "arcwatch listening");

    axum::serve(listener, app(state)).await?;
    Ok(())
}
