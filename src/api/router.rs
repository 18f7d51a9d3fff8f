//! API router assembly.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes live under `/api/v1`; CORS is permissive so a browser frontend
//! on another origin can talk to the service directly.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the full API router.
pub fn api_router(ctx: ApiContext) -> Router {
    Router::new()
        .route(
            "/api/v1/upload",
            post(endpoints::upload::upload)
                .layer(DefaultBodyLimit::max(endpoints::upload::MAX_BODY_BYTES)),
        )
        .route("/api/v1/summary", get(endpoints::summary::summary))
        .route("/api/v1/metrics", get(endpoints::summary::metrics))
        .route("/api/v1/chat", post(endpoints::chat::send))
        .route("/api/v1/chat-history", get(endpoints::chat::history))
        .route("/api/v1/advice", post(endpoints::advice::advice))
        .route("/api/v1/status", get(endpoints::status::status))
        .with_state(ctx)
        .layer(CorsLayer::permissive())
}
