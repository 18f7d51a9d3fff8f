//! Liveness/status endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct StatusResponse {
    pub success: bool,
    /// True when the active report has non-empty extracted text.
    pub has_report: bool,
    /// True once any upload (even an unreadable one) has been analyzed.
    pub has_summary: bool,
    pub chat_messages: usize,
}

/// `GET /api/v1/status`
pub async fn status(
    State(ctx): State<ApiContext>,
) -> Result<Json<StatusResponse>, ApiError> {
    let snapshot = ctx.session.report()?;
    Ok(Json(StatusResponse {
        success: true,
        has_report: snapshot.as_ref().is_some_and(|s| !s.text.is_empty()),
        has_summary: snapshot.is_some(),
        chat_messages: ctx.session.history_len()?,
    }))
}
