//! Remote advice endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Deserialize)]
pub struct AdvicePayload {
    pub query: String,
}

#[derive(Serialize)]
pub struct AdviceResponse {
    pub success: bool,
    pub advice: String,
}

/// `POST /api/v1/advice` — open-ended advice over the structured summary.
///
/// The collaborator's failure is propagated to the caller as a 502 with
/// its error message; it never surfaces as a crash.
pub async fn advice(
    State(ctx): State<ApiContext>,
    Json(payload): Json<AdvicePayload>,
) -> Result<Json<AdviceResponse>, ApiError> {
    let snapshot = ctx.session.report()?.ok_or(ApiError::NoReport)?;
    let client = ctx
        .advice
        .as_ref()
        .ok_or_else(|| ApiError::AdviceFailed("OPENROUTER_API_KEY is not configured".into()))?;

    let outcome = client.get_advice(&snapshot.summary, &payload.query).await;
    if !outcome.success {
        return Err(ApiError::AdviceFailed(
            outcome.error.unwrap_or_else(|| "unknown advice failure".into()),
        ));
    }

    Ok(Json(AdviceResponse {
        success: true,
        advice: outcome.advice.unwrap_or_default(),
    }))
}
