//! Summary and metrics read endpoints.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::analysis::{ConfidenceMetrics, StructuredSummary};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct SummaryResponse {
    pub success: bool,
    pub summary: StructuredSummary,
}

#[derive(Serialize)]
pub struct MetricsResponse {
    pub success: bool,
    pub metrics: ConfidenceMetrics,
}

/// `GET /api/v1/summary` — the full structured summary of the active report.
pub async fn summary(
    State(ctx): State<ApiContext>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let snapshot = ctx.session.report()?.ok_or(ApiError::NoReport)?;
    Ok(Json(SummaryResponse {
        success: true,
        summary: snapshot.summary.clone(),
    }))
}

/// `GET /api/v1/metrics` — confidence metrics only.
pub async fn metrics(
    State(ctx): State<ApiContext>,
) -> Result<Json<MetricsResponse>, ApiError> {
    let snapshot = ctx.session.report()?.ok_or(ApiError::NoReport)?;
    Ok(Json(MetricsResponse {
        success: true,
        metrics: snapshot.summary.confidence_metrics.clone(),
    }))
}
