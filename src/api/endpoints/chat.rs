//! Chat endpoints: ask questions about the active report.
//!
//! Answering policy follows the configured `ChatMode`: local keyword
//! lookup by default, or delegation to the remote advice service.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::analysis;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::config::ChatMode;
use crate::session::ChatMessage;

#[derive(Deserialize)]
pub struct ChatPayload {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub message: String,
    pub chat_history: Vec<ChatMessage>,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub chat_history: Vec<ChatMessage>,
}

/// `POST /api/v1/chat` — append a user turn, answer it, return the history.
pub async fn send(
    State(ctx): State<ApiContext>,
    Json(payload): Json<ChatPayload>,
) -> Result<Json<ChatResponse>, ApiError> {
    let snapshot = ctx.session.report()?.ok_or(ApiError::NoReport)?;

    // The user's turn goes into the history up front, so it is kept even
    // when the remote advice call fails.
    ctx.session.append_user(&payload.message)?;

    let reply = match ctx.settings.chat_mode {
        ChatMode::Local => {
            analysis::answer(&snapshot.text, &snapshot.summary, &payload.message)
        }
        ChatMode::Remote => {
            let client = ctx.advice.as_ref().ok_or_else(|| {
                ApiError::AdviceFailed("remote chat mode requires OPENROUTER_API_KEY".into())
            })?;
            let outcome = client.get_advice(&snapshot.summary, &payload.message).await;
            if !outcome.success {
                return Err(ApiError::AdviceFailed(
                    outcome.error.unwrap_or_else(|| "unknown advice failure".into()),
                ));
            }
            outcome.advice.unwrap_or_default()
        }
    };

    let chat_history = ctx.session.append_assistant(&reply)?;

    Ok(Json(ChatResponse {
        success: true,
        message: reply,
        chat_history,
    }))
}

/// `GET /api/v1/chat-history`
pub async fn history(
    State(ctx): State<ApiContext>,
) -> Result<Json<HistoryResponse>, ApiError> {
    Ok(Json(HistoryResponse {
        success: true,
        chat_history: ctx.session.history()?,
    }))
}
