//! Shared session state: the active report and its chat history.
//!
//! One logical session at a time. The report is held as an immutable
//! `Arc` snapshot behind an `RwLock`: readers grab the current snapshot
//! cheaply, and an upload swaps in a new one atomically (and clears the
//! chat history under the same critical section), so no reader ever sees
//! half of an old document and half of a new one.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::analysis::StructuredSummary;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session lock poisoned")]
    LockPoisoned,
}

/// Immutable view of one analyzed upload.
#[derive(Debug)]
pub struct ReportSnapshot {
    pub id: Uuid,
    pub file_name: String,
    /// Full raw extracted text. May be empty for unreadable uploads.
    pub text: String,
    pub summary: StructuredSummary,
    pub uploaded_at: DateTime<Utc>,
}

impl ReportSnapshot {
    pub fn new(file_name: String, text: String, summary: StructuredSummary) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name,
            text,
            summary,
            uploaded_at: Utc::now(),
        }
    }
}

/// Who said a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of the session's chat history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            at: Utc::now(),
        }
    }
}

/// Session-level shared state, wrapped in `Arc` at startup.
pub struct SessionState {
    report: RwLock<Option<Arc<ReportSnapshot>>>,
    history: RwLock<Vec<ChatMessage>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            report: RwLock::new(None),
            history: RwLock::new(Vec::new()),
        }
    }

    /// Current report snapshot, if any upload has completed.
    pub fn report(&self) -> Result<Option<Arc<ReportSnapshot>>, SessionError> {
        let guard = self.report.read().map_err(|_| SessionError::LockPoisoned)?;
        Ok(guard.clone())
    }

    /// Replace the report and clear the chat history in one step.
    ///
    /// Both locks are held together so no observer can pair the new
    /// report with the old conversation.
    pub fn replace_report(&self, snapshot: ReportSnapshot) -> Result<(), SessionError> {
        let mut report = self.report.write().map_err(|_| SessionError::LockPoisoned)?;
        let mut history = self.history.write().map_err(|_| SessionError::LockPoisoned)?;
        history.clear();
        *report = Some(Arc::new(snapshot));
        Ok(())
    }

    /// Snapshot of the chat history in append order.
    pub fn history(&self) -> Result<Vec<ChatMessage>, SessionError> {
        let guard = self.history.read().map_err(|_| SessionError::LockPoisoned)?;
        Ok(guard.clone())
    }

    pub fn history_len(&self) -> Result<usize, SessionError> {
        let guard = self.history.read().map_err(|_| SessionError::LockPoisoned)?;
        Ok(guard.len())
    }

    /// Record the user's turn. Called before the answer is computed so the
    /// question survives even when answering fails.
    pub fn append_user(&self, question: &str) -> Result<(), SessionError> {
        let mut guard = self.history.write().map_err(|_| SessionError::LockPoisoned)?;
        guard.push(ChatMessage::new(Role::User, question));
        Ok(())
    }

    /// Record the reply to the latest user turn, returning the updated history.
    pub fn append_assistant(&self, reply: &str) -> Result<Vec<ChatMessage>, SessionError> {
        let mut guard = self.history.write().map_err(|_| SessionError::LockPoisoned)?;
        guard.push(ChatMessage::new(Role::Assistant, reply));
        Ok(guard.clone())
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
