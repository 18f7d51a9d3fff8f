//! Report upload endpoint.
//!
//! `POST /api/v1/upload` — multipart form with a `file` field. Saves the
//! file, extracts its text, runs the structuring engine, and atomically
//! replaces the session's report (clearing any previous chat history).
//!
//! Extraction failure is not an upload failure: an unreadable container
//! degrades to an empty document whose summary is all placeholders.

use std::path::{Path, PathBuf};

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::analysis::{self, StructuredSummary};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::config;
use crate::extraction;
use crate::session::ReportSnapshot;

/// Maximum accepted file size (16 MB).
pub const MAX_FILE_BYTES: usize = 16 * 1024 * 1024;

/// Body limit for the upload route: the file cap plus headroom for
/// multipart framing. The router installs this so axum's default 2 MB
/// limit does not reject reports before the file-size check runs.
pub const MAX_BODY_BYTES: usize = MAX_FILE_BYTES + 64 * 1024;

#[derive(Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub summary: StructuredSummary,
    pub message: &'static str,
}

/// `POST /api/v1/upload` — receive, analyze, and activate a report.
pub async fn upload(
    State(ctx): State<ApiContext>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| ApiError::BadRequest("file field has no filename".into()))?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        if bytes.len() > MAX_FILE_BYTES {
            return Err(ApiError::BadRequest(format!(
                "File exceeds {MAX_FILE_BYTES} byte limit"
            )));
        }
        file = Some((file_name, bytes.to_vec()));
    }

    let (file_name, bytes) = file.ok_or_else(|| ApiError::BadRequest("missing file field".into()))?;
    let safe_name = sanitize_file_name(&file_name);
    let path = config::uploads_dir().join(&safe_name);

    tokio::fs::create_dir_all(config::uploads_dir())
        .await
        .map_err(|e| ApiError::Internal(format!("Cannot create uploads dir: {e}")))?;
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| ApiError::Internal(format!("Cannot save upload: {e}")))?;

    tracing::info!(file = %safe_name, bytes = bytes.len(), "Report uploaded");

    // Extraction and aggregation are CPU-bound; keep them off the runtime.
    let (text, summary) = tokio::task::spawn_blocking(move || {
        let text = extract_or_empty(&path);
        let summary = analysis::aggregate(&text);
        (text, summary)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!(
        chars = text.len(),
        red_flags = summary.red_flags.len(),
        key_findings = summary.key_findings.len(),
        "Report analyzed"
    );

    let snapshot = ReportSnapshot::new(safe_name, text, summary.clone());
    ctx.session.replace_report(snapshot)?;

    Ok(Json(UploadResponse {
        success: true,
        summary,
        message: "File uploaded and analyzed successfully",
    }))
}

fn extract_or_empty(path: &PathBuf) -> String {
    match extraction::extract_text(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Extraction failed; treating as empty document");
            String::new()
        }
    }
}

/// Strip any path components from a client-supplied filename.
fn sanitize_file_name(name: &str) -> String {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty() && *n != "." && *n != "..")
        .unwrap_or("upload.txt")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_plain_names() {
        assert_eq!(sanitize_file_name("report.pdf"), "report.pdf");
    }

    #[test]
    fn sanitize_strips_directories() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("/tmp/report.txt"), "report.txt");
    }

    #[test]
    fn sanitize_rejects_empty_and_dots() {
        assert_eq!(sanitize_file_name(""), "upload.txt");
        assert_eq!(sanitize_file_name(".."), "upload.txt");
    }

    #[test]
    fn extract_or_empty_swallows_errors() {
        let text = extract_or_empty(&PathBuf::from("/nonexistent/report.txt"));
        assert_eq!(text, "");
    }
}
