//! Prompt assembly for the remote advice model.

use crate::analysis::StructuredSummary;

pub const ADVICE_SYSTEM_PROMPT: &str =
    "You are a knowledgeable medical assistant providing accurate and helpful medical advice.";

/// Build the advice prompt from the structured summary and the user query.
///
/// The summary is serialized so the model sees the same categorized view
/// the client does, including the confidence metrics.
pub fn build_advice_prompt(summary: &StructuredSummary, query: &str) -> String {
    let summary_json = serde_json::to_string_pretty(summary).unwrap_or_default();

    format!(
        "As a medical assistant, provide a concise analysis based on:\n\n\
         Summary: {summary_json}\n\
         Query: {query}\n\n\
         Quick response format:\n\
         1. Direct answer (2-3 sentences)\n\
         2. Key recommendations (bullet points)\n\
         3. Important precautions\n\
         4. Quick follow-up notes\n\
         5. Warning signs (if any)\n\n\
         Keep responses brief but informative."
    )
}
