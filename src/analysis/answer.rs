//! Local question answering over the raw report text and its summary.
//!
//! Two-stage lookup: direct line matching over the raw text wins outright;
//! only when it finds nothing does the category pass search the structured
//! summary. Pure function — chat history is appended by the caller.

use std::collections::HashSet;

use super::types::StructuredSummary;

/// Fallback when the document is present but nothing matched.
pub const NO_MATCH_REPLY: &str = "I couldn't find a specific answer to your question. \
    Could you please be more specific or try rephrasing your question?";

/// Fallback when no document has been uploaded at all.
pub const NO_DOCUMENT_REPLY: &str =
    "No document has been uploaded yet. Please upload a medical document first.";

/// Question keywords that route the category pass to a summary section.
const CATEGORY_ROUTES: &[(&str, &[&str])] = &[
    ("red_flags", &["red flag", "warning", "alert", "danger", "concern"]),
    ("risk_stratification", &["risk", "severity", "condition", "status"]),
    ("validation_notes", &["validation", "note", "remark", "comment", "observation"]),
];

/// Answer a free-text question about the uploaded report.
pub fn answer(raw_text: &str, summary: &StructuredSummary, question: &str) -> String {
    let question_lower = question.to_lowercase();
    // Distinct words only: a repeated word must not inflate overlap scores.
    let words: HashSet<&str> = question_lower.split_whitespace().collect();

    // Direct pass: lines of the raw text containing any question word,
    // first two in document order.
    let mut matched_lines = Vec::new();
    for line in raw_text.lines() {
        let lower = line.to_lowercase();
        if words.iter().any(|w| lower.contains(w)) {
            matched_lines.push(line.trim());
        }
    }
    if !matched_lines.is_empty() {
        return matched_lines
            .into_iter()
            .take(2)
            .collect::<Vec<_>>()
            .join("\n");
    }

    // Category pass: pick the summary section the question asks about, then
    // return its entry with the most question-word overlaps. Strict
    // greater-than keeps the first-encountered entry on ties.
    for (section, route_keywords) in CATEGORY_ROUTES {
        if !route_keywords.iter().any(|k| question_lower.contains(k)) {
            continue;
        }
        let entries = section_entries(summary, section);
        let mut best_entry: Option<&String> = None;
        let mut best_score = 0usize;
        for entry in entries {
            let entry_lower = entry.to_lowercase();
            let score = words.iter().filter(|w| entry_lower.contains(**w)).count();
            if score > best_score {
                best_score = score;
                best_entry = Some(entry);
            }
        }
        if let Some(entry) = best_entry {
            return entry.clone();
        }
    }

    if raw_text.is_empty() {
        NO_DOCUMENT_REPLY.to_string()
    } else {
        NO_MATCH_REPLY.to_string()
    }
}

fn section_entries<'a>(summary: &'a StructuredSummary, section: &str) -> &'a [String] {
    match section {
        "red_flags" => &summary.red_flags,
        "risk_stratification" => &summary.risk_stratification,
        "validation_notes" => &summary.validation_notes,
        _ => &[],
    }
}
