//! Keyword tables driving the rule-based report classifier.
//!
//! These are deliberately literal, auditable tables — plain substring
//! matching against lower-cased lines, no stemming, no learned weights.
//! Editing a table changes classification behavior; nothing else does.

/// Critical findings and red flags.
pub const CRITICAL_TERMS: &[&str] = &[
    "abnormal",
    "critical",
    "urgent",
    "immediate",
    "severe",
    "danger",
    "warning",
    "alert",
    "high risk",
    "emergency",
    "concerning",
    "irregular",
    "elevated",
    "below normal",
    "positive for",
];

/// Risk stratification and assessment language.
pub const RISK_TERMS: &[&str] = &[
    "risk",
    "probability",
    "likelihood",
    "chance",
    "stratification",
    "assessment",
    "score",
    "level",
    "grade",
    "stage",
    "classification",
];

/// Recommendations and follow-up instructions.
pub const RECOMMENDATION_TERMS: &[&str] = &[
    "recommend",
    "suggest",
    "advise",
    "follow up",
    "referral",
];

/// Validation notes and reviewer-facing observations.
pub const VALIDATION_TERMS: &[&str] = &[
    "note",
    "observation",
    "finding",
    "impression",
    "conclusion",
];

/// Diagnostic summary lines (second pass, appended to key findings).
pub const DIAGNOSIS_TERMS: &[&str] = &["diagnosis", "assessment", "impression"];

/// Terms counted toward the diagnostic confidence ratio.
/// Broader than [`DIAGNOSIS_TERMS`]: includes evidential language.
pub const DIAGNOSTIC_CONFIDENCE_TERMS: &[&str] = &[
    "diagnosis",
    "confirmed",
    "observed",
    "examination",
    "assessment",
];

/// Recognized diagnostic test keywords for the test-results metric.
pub const TEST_KEYWORDS: &[&str] = &[
    "test",
    "examination",
    "scan",
    "x-ray",
    "mri",
    "ct",
    "ultrasound",
];

/// Secondary severity terms for bucketing already-classified red flags.
pub const HIGH_SEVERITY_TERMS: &[&str] = &["severe", "critical", "high"];
pub const MEDIUM_SEVERITY_TERMS: &[&str] = &["moderate", "concerning"];
pub const LOW_SEVERITY_TERMS: &[&str] = &["mild", "minor", "low"];

/// True when any term appears as a substring of the (lower-cased) text.
pub fn contains_any(lower: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| lower.contains(t))
}
