//! Line classification: independent keyword-set membership tests.
//!
//! Each category test is independent — a line may carry several tags, or
//! none. The diagnostic tag is included here for completeness but consumed
//! by the aggregator in its own second pass over the document.

use super::keywords;
use super::types::Category;

/// Tag a lower-cased line with every category whose keyword set it matches.
pub fn classify(lower_line: &str) -> Vec<Category> {
    let mut tags = Vec::new();

    if keywords::contains_any(lower_line, keywords::CRITICAL_TERMS) {
        tags.push(Category::RedFlag);
    }
    if keywords::contains_any(lower_line, keywords::RISK_TERMS) {
        tags.push(Category::Risk);
    }
    if keywords::contains_any(lower_line, keywords::RECOMMENDATION_TERMS) {
        tags.push(Category::Recommendation);
    }
    if keywords::contains_any(lower_line, keywords::VALIDATION_TERMS) {
        tags.push(Category::ValidationNote);
    }
    if keywords::contains_any(lower_line, keywords::DIAGNOSIS_TERMS) {
        tags.push(Category::Diagnostic);
    }

    tags
}

/// Diagnostic-summary test used by the aggregator's second pass.
pub fn is_diagnostic(lower_line: &str) -> bool {
    keywords::contains_any(lower_line, keywords::DIAGNOSIS_TERMS)
}
