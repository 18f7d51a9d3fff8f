//! Data model for the structured summary produced by the aggregator.
//!
//! Field names are part of the API surface (serialized to clients and fed to
//! the remote advice prompt), so they are stable and spelled out explicitly.

use serde::Serialize;

/// Chart colors reused across metric buckets (Chart.js rgba strings).
pub const COLOR_RED: &str = "rgba(255, 99, 132, 0.8)";
pub const COLOR_AMBER: &str = "rgba(255, 206, 86, 0.8)";
pub const COLOR_TEAL: &str = "rgba(75, 192, 192, 0.8)";

/// The five line categories recognized by the classifier.
///
/// Categories are not mutually exclusive: one line can carry several tags,
/// each rendered with its own glyph prefix in the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    RedFlag,
    Risk,
    Recommendation,
    ValidationNote,
    Diagnostic,
}

impl Category {
    /// Display glyph prepended to lines tagged with this category.
    pub fn glyph(&self) -> &'static str {
        match self {
            Category::RedFlag => "⚠️",
            Category::Risk => "⚖️",
            Category::Recommendation => "💡",
            Category::ValidationNote => "📝",
            Category::Diagnostic => "🔍",
        }
    }

    /// Render a source line for display under this category.
    pub fn render(&self, line: &str) -> String {
        format!("{} {}", self.glyph(), line)
    }
}

/// Aggregate output of the heuristic structuring engine.
///
/// Every list field is guaranteed non-empty: empty categories are replaced
/// with a single placeholder entry during post-processing.
#[derive(Debug, Clone, Serialize)]
pub struct StructuredSummary {
    pub red_flags: Vec<String>,
    pub risk_stratification: Vec<String>,
    pub validation_notes: Vec<String>,
    pub key_findings: Vec<String>,
    pub recommendations: Vec<String>,
    pub confidence_metrics: ConfidenceMetrics,
}

/// Synthetic, heuristic confidence scores — not statistically grounded.
#[derive(Debug, Clone, Serialize)]
pub struct ConfidenceMetrics {
    /// Share of lines carrying diagnostic language, scaled to [0, 100].
    pub diagnostic_confidence: f64,
    pub risk_levels: Vec<RiskLevel>,
    pub abnormal_indicators: Vec<AbnormalIndicator>,
    pub measurement_accuracy: Vec<MeasurementAccuracy>,
    pub test_results: Vec<TestResult>,
}

/// One severity bucket counted over already-classified red flags.
#[derive(Debug, Clone, Serialize)]
pub struct RiskLevel {
    pub level: &'static str,
    pub count: usize,
    pub color: &'static str,
}

/// One normal/abnormal bucket counted over classified entries.
#[derive(Debug, Clone, Serialize)]
pub struct AbnormalIndicator {
    pub label: &'static str,
    pub value: usize,
    pub color: &'static str,
}

/// Per-parameter confidence that a usable measurement was present.
#[derive(Debug, Clone, Serialize)]
pub struct MeasurementAccuracy {
    pub parameter: String,
    pub confidence: u8,
}

/// Occurrence count and capped confidence for one test keyword.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    pub test_type: String,
    pub count: usize,
    pub confidence: usize,
}
