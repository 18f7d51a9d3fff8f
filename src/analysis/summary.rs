//! Summary aggregation: drives the line classifier and measurement
//! extractor over a whole document and derives confidence metrics.
//!
//! Three independent passes over the line sequence, each O(n):
//! 1. classification + measurement range checks
//! 2. diagnostic-summary lines appended to key findings
//! 3. metrics, computed partly from raw lines and partly from the lists
//!    produced by the earlier passes
//!
//! The passes are intentionally not fused: category sets overlap, and the
//! metric buckets count already-rendered entries rather than raw lines.
//! A totally empty document is a valid input and yields the all-placeholder
//! summary — never an error.

use super::classify;
use super::keywords;
use super::measurements::{self, Verdict, PARAMETERS, UNIT_TOKENS};
use super::types::{
    AbnormalIndicator, Category, ConfidenceMetrics, MeasurementAccuracy, RiskLevel,
    StructuredSummary, TestResult, COLOR_AMBER, COLOR_RED, COLOR_TEAL,
};

/// Build a structured summary from raw extracted text.
///
/// Pure and deterministic: the same text always produces the same summary.
pub fn aggregate(text: &str) -> StructuredSummary {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut red_flags = Vec::new();
    let mut risk_stratification = Vec::new();
    let mut validation_notes = Vec::new();
    let mut key_findings = Vec::new();
    let mut recommendations = Vec::new();

    // Pass 1: per-line classification and measurement range checks.
    for line in &lines {
        let lower = line.to_lowercase();
        let tags = classify::classify(&lower);

        if tags.contains(&Category::RedFlag) {
            red_flags.push(Category::RedFlag.render(line));
        }

        for obs in measurements::extract(&lower) {
            match obs.verdict {
                Verdict::Abnormal => {
                    red_flags.push(format!("⚠️ Abnormal {}: {}", obs.parameter, line));
                }
                Verdict::Normal => {
                    key_findings.push(format!("✅ Normal {}: {}", obs.parameter, line));
                }
                // No reference range: recorded upstream, nothing to flag.
                Verdict::Unknown => {}
            }
        }

        if tags.contains(&Category::Risk) {
            risk_stratification.push(Category::Risk.render(line));
        }
        if tags.contains(&Category::Recommendation) {
            recommendations.push(Category::Recommendation.render(line));
        }
        if tags.contains(&Category::ValidationNote) {
            validation_notes.push(Category::ValidationNote.render(line));
        }
    }

    // Pass 2: diagnostic summaries, appended after all measurement findings.
    for line in &lines {
        if classify::is_diagnostic(&line.to_lowercase()) {
            key_findings.push(Category::Diagnostic.render(line));
        }
    }

    // Pass 3: confidence metrics over raw lines and the derived lists.
    let confidence_metrics = compute_metrics(&lines, &red_flags, &key_findings);

    StructuredSummary {
        red_flags: dedup_or_placeholder(red_flags, "red flags"),
        risk_stratification: dedup_or_placeholder(risk_stratification, "risk stratification"),
        validation_notes: dedup_or_placeholder(validation_notes, "validation notes"),
        key_findings: dedup_or_placeholder(key_findings, "key findings"),
        recommendations: dedup_or_placeholder(recommendations, "recommendations"),
        confidence_metrics,
    }
}

fn compute_metrics(
    lines: &[&str],
    red_flags: &[String],
    key_findings: &[String],
) -> ConfidenceMetrics {
    let diagnostic_hits = lines
        .iter()
        .filter(|l| keywords::contains_any(&l.to_lowercase(), keywords::DIAGNOSTIC_CONFIDENCE_TERMS))
        .count();
    let diagnostic_confidence =
        (diagnostic_hits as f64 / lines.len().max(1) as f64 * 100.0).min(100.0);

    // Severity buckets re-scan the rendered red-flag entries, not raw lines.
    // An entry matching no secondary keyword lands in no bucket, so the
    // buckets need not sum to the list length.
    let count_matching = |entries: &[String], terms: &[&str]| {
        entries
            .iter()
            .filter(|e| keywords::contains_any(&e.to_lowercase(), terms))
            .count()
    };

    let risk_levels = vec![
        RiskLevel {
            level: "High Risk",
            count: count_matching(red_flags, keywords::HIGH_SEVERITY_TERMS),
            color: COLOR_RED,
        },
        RiskLevel {
            level: "Medium Risk",
            count: count_matching(red_flags, keywords::MEDIUM_SEVERITY_TERMS),
            color: COLOR_AMBER,
        },
        RiskLevel {
            level: "Low Risk",
            count: count_matching(red_flags, keywords::LOW_SEVERITY_TERMS),
            color: COLOR_TEAL,
        },
    ];

    let abnormal_indicators = vec![
        AbnormalIndicator {
            label: "Critical",
            value: count_matching(red_flags, &["critical"]),
            color: COLOR_RED,
        },
        AbnormalIndicator {
            label: "Abnormal",
            value: count_matching(red_flags, &["abnormal"]),
            color: COLOR_AMBER,
        },
        AbnormalIndicator {
            label: "Normal",
            value: count_matching(key_findings, &["normal"]),
            color: COLOR_TEAL,
        },
    ];

    // Per-parameter accuracy: 100 with a unit token, 70 with a bare number,
    // 30 when the parameter is mentioned without any digits at all.
    let mut measurement_accuracy = Vec::new();
    for param in PARAMETERS {
        let mut found = false;
        for line in lines {
            let lower = line.to_lowercase();
            if lower.contains(param.name) && line.chars().any(|c| c.is_ascii_digit()) {
                let confidence = if UNIT_TOKENS.iter().any(|u| lower.contains(u)) {
                    100
                } else {
                    70
                };
                measurement_accuracy.push(MeasurementAccuracy {
                    parameter: param.name.to_string(),
                    confidence,
                });
                found = true;
                break;
            }
        }
        if !found
            && lines
                .iter()
                .any(|l| l.to_lowercase().contains(param.name))
        {
            measurement_accuracy.push(MeasurementAccuracy {
                parameter: param.name.to_string(),
                confidence: 30,
            });
        }
    }

    let mut test_results = Vec::new();
    for keyword in keywords::TEST_KEYWORDS {
        let count = lines
            .iter()
            .filter(|l| l.to_lowercase().contains(keyword))
            .count();
        if count > 0 {
            test_results.push(TestResult {
                test_type: keyword.to_uppercase(),
                count,
                confidence: (count * 20).min(100),
            });
        }
    }

    ConfidenceMetrics {
        diagnostic_confidence,
        risk_levels,
        abnormal_indicators,
        measurement_accuracy,
        test_results,
    }
}

/// Deduplicate preserving first-occurrence order; substitute a placeholder
/// when nothing survives so every summary field is non-empty.
fn dedup_or_placeholder(entries: Vec<String>, label: &str) -> Vec<String> {
    let mut deduped: Vec<String> = Vec::with_capacity(entries.len());
    for entry in entries {
        if !deduped.contains(&entry) {
            deduped.push(entry);
        }
    }
    if deduped.is_empty() {
        vec![format!("No {label} found in the report.")]
    } else {
        deduped
    }
}
