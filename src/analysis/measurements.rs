//! Measurement extraction: find known clinical parameters in a line, pull
//! the first numeric token, and check it against a static normal range.
//!
//! Pure per-line function. A line can yield several observations (one per
//! parameter mentioned); a line with no parsable number yields none for
//! that parameter — absence is a skip, never an error.

use std::sync::LazyLock;

use regex::Regex;

/// A known clinical parameter and its reference range, when one exists.
pub struct Parameter {
    pub name: &'static str,
    /// Inclusive (low, high) normal range. `None` means the parameter is
    /// recognized but carries no normal/abnormal verdict.
    pub range: Option<(f64, f64)>,
}

/// Recognized clinical parameters. Names are lower-case because lines are
/// lower-cased before matching.
pub const PARAMETERS: &[Parameter] = &[
    Parameter { name: "blood pressure", range: Some((90.0, 120.0)) }, // systolic
    Parameter { name: "heart rate", range: Some((60.0, 100.0)) },
    Parameter { name: "temperature", range: Some((36.5, 37.5)) }, // celsius
    Parameter { name: "glucose", range: Some((70.0, 140.0)) },    // mg/dL
    Parameter { name: "cholesterol", range: Some((0.0, 200.0)) }, // mg/dL
    Parameter { name: "bpm", range: None },
    Parameter { name: "mmhg", range: None },
    Parameter { name: "mg/dl", range: None },
    Parameter { name: "white blood cell", range: None },
    Parameter { name: "red blood cell", range: None },
    Parameter { name: "platelet", range: None },
    Parameter { name: "hemoglobin", range: None },
    Parameter { name: "creatinine", range: None },
];

/// Unit tokens that raise measurement-accuracy confidence to 100.
pub const UNIT_TOKENS: &[&str] = &["mg/dl", "mmhg", "bpm"];

/// First integer or decimal token in a line.
static NUMBER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.?\d*").expect("Invalid number token pattern"));

/// Range verdict for an extracted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Normal,
    Abnormal,
    /// Parameter has no reference range; recorded without a verdict.
    Unknown,
}

/// A (parameter, value) pair extracted from one line.
#[derive(Debug, Clone)]
pub struct MeasurementObservation {
    pub parameter: &'static str,
    pub value: f64,
    pub verdict: Verdict,
}

/// Scan one lower-cased line for known parameters with a numeric value.
///
/// The *first* numeric token of the line is used for every parameter the
/// line mentions — this mirrors how reports state "heart rate 72 bpm".
pub fn extract(lower_line: &str) -> Vec<MeasurementObservation> {
    let mut observations = Vec::new();

    for param in PARAMETERS {
        if !lower_line.contains(param.name) {
            continue;
        }
        let Some(token) = NUMBER_TOKEN.find(lower_line) else {
            continue;
        };
        let Ok(value) = token.as_str().parse::<f64>() else {
            // Malformed token (e.g. a bare "."): skip this parameter.
            continue;
        };

        let verdict = match param.range {
            Some((low, high)) if value < low || value > high => Verdict::Abnormal,
            Some(_) => Verdict::Normal,
            None => Verdict::Unknown,
        };

        observations.push(MeasurementObservation {
            parameter: param.name,
            value,
            verdict,
        });
    }

    observations
}
