//! Heuristic document-structuring engine.
//!
//! Rule-based, multi-pass analysis of raw report text: line classification
//! by keyword tables, numeric measurement range checks, summary aggregation
//! with synthetic confidence metrics, and local question answering.
//!
//! Everything in this module is a total, pure function over strings — no
//! I/O, no shared state, no failure modes beyond degenerate (empty) output.

pub mod answer;
pub mod classify;
pub mod keywords;
pub mod measurements;
pub mod summary;
pub mod types;

pub use answer::answer;
pub use summary::aggregate;
pub use types::{ConfidenceMetrics, StructuredSummary};
