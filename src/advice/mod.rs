//! Remote advice service boundary.
//!
//! The only operation in this crate with real latency. Its failures are
//! always returned as data (`AdviceOutcome` with `success: false`) — no
//! error from the remote call crosses into the analysis core.

mod client;
pub mod prompt;

pub use client::{AdviceClient, AdviceOutcome};
