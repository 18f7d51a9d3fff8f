//! HTTP API: upload, summary, chat, and advice endpoints under `/api/v1`.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod types;

pub use router::api_router;
pub use types::ApiContext;
