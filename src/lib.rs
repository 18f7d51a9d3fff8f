//! MedSift: heuristic triage for uploaded medical reports.
//!
//! A rule-based structuring engine scans extracted report text line by
//! line, tags lines into categories by keyword tables, range-checks
//! numeric measurements, and derives synthetic confidence metrics. An
//! HTTP API serves one session of report + chat at a time; questions are
//! answered locally by keyword lookup or delegated to a remote model.
//!
//! This is a triage aid, not a diagnostic engine.

pub mod advice;
pub mod analysis;
pub mod api;
pub mod config;
pub mod extraction;
pub mod session;

use tracing_subscriber::EnvFilter;

/// Initialize logging and serve the API until shutdown.
pub async fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let settings = config::Settings::from_env();
    if settings.openrouter_api_key.is_none() {
        tracing::info!("No OPENROUTER_API_KEY set; remote advice is disabled");
    }

    let bind_addr = settings.bind_addr;
    let ctx = api::ApiContext::new(settings);
    let router = api::api_router(ctx);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .unwrap_or_else(|e| panic!("Cannot bind {bind_addr}: {e}"));
    tracing::info!(addr = %bind_addr, "Listening");

    axum::serve(listener, router)
        .await
        .expect("Server terminated unexpectedly");
}
