//! Application constants and environment-driven settings.

use std::net::SocketAddr;
use std::path::PathBuf;

pub const APP_NAME: &str = "MedSift";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "medsift=info,tower_http=info"
}

/// Default OpenRouter chat-completions endpoint.
pub const DEFAULT_OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Get the application data directory: ~/MedSift/ on all platforms,
/// unless overridden via MEDSIFT_DATA_DIR.
pub fn app_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MEDSIFT_DATA_DIR") {
        return PathBuf::from(dir);
    }
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("MedSift")
}

/// Directory where uploaded report files are stored.
pub fn uploads_dir() -> PathBuf {
    app_data_dir().join("uploads")
}

/// How chat questions are answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMode {
    /// Keyword lookup against the uploaded report (no network).
    Local,
    /// Delegate to the remote advice service.
    Remote,
}

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub chat_mode: ChatMode,
    pub openrouter_api_key: Option<String>,
    pub openrouter_url: String,
}

impl Settings {
    /// Read settings from the environment, falling back to defaults.
    ///
    /// `MEDSIFT_BIND` — listen address (default 127.0.0.1:8000)
    /// `MEDSIFT_CHAT_MODE` — "local" (default) or "remote"
    /// `OPENROUTER_API_KEY` / `OPENROUTER_URL` — remote advice credentials
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("MEDSIFT_BIND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 8000)));

        let chat_mode = match std::env::var("MEDSIFT_CHAT_MODE").as_deref() {
            Ok("remote") => ChatMode::Remote,
            _ => ChatMode::Local,
        };

        let openrouter_api_key = std::env::var("OPENROUTER_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());
        let openrouter_url = std::env::var("OPENROUTER_URL")
            .unwrap_or_else(|_| DEFAULT_OPENROUTER_URL.to_string());

        Self {
            bind_addr,
            chat_mode,
            openrouter_api_key,
            openrouter_url,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            chat_mode: ChatMode::Local,
            openrouter_api_key: None,
            openrouter_url: DEFAULT_OPENROUTER_URL.to_string(),
        }
    }
}
