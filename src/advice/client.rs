//! OpenRouter chat-completions client for open-ended report advice.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::analysis::StructuredSummary;
use crate::config::Settings;

use super::prompt;

/// Model used for advice generation.
const ADVICE_MODEL: &str = "deepseek/deepseek-chat-v3.1:free";

/// Total bounded wait for one advice call.
const REQUEST_TIMEOUT_SECS: u64 = 20;

/// Tri-state result of a remote advice call.
///
/// Exactly one of `advice` / `error` is populated, keyed by `success`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceOutcome {
    pub success: bool,
    pub advice: Option<String>,
    pub error: Option<String>,
}

impl AdviceOutcome {
    fn ok(advice: String) -> Self {
        Self {
            success: true,
            advice: Some(advice),
            error: None,
        }
    }

    fn failed(error: String) -> Self {
        Self {
            success: false,
            advice: None,
            error: Some(error),
        }
    }
}

/// HTTP client for the OpenRouter chat-completions endpoint.
pub struct AdviceClient {
    url: String,
    api_key: String,
    client: reqwest::Client,
}

impl AdviceClient {
    pub fn new(url: &str, api_key: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            url: url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        }
    }

    /// Build a client from settings; `None` when no API key is configured.
    pub fn from_settings(settings: &Settings) -> Option<Self> {
        settings
            .openrouter_api_key
            .as_deref()
            .map(|key| Self::new(&settings.openrouter_url, key))
    }

    /// Ask the remote model for advice grounded in the structured summary.
    ///
    /// Never returns an error: timeouts, connection failures, and
    /// malformed responses all come back as `success: false` outcomes.
    pub async fn get_advice(&self, summary: &StructuredSummary, query: &str) -> AdviceOutcome {
        let body = ChatRequest {
            model: ADVICE_MODEL,
            messages: vec![
                Message {
                    role: "system",
                    content: prompt::ADVICE_SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user",
                    content: prompt::build_advice_prompt(summary, query),
                },
            ],
            temperature: 0.7,
            max_tokens: 500,
            top_p: 0.9,
            stream: false,
        };

        let started = std::time::Instant::now();
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", "http://localhost:8000")
            .header("X-Title", crate::config::APP_NAME)
            .json(&body)
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) if e.is_timeout() => {
                tracing::warn!(elapsed_ms = started.elapsed().as_millis() as u64, "Advice request timed out");
                return AdviceOutcome::failed("Request timed out. Please try again.".to_string());
            }
            Err(e) if e.is_connect() => {
                return AdviceOutcome::failed(format!("Cannot reach advice service: {e}"));
            }
            Err(e) => {
                return AdviceOutcome::failed(format!("API request error: {e}"));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return AdviceOutcome::failed(format!(
                "Advice service returned {status}: {body}"
            ));
        }

        let parsed: ChatResponse = match response.json().await {
            Ok(p) => p,
            Err(e) => return AdviceOutcome::failed(format!("Malformed advice response: {e}")),
        };

        match parsed.choices.into_iter().next() {
            Some(choice) => {
                tracing::debug!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Advice request completed"
                );
                AdviceOutcome::ok(choice.message.content)
            }
            None => AdviceOutcome::failed("Advice response contained no choices".to_string()),
        }
    }
}

/// Request body for the chat-completions endpoint.
#[derive(Serialize)]
struct ChatRequest {
    model: &'static str,
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    stream: bool,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

/// Response body from the chat-completions endpoint.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageBody,
}

#[derive(Deserialize)]
struct MessageBody {
    content: String,
}
