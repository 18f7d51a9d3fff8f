//! Shared context handed to every endpoint handler.

use std::sync::Arc;

use crate::advice::AdviceClient;
use crate::config::Settings;
use crate::session::SessionState;

/// Cloneable handler state: session, settings, and the optional advice
/// client (absent when no API key is configured).
#[derive(Clone)]
pub struct ApiContext {
    pub session: Arc<SessionState>,
    pub settings: Arc<Settings>,
    pub advice: Option<Arc<AdviceClient>>,
}

impl ApiContext {
    pub fn new(settings: Settings) -> Self {
        let advice = AdviceClient::from_settings(&settings).map(Arc::new);
        Self {
            session: Arc::new(SessionState::new()),
            settings: Arc::new(settings),
            advice,
        }
    }
}
