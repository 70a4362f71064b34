use crate::config::Config;
use partyline_llm::CompletionClient;
use std::sync::Arc;

/// Shared application state passed to all handlers
///
/// Both fields are read-only after startup; concurrent handler invocations
/// share them through Arc without further coordination.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub llm_client: Arc<dyn CompletionClient>,
}

impl AppState {
    pub fn new(config: Config, llm_client: Arc<dyn CompletionClient>) -> Self {
        Self {
            config: Arc::new(config),
            llm_client,
        }
    }
}
