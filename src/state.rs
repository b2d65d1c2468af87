use std::sync::Arc;

use crate::config::Config;
use crate::llm::cohere::CohereClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub cohere: Arc<CohereClient>,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let cohere = CohereClient::new(config.cohere.clone(), config.retry.clone())?;

        Ok(Self {
            cohere: Arc::new(cohere),
        })
    }
}
