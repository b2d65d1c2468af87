use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// Cohere API configuration
    pub cohere: CohereConfig,
    /// Retry behaviour for provider calls
    pub retry: RetryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohereConfig {
    /// Base URL for the Cohere API
    pub base_url: String,
    /// API key sent as a bearer token on every call
    pub api_key: String,
    /// Model name for chat
    pub chat_model: String,
    /// Model name for embeddings
    pub embedding_model: String,
    /// Completion token cap for chat
    pub chat_max_tokens: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Bounded exponential backoff for transient provider failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Base delay in milliseconds for exponential backoff
    pub backoff_base_ms: u64,
    /// Maximum delay in milliseconds (cap for exponential backoff)
    pub backoff_max_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:9000".to_string(),
            cohere: CohereConfig::default(),
            retry: RetryConfig::default(),
        }
    }
}

impl Default for CohereConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.cohere.ai".to_string(),
            api_key: String::new(),
            chat_model: "command-nightly".to_string(),
            embedding_model: "embed-english-light-v3.0".to_string(),
            chat_max_tokens: 300,
            timeout_secs: 30,
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            backoff_base_ms: 250,
            backoff_max_ms: 2_000,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("TXN_SEARCH_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(url) = std::env::var("COHERE_BASE_URL") {
            config.cohere.base_url = url;
        }
        if let Ok(key) = std::env::var("COHERE_API_KEY") {
            config.cohere.api_key = key;
        }
        if let Ok(model) = std::env::var("COHERE_CHAT_MODEL") {
            config.cohere.chat_model = model;
        }
        if let Ok(model) = std::env::var("COHERE_EMBEDDING_MODEL") {
            config.cohere.embedding_model = model;
        }
        if let Ok(val) = std::env::var("COHERE_CHAT_MAX_TOKENS") {
            if let Ok(v) = val.parse() {
                config.cohere.chat_max_tokens = v;
            }
        }
        if let Ok(val) = std::env::var("COHERE_TIMEOUT_SECS") {
            if let Ok(v) = val.parse() {
                config.cohere.timeout_secs = v;
            }
        }
        if let Ok(val) = std::env::var("COHERE_MAX_RETRIES") {
            if let Ok(v) = val.parse() {
                config.retry.max_retries = v;
            }
        }
        if let Ok(val) = std::env::var("COHERE_BACKOFF_BASE_MS") {
            if let Ok(v) = val.parse() {
                config.retry.backoff_base_ms = v;
            }
        }
        if let Ok(val) = std::env::var("COHERE_BACKOFF_MAX_MS") {
            if let Ok(v) = val.parse() {
                config.retry.backoff_max_ms = v;
            }
        }

        if config.cohere.api_key.is_empty() {
            anyhow::bail!("COHERE_API_KEY is required");
        }

        Ok(config)
    }
}
