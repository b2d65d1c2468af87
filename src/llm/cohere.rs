use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{CohereConfig, RetryConfig};
use crate::error::ProviderError;

/// Cohere embeds at most this many texts per request.
const EMBED_BATCH_SIZE: usize = 96;
/// Queries and transaction summaries are embedded into the same space.
const EMBED_INPUT_TYPE: &str = "search_query";

/// Client for the Cohere v1 embed and chat endpoints.
///
/// Built once at startup and shared across requests; the inner
/// `reqwest::Client` pools connections. Transient failures (timeouts,
/// 429, 5xx) are retried with bounded exponential backoff.
pub struct CohereClient {
    http: reqwest::Client,
    config: CohereConfig,
    retry: RetryConfig,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    texts: &'a [String],
    model: &'a str,
    input_type: &'a str,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

#[derive(Serialize)]
struct ChatApiRequest<'a> {
    model: &'a str,
    message: &'a str,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatApiResponse {
    text: String,
}

impl CohereClient {
    pub fn new(config: CohereConfig, retry: RetryConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            config,
            retry,
        })
    }

    /// Generate embeddings for a batch of texts, preserving input order.
    pub async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ProviderError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/v1/embed", self.config.base_url);
        let mut all_embeddings = Vec::with_capacity(texts.len());

        for chunk in texts.chunks(EMBED_BATCH_SIZE) {
            let req = EmbedRequest {
                texts: chunk,
                model: &self.config.embedding_model,
                input_type: EMBED_INPUT_TYPE,
            };

            let body: EmbedResponse = self.post_json(&url, &req).await?;
            if body.embeddings.len() != chunk.len() {
                return Err(ProviderError::Schema(format!(
                    "expected {} embeddings, got {}",
                    chunk.len(),
                    body.embeddings.len()
                )));
            }
            all_embeddings.extend(body.embeddings);
        }

        Ok(all_embeddings)
    }

    /// Generate an embedding for a single text.
    pub async fn embed_single(&self, text: &str) -> Result<Vec<f32>, ProviderError> {
        let results = self.embed_batch(&[text.to_string()]).await?;
        results
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Schema("no embedding returned".to_string()))
    }

    /// Send a chat message and return the completion text.
    pub async fn chat(&self, message: &str) -> Result<String, ProviderError> {
        let url = format!("{}/v1/chat", self.config.base_url);
        let req = ChatApiRequest {
            model: &self.config.chat_model,
            message,
            max_tokens: self.config.chat_max_tokens,
        };

        let body: ChatApiResponse = self.post_json(&url, &req).await?;
        Ok(body.text)
    }

    /// POST a JSON body with bearer auth, retrying transient failures.
    async fn post_json<Req, Resp>(&self, url: &str, req: &Req) -> Result<Resp, ProviderError>
    where
        Req: Serialize,
        Resp: serde::de::DeserializeOwned,
    {
        let mut last_err: Option<ProviderError> = None;

        for attempt in 0..=self.retry.max_retries {
            match self.post_once(url, req).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    if !e.is_transient() {
                        return Err(e);
                    }
                    if attempt < self.retry.max_retries {
                        let delay = compute_backoff(&self.retry, attempt);
                        tracing::warn!(
                            "provider call failed (attempt {attempt}), retrying in {delay}ms: {e}"
                        );
                        tokio::time::sleep(Duration::from_millis(delay)).await;
                    }
                    last_err = Some(e);
                }
            }
        }

        Err(last_err
            .unwrap_or_else(|| ProviderError::Schema("retries exhausted".to_string())))
    }

    async fn post_once<Req, Resp>(&self, url: &str, req: &Req) -> Result<Resp, ProviderError>
    where
        Req: Serialize,
        Resp: serde::de::DeserializeOwned,
    {
        let resp = self
            .http
            .post(url)
            .bearer_auth(&self.config.api_key)
            .json(req)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        resp.json::<Resp>()
            .await
            .map_err(|e| ProviderError::Schema(e.to_string()))
    }
}

/// Backoff delay for a given attempt, exponential and capped.
fn compute_backoff(retry: &RetryConfig, attempt: u32) -> u64 {
    let delay = retry
        .backoff_base_ms
        .saturating_mul(2u64.saturating_pow(attempt));
    delay.min(retry.backoff_max_ms)
}
