use serde::{Deserialize, Serialize};

/// A transaction supplied inline with a request. Nothing is persisted;
/// the list position doubles as the identifier in search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "general".to_string()
}

impl Transaction {
    /// One-line rendering used both for embedding and for result text.
    /// Whole amounts render without a decimal point ("$20", not "$20.0").
    pub fn summary(&self) -> String {
        format!(
            "{}: ${} (Category: {})",
            self.description, self.amount, self.category
        )
    }
}

/// Hybrid-search request
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// A ranked search result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredResult {
    pub id: String,
    pub text: String,
    pub score: f32,
}

/// Hybrid-search response
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub results: Vec<ScoredResult>,
}

/// Chat request
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// Chat response
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub answer: String,
}
