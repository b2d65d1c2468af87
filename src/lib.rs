//! # txn-search
//!
//! A Rust web service for exploring personal spending with the Cohere API.
//! Transactions travel with every request and nothing is stored server-side,
//! so the service is a pure function of its inputs plus the model.
//!
//! ## Endpoints
//!
//! - `POST /hybrid-search` ranks the submitted transactions against a
//!   free-text query:
//!
//! ```text
//!  query ──┬─► "highest"/"lowest"? ──► amount scan ──► single result
//!          │
//!          └─► embed [query + all summaries] in one batch
//!                  │
//!                  ▼
//!          cosine(query, summary) + keyword boosts
//!          (+0.7 description hit, +0.3 category hit)
//!                  │  keep totals > 0.3
//!                  ▼
//!          sort by score desc, round to 3 decimals, top 5
//! ```
//!
//! - `POST /chat` renders the transactions into a prompt and forwards the
//!   user's question to the chat model.
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for the server and Cohere settings
//! - [`models`] - Shared data types: `Transaction`, request/response types
//! - [`error`] - Error taxonomy and HTTP status mapping
//! - [`llm::cohere`] - Cohere client for chat completions and batch embeddings
//! - [`search::similarity`] - Cosine similarity over embedding vectors
//! - [`search::ranker`] - Keyword boosts, score blending, and extreme-value scans
//! - [`api`] - Axum HTTP handlers for hybrid search and chat
//! - [`state`] - Shared application state holding the Cohere client

use axum::routing::post;
use axum::Router;

pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod models;
pub mod search;
pub mod state;

use crate::state::AppState;

/// Build the application router. Shared between the binary and tests.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/hybrid-search", post(api::search::hybrid_search))
        .route("/chat", post(api::chat::chat))
        .with_state(state)
}
