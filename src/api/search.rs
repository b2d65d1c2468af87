use axum::extract::State;
use axum::Json;

use crate::error::{ApiError, ProviderError};
use crate::models::{SearchRequest, SearchResponse};
use crate::search::ranker;
use crate::state::AppState;

/// POST /hybrid-search - Rank transactions against a free-text query:
///   1. Extreme-value queries ("highest"/"lowest") short-circuit to an
///      amount scan, no embedding calls
///   2. Embed the query and every transaction summary in one batch
///   3. Blend cosine similarity with keyword boosts, keep totals above
///      the score floor
///   4. Return the top 5 by score, best first
pub async fn hybrid_search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = req.query.trim().to_string();
    if query.is_empty() {
        return Err(ApiError::Validation("Query is required".to_string()));
    }

    // ── Step 1: Extreme-value short-circuit ──────────────────
    if let Some(kind) = ranker::detect_extreme(&query) {
        let result = ranker::extreme_result(kind, &req.transactions).ok_or_else(|| {
            ApiError::Validation(
                "Transactions are required for highest/lowest queries".to_string(),
            )
        })?;
        return Ok(Json(SearchResponse {
            results: vec![result],
        }));
    }

    if req.transactions.is_empty() {
        return Ok(Json(SearchResponse {
            results: Vec::new(),
        }));
    }

    // ── Step 2: Batch embedding, query first ─────────────────
    let mut texts = Vec::with_capacity(req.transactions.len() + 1);
    texts.push(query.clone());
    texts.extend(req.transactions.iter().map(|t| t.summary()));

    let mut embeddings = state.cohere.embed_batch(&texts).await?.into_iter();
    let query_embedding = embeddings
        .next()
        .ok_or_else(|| ProviderError::Schema("no embeddings returned".to_string()))?;
    let summary_embeddings: Vec<Vec<f32>> = embeddings.collect();

    // ── Step 3: Score, filter, rank ──────────────────────────
    let results = ranker::score_transactions(
        &query,
        &req.transactions,
        &query_embedding,
        &summary_embeddings,
    )?;

    tracing::info!(
        "Hybrid search matched {} of {} transactions",
        results.len(),
        req.transactions.len()
    );

    Ok(Json(SearchResponse { results }))
}
