use crate::error::DimensionMismatch;
use crate::models::{ScoredResult, Transaction};
use crate::search::similarity::cosine;

/// Maximum number of results returned by a search.
pub const MAX_RESULTS: usize = 5;
/// Combined scores must be strictly above this to be returned.
pub const SCORE_FLOOR: f32 = 0.3;
/// Keyword boost when any query token appears in the description.
const DESCRIPTION_BOOST: f32 = 0.7;
/// Keyword boost when any query token appears in the category.
const CATEGORY_BOOST: f32 = 0.3;

/// Queries asking for an extreme amount bypass scoring entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremeKind {
    Max,
    Min,
}

impl ExtremeKind {
    /// Sentinel result id for this kind.
    pub fn sentinel(self) -> &'static str {
        match self {
            ExtremeKind::Max => "max",
            ExtremeKind::Min => "min",
        }
    }
}

/// Detect an extreme-value query. Plain substring matching on the
/// lower-cased query; "highest"/"most" wins when both kinds appear.
pub fn detect_extreme(query: &str) -> Option<ExtremeKind> {
    let q = query.to_lowercase();
    if q.contains("highest") || q.contains("most") {
        Some(ExtremeKind::Max)
    } else if q.contains("lowest") || q.contains("least") {
        Some(ExtremeKind::Min)
    } else {
        None
    }
}

/// Pick the transaction with the extreme amount, scored 1.0 under the
/// sentinel id. Ties keep the first occurrence in list order.
/// Returns None for an empty list.
pub fn extreme_result(kind: ExtremeKind, transactions: &[Transaction]) -> Option<ScoredResult> {
    let mut best: Option<&Transaction> = None;

    for t in transactions {
        best = match best {
            None => Some(t),
            Some(b) => {
                let replace = match kind {
                    ExtremeKind::Max => t.amount > b.amount,
                    ExtremeKind::Min => t.amount < b.amount,
                };
                if replace {
                    Some(t)
                } else {
                    Some(b)
                }
            }
        };
    }

    best.map(|t| ScoredResult {
        id: kind.sentinel().to_string(),
        text: t.summary(),
        score: 1.0,
    })
}

/// Keyword boost for one transaction: one description boost plus one
/// category boost at most, no matter how many tokens matched.
fn keyword_score(query: &str, transaction: &Transaction) -> f32 {
    let query = query.to_lowercase();
    let description = transaction.description.to_lowercase();
    let category = transaction.category.to_lowercase();

    let mut score = 0.0;
    if query.split_whitespace().any(|tok| description.contains(tok)) {
        score += DESCRIPTION_BOOST;
    }
    if query.split_whitespace().any(|tok| category.contains(tok)) {
        score += CATEGORY_BOOST;
    }
    score
}

/// Blend semantic and keyword scores over every transaction.
///
/// Pipeline:
/// 1. For the transaction at index `i`, cosine of the query embedding
///    against `summary_embeddings[i]`, plus keyword boosts.
/// 2. Keep totals strictly above `SCORE_FLOOR` (checked before rounding),
///    with the list index as the result id.
/// 3. Stable sort by score descending (ties keep list order).
/// 4. Truncate to `MAX_RESULTS`.
pub fn score_transactions(
    query: &str,
    transactions: &[Transaction],
    query_embedding: &[f32],
    summary_embeddings: &[Vec<f32>],
) -> Result<Vec<ScoredResult>, DimensionMismatch> {
    let mut results = Vec::new();

    for (i, (transaction, embedding)) in transactions.iter().zip(summary_embeddings).enumerate() {
        let semantic = cosine(query_embedding, embedding)?;
        let total = semantic + keyword_score(query, transaction);

        if total > SCORE_FLOOR {
            results.push(ScoredResult {
                id: i.to_string(),
                text: transaction.summary(),
                score: round3(total),
            });
        }
    }

    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    results.truncate(MAX_RESULTS);
    Ok(results)
}

fn round3(x: f32) -> f32 {
    (x * 1000.0).round() / 1000.0
}
