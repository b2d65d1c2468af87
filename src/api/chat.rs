use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::models::{ChatRequest, ChatResponse, Transaction};
use crate::state::AppState;

/// POST /chat - Answer a finance question over the submitted transactions.
///
/// The full transaction list is rendered into the prompt so the model can
/// total categories itself. Provider failures degrade to a 200 response
/// whose answer carries the error text, so UI clients always have something
/// to display.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let question = req.question.trim();
    if question.is_empty() {
        return Err(ApiError::Validation("Question is required".to_string()));
    }

    let prompt = build_prompt(question, &req.transactions);

    let answer = match state.cohere.chat(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Chat completion failed: {e}");
            e.to_string()
        }
    };

    Ok(Json(ChatResponse { answer }))
}

// ─── Helper functions ────────────────────────────────────

fn build_prompt(question: &str, transactions: &[Transaction]) -> String {
    let lines = build_transaction_lines(transactions);
    format!(
        "\nYou are a helpful personal finance assistant.\n\
         \n\
         Always:\n\
         - Show total spent per category\n\
         - Give a short overall summary\n\
         - Provide friendly saving tips\n\
         \n\
         User question:\n\
         {question}\n\
         \n\
         Transactions:\n\
         {lines}\n"
    )
}

fn build_transaction_lines(transactions: &[Transaction]) -> String {
    transactions
        .iter()
        .map(|t| {
            let description = if t.description.is_empty() {
                "(no desc)"
            } else {
                t.description.as_str()
            };
            format!("{}: ${} (Category: {})", description, t.amount, t.category)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(description: &str, amount: f64, category: &str) -> Transaction {
        Transaction {
            description: description.to_string(),
            amount,
            category: category.to_string(),
        }
    }

    // ─── Transaction lines ───────────────────────────────

    #[test]
    fn test_transaction_line_format() {
        let lines = build_transaction_lines(&[txn("Coffee", 4.5, "food")]);
        assert_eq!(lines, "Coffee: $4.5 (Category: food)");
    }

    #[test]
    fn test_transaction_lines_joined_with_newlines() {
        let lines = build_transaction_lines(&[
            txn("Coffee", 4.5, "food"),
            txn("Rent", 1200.0, "housing"),
        ]);
        assert_eq!(
            lines,
            "Coffee: $4.5 (Category: food)\nRent: $1200 (Category: housing)"
        );
    }

    #[test]
    fn test_transaction_line_missing_description() {
        let lines = build_transaction_lines(&[txn("", 9.99, "general")]);
        assert_eq!(lines, "(no desc): $9.99 (Category: general)");
    }

    // ─── Prompt assembly ─────────────────────────────────

    #[test]
    fn test_prompt_contains_question_and_transactions() {
        let prompt = build_prompt("How much on food?", &[txn("Coffee", 4.5, "food")]);
        assert!(prompt.contains("User question:\nHow much on food?"));
        assert!(prompt.contains("Transactions:\nCoffee: $4.5 (Category: food)"));
    }

    #[test]
    fn test_prompt_keeps_assistant_instructions() {
        let prompt = build_prompt("anything", &[]);
        assert!(prompt.contains("You are a helpful personal finance assistant."));
        assert!(prompt.contains("- Show total spent per category"));
        assert!(prompt.contains("- Give a short overall summary"));
        assert!(prompt.contains("- Provide friendly saving tips"));
    }

    #[test]
    fn test_prompt_leading_and_trailing_newlines() {
        let prompt = build_prompt("q", &[txn("Coffee", 4.5, "food")]);
        assert!(prompt.starts_with("\nYou are"));
        assert!(prompt.ends_with("(Category: food)\n"));
    }

    #[test]
    fn test_prompt_empty_transactions() {
        let prompt = build_prompt("q", &[]);
        assert!(prompt.ends_with("Transactions:\n\n"));
    }

    #[test]
    fn test_prompt_renders_every_transaction() {
        let prompt = build_prompt(
            "summarize",
            &[
                txn("Coffee", 4.5, "food"),
                txn("Gym", 30.0, "health"),
                txn("Rent", 1200.0, "housing"),
            ],
        );
        assert!(prompt.contains("Coffee: $4.5 (Category: food)"));
        assert!(prompt.contains("Gym: $30 (Category: health)"));
        assert!(prompt.contains("Rent: $1200 (Category: housing)"));
    }
}
