use tracing_subscriber::EnvFilter;

use txn_search::config::Config;
use txn_search::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        "Cohere API: {} (chat: {}, embeddings: {})",
        config.cohere.base_url,
        config.cohere.chat_model,
        config.cohere.embedding_model
    );

    let state = AppState::new(&config)?;
    let app = txn_search::app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
