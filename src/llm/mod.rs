//! Cohere API client for chat completions and text embeddings.

pub mod cohere;
