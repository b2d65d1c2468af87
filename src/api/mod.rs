//! Axum HTTP handlers for hybrid search and finance chat.

pub mod chat;
pub mod search;
