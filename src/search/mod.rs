//! Transaction ranking: embedding cosine similarity blended with keyword boosts.

pub mod ranker;
pub mod similarity;
