//! Errors surfaced by the recommender.
//!
//! Classification and scoring cannot fail; only a recommendation request can,
//! and only for the two reasons below.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecommendError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    /// The request text was missing or empty, or the requested count was zero.
    #[error("{0}")]
    InvalidInput(String),

    /// Classification and ranking produced no candidates.
    #[error("{0}")]
    NotFound(String),
}

impl RecommendError {
    #[must_use]
    pub fn no_input() -> Self {
        Self::InvalidInput("No input provided".to_string())
    }

    #[must_use]
    pub fn no_recommendations() -> Self {
        Self::NotFound("No recommendations found".to_string())
    }
}
