//! # Request and Response Shapes
//!
//! JSON documents exchanged with callers of the recommender. Transport is
//! left to the caller; the CLI reads requests from arguments or stdin and
//! prints responses to stdout.
//!
//! ```text
//! request:  { "text": "...", "top_n": 5 }
//! success:  { "detected_emotion", "confidence", "recommendations": [...], "total" }
//! error:    { "error": "..." }
//! ```

use crate::catalog::{Catalog, CatalogStats};
use crate::error::{RecommendError, Result};
use crate::mood::{supported_labels, Mood};
use crate::recommender::{RecommendationSet, Recommender};
use crate::sentiment::SentimentOracle;
use crate::song::Song;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub text: Option<String>,
    /// Falls back to the configured default when absent. Zero or negative
    /// counts ask for nothing and are answered with not-found.
    #[serde(default)]
    pub top_n: Option<i64>,
}

impl RecommendRequest {
    pub fn new(text: impl Into<String>, top_n: Option<i64>) -> Self {
        Self {
            text: Some(text.into()),
            top_n,
        }
    }

    /// Parses a request document. Malformed JSON is invalid input.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| RecommendError::InvalidInput(format!("Malformed request: {e}")))
    }

}

/// Number of songs to return for a requested count.
///
/// `None` takes `default`. Negative counts are treated as zero.
#[must_use]
pub fn resolve_top_n(requested: Option<i64>, default: usize) -> usize {
    match requested {
        None => default,
        Some(n) => usize::try_from(n.max(0)).unwrap_or(usize::MAX),
    }
}

/// One recommended song as sent to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationView<'a> {
    #[serde(flatten)]
    pub song: &'a Song,
    pub match_score: f64,
    pub confidence: f64,
    pub detected_emotion: Mood,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendResponse<'a> {
    pub detected_emotion: Mood,
    /// Rounded to two decimals.
    pub confidence: f64,
    pub recommendations: Vec<RecommendationView<'a>>,
    pub total: usize,
}

impl<'a> From<RecommendationSet<'a>> for RecommendResponse<'a> {
    fn from(set: RecommendationSet<'a>) -> Self {
        let recommendations: Vec<RecommendationView<'a>> = set
            .items
            .into_iter()
            .map(|item| RecommendationView {
                song: item.song,
                match_score: item.match_score,
                confidence: item.confidence,
                detected_emotion: item.detected_mood,
            })
            .collect();

        Self {
            detected_emotion: set.mood,
            confidence: (set.confidence * 100.0).round() / 100.0,
            total: recommendations.len(),
            recommendations,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&RecommendError> for ErrorResponse {
    fn from(err: &RecommendError) -> Self {
        Self { error: err.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmotionsResponse {
    pub emotions: Vec<&'static str>,
}

/// Answers a recommendation request.
///
/// Missing or empty text is rejected before the recommender runs. Requests
/// without `top_n` get `default_top_n` songs.
pub fn handle_recommend<'c, O: SentimentOracle>(
    recommender: &Recommender<'c, O>,
    request: &RecommendRequest,
    default_top_n: usize,
) -> Result<RecommendResponse<'c>> {
    let text = match request.text.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => return Err(RecommendError::no_input()),
    };
    let top_n = resolve_top_n(request.top_n, default_top_n);

    recommender.recommend(text, top_n).map(RecommendResponse::from)
}

/// Answers a mood-based request, skipping emotion detection.
pub fn handle_mood<'c, O: SentimentOracle>(
    recommender: &Recommender<'c, O>,
    mood: Mood,
    top_n: Option<i64>,
    default_top_n: usize,
) -> Result<RecommendResponse<'c>> {
    let top_n = resolve_top_n(top_n, default_top_n);
    recommender.recommend_by_mood(mood, top_n).map(RecommendResponse::from)
}

/// The six supported mood labels.
#[must_use]
pub fn emotions() -> EmotionsResponse {
    EmotionsResponse {
        emotions: supported_labels(),
    }
}

/// Per-mood and per-genre counts of the catalog.
#[must_use]
pub fn stats(catalog: &Catalog) -> CatalogStats {
    catalog.stats()
}
