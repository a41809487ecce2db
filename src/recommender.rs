//! # Hybrid Recommender
//!
//! Ties the pipeline together: text goes through the sentiment oracle and
//! the classifier, the detected mood drives the ranker, and the top results
//! are annotated with the classification.
//!
//! ```
//! use moodmuse::catalog::Catalog;
//! use moodmuse::mood::Mood;
//! use moodmuse::recommender::Recommender;
//! use moodmuse::sentiment::{FixedSentiment, Sentiment};
//!
//! let catalog = Catalog::builtin();
//! let oracle = FixedSentiment(Sentiment::new(0.8, 0.5));
//! let recommender = Recommender::new(&catalog, oracle);
//!
//! let result = recommender.recommend("best day ever", 3)?;
//! assert_eq!(result.mood, Mood::Happy);
//! assert_eq!(result.items.len(), 3);
//! # Ok::<(), moodmuse::error::RecommendError>(())
//! ```

use crate::algorithm::rank_songs;
use crate::catalog::Catalog;
use crate::classifier::{detect_emotion, Classification};
use crate::error::{RecommendError, Result};
use crate::mood::Mood;
use crate::sentiment::{LexiconAnalyzer, SentimentOracle};
use crate::song::Song;
use log::{debug, info};

/// Number of recommendations returned when the caller does not ask for a
/// specific count.
pub const DEFAULT_TOP_N: usize = 5;

/// Candidates ranked per requested recommendation.
const CANDIDATE_FACTOR: usize = 2;

/// A recommended song, annotated with the request's classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation<'a> {
    pub song: &'a Song,
    pub match_score: f64,
    pub confidence: f64,
    pub detected_mood: Mood,
}

/// Outcome of one recommendation request.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationSet<'a> {
    pub mood: Mood,
    pub confidence: f64,
    /// Best match first.
    pub items: Vec<Recommendation<'a>>,
}

/// Recommends songs from a borrowed catalog.
///
/// Holds no mutable state, so one recommender can serve any number of
/// requests, including from several threads at once when the oracle is
/// `Sync`.
#[derive(Debug, Clone)]
pub struct Recommender<'c, O = LexiconAnalyzer> {
    catalog: &'c Catalog,
    oracle: O,
}

impl<'c> Recommender<'c, LexiconAnalyzer> {
    /// Recommender backed by the bundled lexicon analyzer.
    #[must_use]
    pub fn with_lexicon(catalog: &'c Catalog) -> Self {
        Self::new(catalog, LexiconAnalyzer::new())
    }
}

impl<'c, O: SentimentOracle> Recommender<'c, O> {
    #[must_use]
    pub fn new(catalog: &'c Catalog, oracle: O) -> Self {
        Self { catalog, oracle }
    }

    /// Classifies `text` without ranking anything.
    pub fn detect(&self, text: &str) -> Result<Classification> {
        if text.is_empty() {
            return Err(RecommendError::no_input());
        }
        Ok(detect_emotion(&self.oracle, text))
    }

    /// Recommends up to `top_n` songs for the mood expressed in `text`.
    ///
    /// # Errors
    ///
    /// * [`RecommendError::InvalidInput`] if `text` is empty. The oracle is
    ///   not consulted. Whitespace is ordinary text and usually reads as
    ///   neutral.
    /// * [`RecommendError::NotFound`] if nothing could be ranked, e.g. for an
    ///   empty catalog or `top_n == 0`.
    pub fn recommend(&self, text: &str, top_n: usize) -> Result<RecommendationSet<'c>> {
        let classification = self.detect(text)?;
        info!(
            "Detected {} with confidence {:.2}",
            classification.mood, classification.confidence
        );
        self.annotate(classification, top_n)
    }

    /// Recommends up to `top_n` songs for a mood chosen by the caller.
    ///
    /// The mood is given rather than inferred, so it is reported with full
    /// confidence.
    pub fn recommend_by_mood(&self, mood: Mood, top_n: usize) -> Result<RecommendationSet<'c>> {
        self.annotate(Classification { mood, confidence: 1.0 }, top_n)
    }

    fn annotate(&self, classification: Classification, top_n: usize) -> Result<RecommendationSet<'c>> {
        let Classification { mood, confidence } = classification;

        let candidates = rank_songs(self.catalog, mood, top_n.saturating_mul(CANDIDATE_FACTOR));
        if candidates.is_empty() {
            debug!("No candidates for {mood} in a catalog of {}", self.catalog.len());
            return Err(RecommendError::no_recommendations());
        }

        let items: Vec<Recommendation<'c>> = candidates
            .into_iter()
            .map(|scored| Recommendation {
                song: scored.song,
                match_score: scored.match_score,
                confidence,
                detected_mood: mood,
            })
            .take(top_n)
            .collect();

        debug!("Returning {} recommendations for {mood}", items.len());
        Ok(RecommendationSet { mood, confidence, items })
    }
}
