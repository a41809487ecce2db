//! Emotion classification from text sentiment.
//!
//! The rules overlap (for example `polarity = 0.5, subjectivity = 0.7`
//! satisfies both the romantic and the energetic rule), so they are checked
//! in a fixed order and the first match wins.

use crate::mood::Mood;
use crate::sentiment::{Sentiment, SentimentOracle};
use log::debug;
use serde::Serialize;

/// Mood detected for a piece of text and how sure the classifier is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub mood: Mood,
    /// Always within `0.0..=1.0`.
    pub confidence: f64,
}

impl Classification {
    fn new(mood: Mood, confidence: f64) -> Self {
        Self {
            mood,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}

/// Maps a sentiment to a mood. Total: every input yields exactly one result.
#[must_use]
pub fn classify(sentiment: Sentiment) -> Classification {
    let Sentiment { polarity, subjectivity } = sentiment;

    let result = if polarity > 0.6 {
        Classification::new(Mood::Happy, polarity.min(0.95))
    } else if polarity < -0.3 {
        if subjectivity > 0.6 {
            Classification::new(Mood::Sad, polarity.abs().min(0.90))
        } else {
            Classification::new(Mood::Angry, (polarity.abs() * 1.2).min(0.85))
        }
    } else if polarity > 0.2 && subjectivity > 0.5 {
        Classification::new(Mood::Romantic, 0.75)
    } else if polarity.abs() < 0.2 && subjectivity < 0.4 {
        Classification::new(Mood::Calm, 0.70)
    } else if polarity > 0.3 {
        Classification::new(Mood::Energetic, 0.80)
    } else {
        Classification::new(Mood::Calm, 0.60)
    };

    debug!(
        "Classified polarity {polarity:.3}, subjectivity {subjectivity:.3} as {} ({:.2})",
        result.mood, result.confidence
    );
    result
}

/// Runs `oracle` over `text` and classifies the result.
pub fn detect_emotion<O: SentimentOracle>(oracle: &O, text: &str) -> Classification {
    classify(oracle.analyze(text))
}
