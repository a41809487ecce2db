//! # Sentiment Module
//!
//! Text sentiment as consumed by the emotion classifier. The classifier only
//! depends on the [`SentimentOracle`] trait; [`LexiconAnalyzer`] is the
//! bundled implementation.
//!
//! ## Lexicon scoring
//!
//! Each known word carries a `(polarity, subjectivity)` pair. Within a
//! clause, an intensifier scales the next sentiment word and a negator flips
//! its polarity at half strength ("not good" is mildly negative, not the
//! opposite of "good"). The text's sentiment is the mean over every assessed
//! word. Text without a single known word is neutral and objective.

use log::trace;
use std::collections::HashMap;

/// Polarity in `-1.0..=1.0` and subjectivity in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl Sentiment {
    #[must_use]
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }
}

/// Anything that can turn text into a [`Sentiment`].
///
/// Implementations must be deterministic: the same text always yields the
/// same sentiment.
pub trait SentimentOracle {
    fn analyze(&self, text: &str) -> Sentiment;
}

impl<T: SentimentOracle + ?Sized> SentimentOracle for &T {
    fn analyze(&self, text: &str) -> Sentiment {
        (**self).analyze(text)
    }
}

/// Oracle that returns the same sentiment for every text. Handy for tests
/// and for replaying a known classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSentiment(pub Sentiment);

impl SentimentOracle for FixedSentiment {
    fn analyze(&self, _text: &str) -> Sentiment {
        self.0
    }
}

lazy_static::lazy_static! {
    /// word -> (polarity, subjectivity)
    static ref LEXICON: HashMap<&'static str, (f64, f64)> = {
        let entries: &[(&str, f64, f64)] = &[
            // positive
            ("happy", 0.8, 1.0),
            ("glad", 0.5, 1.0),
            ("joy", 0.8, 0.9),
            ("joyful", 0.8, 0.9),
            ("cheerful", 0.8, 0.9),
            ("great", 0.8, 0.75),
            ("good", 0.7, 0.6),
            ("nice", 0.6, 1.0),
            ("fine", 0.4, 0.5),
            ("awesome", 1.0, 1.0),
            ("amazing", 0.6, 0.9),
            ("fantastic", 0.4, 0.9),
            ("wonderful", 1.0, 1.0),
            ("excellent", 1.0, 1.0),
            ("perfect", 1.0, 1.0),
            ("best", 1.0, 0.3),
            ("beautiful", 0.85, 1.0),
            ("lovely", 0.5, 0.75),
            ("love", 0.5, 0.6),
            ("loving", 0.6, 0.9),
            ("romantic", 0.3, 0.55),
            ("sweet", 0.35, 0.65),
            ("excited", 0.4, 0.75),
            ("exciting", 0.3, 0.8),
            ("energetic", 0.3, 0.5),
            ("pumped", 0.4, 0.6),
            ("alive", 0.1, 0.4),
            ("calm", 0.3, 0.75),
            ("relaxed", 0.2, 0.3),
            ("peaceful", 0.25, 0.5),
            ("quiet", 0.1, 0.3),
            ("chill", 0.15, 0.35),
            ("okay", 0.5, 0.5),
            ("ok", 0.5, 0.5),
            ("fun", 0.3, 0.2),
            ("grateful", 0.5, 0.7),
            // negative
            ("sad", -0.5, 1.0),
            ("unhappy", -0.6, 0.9),
            ("depressed", -0.6, 0.8),
            ("miserable", -1.0, 1.0),
            ("lonely", -0.3, 0.6),
            ("heartbroken", -0.8, 1.0),
            ("cry", -0.4, 0.7),
            ("crying", -0.4, 0.7),
            ("tired", -0.4, 0.7),
            ("bored", -0.5, 1.0),
            ("bad", -0.7, 0.67),
            ("worse", -0.4, 0.6),
            ("worst", -1.0, 1.0),
            ("terrible", -1.0, 1.0),
            ("awful", -1.0, 1.0),
            ("horrible", -1.0, 1.0),
            ("hate", -0.8, 0.9),
            ("angry", -0.5, 1.0),
            ("mad", -0.6, 1.0),
            ("furious", -0.6, 0.9),
            ("annoyed", -0.4, 0.4),
            ("frustrated", -0.7, 0.4),
            ("stressed", -0.5, 0.3),
            ("upset", -0.5, 0.6),
            ("anxious", -0.25, 0.75),
            ("scared", -0.5, 0.7),
        ];
        entries.iter().map(|&(word, p, s)| (word, (p, s))).collect()
    };

    /// word -> multiplier applied to the next sentiment word
    static ref INTENSIFIERS: HashMap<&'static str, f64> = [
        ("very", 1.3),
        ("really", 1.3),
        ("so", 1.3),
        ("too", 1.2),
        ("super", 1.5),
        ("extremely", 1.5),
        ("incredibly", 1.5),
        ("totally", 1.4),
        ("quite", 1.1),
        ("pretty", 1.1),
        ("slightly", 0.5),
        ("somewhat", 0.7),
        ("little", 0.6),
    ]
    .into_iter()
    .collect();
}

const NEGATORS: &[&str] = &[
    "not", "no", "never", "nothing", "dont", "don't", "doesnt", "doesn't", "isnt", "isn't",
    "cant", "can't", "wasnt", "wasn't",
];

/// Polarity multiplier for a negated sentiment word.
const NEGATION_FACTOR: f64 = -0.5;

/// Lexicon-based analyzer; cheap to construct, all state is static.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Every `(polarity, subjectivity)` assessment found in `text`, after
    /// modifiers are applied.
    fn assessments(text: &str) -> Vec<(f64, f64)> {
        let lowered = text.to_lowercase();
        let mut found = Vec::new();

        for clause in lowered.split(|c: char| matches!(c, '.' | ',' | ';' | ':' | '!' | '?')) {
            let mut intensity = 1.0;
            let mut negated = false;

            let words = clause
                .split(|c: char| !(c.is_alphanumeric() || c == '\''))
                .filter(|w| !w.is_empty());

            for word in words {
                if NEGATORS.contains(&word) {
                    negated = true;
                } else if let Some(&factor) = INTENSIFIERS.get(word) {
                    intensity *= factor;
                } else if let Some(&(polarity, subjectivity)) = LEXICON.get(word) {
                    let mut polarity = polarity * intensity;
                    if negated {
                        polarity *= NEGATION_FACTOR;
                    }
                    let subjectivity = subjectivity * intensity;
                    trace!("Assessed `{word}` as ({polarity:.3}, {subjectivity:.3})");
                    found.push((polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0)));
                    intensity = 1.0;
                    negated = false;
                }
            }
        }

        found
    }
}

impl SentimentOracle for LexiconAnalyzer {
    fn analyze(&self, text: &str) -> Sentiment {
        let assessments = Self::assessments(text);
        if assessments.is_empty() {
            return Sentiment::default();
        }

        #[allow(clippy::cast_precision_loss)]
        let count = assessments.len() as f64;
        let polarity = assessments.iter().map(|(p, _)| p).sum::<f64>() / count;
        let subjectivity = assessments.iter().map(|(_, s)| s).sum::<f64>() / count;
        Sentiment::new(polarity, subjectivity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_unknown_text_is_neutral() {
        let s = LexiconAnalyzer.analyze("the train leaves at noon");
        assert_eq!(s, Sentiment::default());
        assert_eq!(LexiconAnalyzer.analyze(""), Sentiment::default());
    }

    #[test]
    fn test_single_word_uses_lexicon_values() {
        let s = LexiconAnalyzer.analyze("I feel happy");
        assert!(approx(s.polarity, 0.8));
        assert!(approx(s.subjectivity, 1.0));
    }

    #[test]
    fn test_mean_over_words() {
        let s = LexiconAnalyzer.analyze("good but sad");
        assert!(approx(s.polarity, (0.7 - 0.5) / 2.0));
        assert!(approx(s.subjectivity, (0.6 + 1.0) / 2.0));
    }

    #[test]
    fn test_intensifier_scales_and_clamps() {
        let s = LexiconAnalyzer.analyze("very good");
        assert!(approx(s.polarity, 0.7 * 1.3));
        assert!(approx(s.subjectivity, 0.6 * 1.3));

        let s = LexiconAnalyzer.analyze("extremely happy");
        assert!(approx(s.polarity, 1.0));
        assert!(approx(s.subjectivity, 1.0));
    }

    #[test]
    fn test_negation_flips_at_half_strength() {
        let s = LexiconAnalyzer.analyze("I am not happy");
        assert!(approx(s.polarity, -0.4));
        assert!(approx(s.subjectivity, 1.0));
    }

    #[test]
    fn test_modifiers_reset_at_clause_boundary() {
        let s = LexiconAnalyzer.analyze("not today. happy");
        assert!(approx(s.polarity, 0.8));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            LexiconAnalyzer.analyze("HAPPY"),
            LexiconAnalyzer.analyze("happy")
        );
    }

    #[test]
    fn test_fixed_oracle_ignores_text() {
        let oracle = FixedSentiment(Sentiment::new(0.3, 0.4));
        assert_eq!(oracle.analyze("anything"), Sentiment::new(0.3, 0.4));
        assert_eq!((&oracle).analyze("else"), Sentiment::new(0.3, 0.4));
    }

    #[test]
    fn test_sentiment_new_clamps() {
        let s = Sentiment::new(-3.0, 2.0);
        assert_eq!(s.polarity, -1.0);
        assert_eq!(s.subjectivity, 1.0);
    }
}
