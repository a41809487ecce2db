//! # Mood Module
//!
//! The fixed set of mood labels shared by the classifier and the catalog,
//! and the static table of audio-feature ranges each mood accepts.
//!
//! | mood      | valence   | energy    |
//! |-----------|-----------|-----------|
//! | happy     | 0.7 - 1.0 | 0.6 - 1.0 |
//! | sad       | 0.0 - 0.4 | 0.0 - 0.6 |
//! | energetic | 0.5 - 1.0 | 0.8 - 1.0 |
//! | calm      | 0.3 - 0.6 | 0.0 - 0.4 |
//! | romantic  | 0.6 - 0.9 | 0.3 - 0.6 |
//! | angry     | 0.0 - 0.5 | 0.7 - 1.0 |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mood label used both to tag songs and to describe a user's detected state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Mood {
    Happy,
    Sad,
    Energetic,
    Calm,
    Romantic,
    Angry,
}

impl Mood {
    /// Every supported mood, in table order.
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Energetic,
        Mood::Calm,
        Mood::Romantic,
        Mood::Angry,
    ];

    /// Lowercase label, as used on the wire and in catalog files.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Energetic => "energetic",
            Mood::Calm => "calm",
            Mood::Romantic => "romantic",
            Mood::Angry => "angry",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string does not name one of the six moods.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mood `{0}` (expected one of: happy, sad, energetic, calm, romantic, angry)")]
pub struct UnknownMood(pub String);

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.label() == wanted)
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}

impl TryFrom<String> for Mood {
    type Error = UnknownMood;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

/// Closed interval `[low, high]`, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub low: f64,
    pub high: f64,
}

impl Interval {
    const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }
}

/// Valence and energy ranges a song must fall in to fully match a mood.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodRange {
    pub valence: Interval,
    pub energy: Interval,
}

const MOOD_RANGES: [(Mood, MoodRange); 6] = [
    (Mood::Happy, MoodRange { valence: Interval::new(0.7, 1.0), energy: Interval::new(0.6, 1.0) }),
    (Mood::Sad, MoodRange { valence: Interval::new(0.0, 0.4), energy: Interval::new(0.0, 0.6) }),
    (Mood::Energetic, MoodRange { valence: Interval::new(0.5, 1.0), energy: Interval::new(0.8, 1.0) }),
    (Mood::Calm, MoodRange { valence: Interval::new(0.3, 0.6), energy: Interval::new(0.0, 0.4) }),
    (Mood::Romantic, MoodRange { valence: Interval::new(0.6, 0.9), energy: Interval::new(0.3, 0.6) }),
    (Mood::Angry, MoodRange { valence: Interval::new(0.0, 0.5), energy: Interval::new(0.7, 1.0) }),
];

/// Looks up the feature ranges for `mood`.
///
/// `None` means the table has no entry; scorers fall back to a neutral score
/// instead of failing.
#[must_use]
pub fn mood_range(mood: Mood) -> Option<MoodRange> {
    MOOD_RANGES
        .iter()
        .find(|(candidate, _)| *candidate == mood)
        .map(|(_, range)| *range)
}

/// Labels of all supported moods, in table order.
#[must_use]
pub fn supported_labels() -> Vec<&'static str> {
    MOOD_RANGES.iter().map(|(mood, _)| mood.label()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mood_has_a_range() {
        for mood in Mood::ALL {
            assert!(mood_range(mood).is_some(), "{mood} should be in the table");
        }
        assert_eq!(supported_labels().len(), 6);
    }

    #[test]
    fn test_range_bounds_are_unit_interval() {
        for mood in Mood::ALL {
            let range = mood_range(mood).unwrap();
            for interval in [range.valence, range.energy] {
                assert!(interval.low >= 0.0 && interval.high <= 1.0);
                assert!(interval.low <= interval.high);
            }
        }
    }

    #[test]
    fn test_interval_is_inclusive() {
        let happy = mood_range(Mood::Happy).unwrap();
        assert!(happy.valence.contains(0.7));
        assert!(happy.valence.contains(1.0));
        assert!(!happy.valence.contains(0.69));
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("happy".parse::<Mood>().unwrap(), Mood::Happy);
        assert_eq!(" Romantic ".parse::<Mood>().unwrap(), Mood::Romantic);
        assert_eq!("ANGRY".parse::<Mood>().unwrap(), Mood::Angry);

        let err = "relaxed".parse::<Mood>().unwrap_err();
        assert_eq!(err, UnknownMood("relaxed".to_string()));
        assert!(err.to_string().contains("calm"));
    }

    #[test]
    fn test_label_roundtrip_through_serde() {
        let json = serde_json::to_string(&Mood::Energetic).unwrap();
        assert_eq!(json, "\"energetic\"");
        let back: Mood = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Mood::Energetic);
    }

    #[test]
    fn test_deserialize_matches_from_str() {
        let back: Mood = serde_json::from_str("\"Happy\"").unwrap();
        assert_eq!(back, Mood::Happy);
        let back: Mood = serde_json::from_str("\" CALM \"").unwrap();
        assert_eq!(back, Mood::Calm);

        let err = serde_json::from_str::<Mood>("\"relaxed\"").unwrap_err();
        assert!(err.to_string().contains("unknown mood"));
    }
}
