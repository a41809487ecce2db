use crate::mood::Mood;
use serde::{Deserialize, Serialize};

/// One catalog entry, as loaded at startup.
///
/// Songs are never mutated once the catalog is built; the recommender hands
/// out references and clones only when building a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Unique within a catalog.
    pub id: i64,
    pub title: String,
    pub artist: String,
    /// Mood the song was tagged with. Serialized as `emotion` to match the
    /// catalog file format.
    #[serde(rename = "emotion")]
    pub mood: Mood,
    /// Musical positiveness, `0.0..=1.0`.
    pub valence: f64,
    /// Perceived intensity, `0.0..=1.0`.
    pub energy: f64,
    /// Beats per minute.
    pub tempo: f64,
    pub genre: String,
}

impl Song {
    /// Checks the feature invariants a catalog relies on.
    ///
    /// Returns a human readable reason when the song is rejected.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.valence) {
            return Err(format!("valence {} of song {} is outside 0..=1", self.valence, self.id));
        }
        if !(0.0..=1.0).contains(&self.energy) {
            return Err(format!("energy {} of song {} is outside 0..=1", self.energy, self.id));
        }
        // `!(x > 0)` also rejects NaN.
        if !(self.tempo > 0.0) || !self.tempo.is_finite() {
            return Err(format!("tempo {} of song {} must be a positive BPM", self.tempo, self.id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song() -> Song {
        Song {
            id: 1,
            title: "Happy".to_string(),
            artist: "Pharrell Williams".to_string(),
            mood: Mood::Happy,
            valence: 0.96,
            energy: 0.82,
            tempo: 160.0,
            genre: "pop".to_string(),
        }
    }

    #[test]
    fn test_valid_song_passes() {
        assert!(song().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_features_rejected() {
        let bad_valence = Song { valence: 1.2, ..song() };
        assert!(bad_valence.validate().unwrap_err().contains("valence"));

        let bad_energy = Song { energy: -0.1, ..song() };
        assert!(bad_energy.validate().unwrap_err().contains("energy"));

        let bad_tempo = Song { tempo: 0.0, ..song() };
        assert!(bad_tempo.validate().unwrap_err().contains("tempo"));

        let nan_tempo = Song { tempo: f64::NAN, ..song() };
        assert!(nan_tempo.validate().is_err());
    }

    #[test]
    fn test_mood_serialized_as_emotion() {
        let json = serde_json::to_value(song()).unwrap();
        assert_eq!(json["emotion"], "happy");
        assert!(json.get("mood").is_none());
    }
}
