//! # Catalog Module
//!
//! The in-memory, read-only song collection recommendations are drawn from.
//! A [`Catalog`] is built once at startup, either from the built-in seed,
//! a JSON file, or a SQLite catalog (see [`crate::db`]), and is only ever
//! borrowed afterwards.

use crate::mood::Mood;
use crate::song::Song;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// Immutable arena of songs. Insertion order is preserved and is the
/// tie-break order used by the ranker.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    songs: Vec<Song>,
}

/// Aggregate counts over a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total_songs: usize,
    pub emotions: BTreeMap<String, usize>,
    pub genres: BTreeMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and out-of-range features.
    pub fn from_songs(songs: Vec<Song>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(songs.len());
        for song in &songs {
            if !seen.insert(song.id) {
                bail!("Duplicate song id {} in catalog", song.id);
            }
            if let Err(reason) = song.validate() {
                bail!("Invalid song `{}`: {reason}", song.title);
            }
        }
        debug!("Catalog built with {} songs", songs.len());
        Ok(Self { songs })
    }

    /// The seed catalog shipped with the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self { songs: builtin_songs() }
    }

    /// Reads a JSON array of songs from `path`.
    pub fn load_json(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let songs: Vec<Song> = serde_json::from_str(&raw)
            .with_context(|| format!("Catalog file {} is not a JSON array of songs", path.display()))?;
        let catalog = Self::from_songs(songs)
            .with_context(|| format!("Catalog file {} failed validation", path.display()))?;
        info!("Loaded {} songs from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    #[must_use]
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Counts songs per mood tag and per genre.
    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        let mut emotions = BTreeMap::new();
        let mut genres = BTreeMap::new();
        for song in &self.songs {
            *emotions.entry(song.mood.label().to_string()).or_insert(0) += 1;
            *genres.entry(song.genre.clone()).or_insert(0) += 1;
        }
        CatalogStats {
            total_songs: self.songs.len(),
            emotions,
            genres,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: i64,
    title: &str,
    artist: &str,
    mood: Mood,
    valence: f64,
    energy: f64,
    tempo: f64,
    genre: &str,
) -> Song {
    Song {
        id,
        title: title.to_string(),
        artist: artist.to_string(),
        mood,
        valence,
        energy,
        tempo,
        genre: genre.to_string(),
    }
}

fn builtin_songs() -> Vec<Song> {
    vec![
        seed(1, "Happy", "Pharrell Williams", Mood::Happy, 0.96, 0.82, 160.0, "pop"),
        seed(2, "Someone Like You", "Adele", Mood::Sad, 0.24, 0.41, 67.0, "ballad"),
        seed(3, "Eye of the Tiger", "Survivor", Mood::Energetic, 0.68, 0.95, 109.0, "rock"),
        seed(4, "Perfect", "Ed Sheeran", Mood::Romantic, 0.72, 0.45, 95.0, "pop"),
        seed(5, "Weightless", "Marconi Union", Mood::Calm, 0.35, 0.15, 60.0, "ambient"),
        seed(6, "Smells Like Teen Spirit", "Nirvana", Mood::Angry, 0.42, 0.98, 117.0, "grunge"),
        seed(7, "Shape of You", "Ed Sheeran", Mood::Happy, 0.93, 0.83, 96.0, "pop"),
        seed(8, "Fix You", "Coldplay", Mood::Sad, 0.28, 0.52, 138.0, "alternative"),
        seed(9, "Thunderstruck", "AC/DC", Mood::Energetic, 0.71, 0.91, 133.0, "rock"),
        seed(10, "Thinking Out Loud", "Ed Sheeran", Mood::Romantic, 0.81, 0.48, 79.0, "pop"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 10);
        assert!(Catalog::from_songs(catalog.songs().to_vec()).is_ok());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut songs = builtin_songs();
        songs[1].id = songs[0].id;
        let err = Catalog::from_songs(songs).unwrap_err();
        assert!(err.to_string().contains("Duplicate song id 1"));
    }

    #[test]
    fn test_stats_counts() {
        let stats = Catalog::builtin().stats();
        assert_eq!(stats.total_songs, 10);
        assert_eq!(stats.emotions["happy"], 2);
        assert_eq!(stats.emotions["calm"], 1);
        assert_eq!(stats.genres["pop"], 4);
        assert_eq!(stats.genres["rock"], 2);
        assert_eq!(stats.emotions.values().sum::<usize>(), 10);
    }

    #[test]
    fn test_load_json_catalog() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"[{{"id": 42, "title": "Clair de Lune", "artist": "Debussy", "emotion": "calm",
                "valence": 0.4, "energy": 0.1, "tempo": 66, "genre": "classical"}}]"#
        )?;

        let catalog = Catalog::load_json(file.path())?;
        assert_eq!(catalog.len(), 1);
        let song = &catalog.songs()[0];
        assert_eq!(song.id, 42);
        assert_eq!(song.mood, Mood::Calm);
        assert_eq!(song.tempo, 66.0);
        Ok(())
    }

    #[test]
    fn test_load_json_accepts_any_label_case() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"[{{"id": 7, "title": "x", "artist": "y", "emotion": "Happy",
                "valence": 0.9, "energy": 0.8, "tempo": 120, "genre": "pop"}},
               {{"id": 8, "title": "z", "artist": "y", "emotion": "ROMANTIC",
                "valence": 0.7, "energy": 0.4, "tempo": 80, "genre": "pop"}}]"#
        )?;

        let catalog = Catalog::load_json(file.path())?;
        let moods: Vec<Mood> = catalog.songs().iter().map(|s| s.mood).collect();
        assert_eq!(moods, vec![Mood::Happy, Mood::Romantic]);
        Ok(())
    }

    #[test]
    fn test_load_json_rejects_unknown_mood() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"[{{"id": 1, "title": "x", "artist": "y", "emotion": "relaxed",
                "valence": 0.4, "energy": 0.1, "tempo": 66, "genre": "z"}}]"#
        )?;
        assert!(Catalog::load_json(file.path()).is_err());
        Ok(())
    }
}
