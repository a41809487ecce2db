//! Audio-feature match scoring and ranking.
//!
//! A song's match score for a mood depends only on whether its valence and
//! energy fall inside the mood's ranges:
//!
//! ```text
//! match = 0.6 * valence_score + 0.4 * energy_score
//! valence_score, energy_score ∈ {1.0 (inside), 0.5 (outside)}
//! ```
//!
//! so exactly four scores are possible: 1.0, 0.8, 0.7 and 0.5.

use crate::catalog::Catalog;
use crate::mood::{mood_range, Mood};
use crate::song::Song;
use log::{debug, trace};
use rayon::prelude::*;
use std::cmp::Ordering;

pub const VALENCE_WEIGHT: f64 = 0.6;
pub const ENERGY_WEIGHT: f64 = 0.4;
/// Feature score for a value inside its range.
pub const IN_RANGE: f64 = 1.0;
/// Feature score for a value outside its range.
pub const OUT_OF_RANGE: f64 = 0.5;
/// Score used when the target mood has no table entry.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Catalogs smaller than this are scored on the current thread.
const PARALLEL_THRESHOLD: usize = 1024;

/// Every value [`calculate_match_score`] can return.
pub const POSSIBLE_SCORES: [f64; 4] = [1.0, 0.8, 0.7, 0.5];

/// How well `song`'s audio features fit `target`.
///
/// The weighted sum is rounded to hundredths, so the result compares equal
/// to the literals in [`POSSIBLE_SCORES`].
#[must_use]
pub fn calculate_match_score(song: &Song, target: Mood) -> f64 {
    let Some(range) = mood_range(target) else {
        trace!("No feature range for {target}, using neutral score");
        return NEUTRAL_SCORE;
    };

    let valence_score = if range.valence.contains(song.valence) { IN_RANGE } else { OUT_OF_RANGE };
    let energy_score = if range.energy.contains(song.energy) { IN_RANGE } else { OUT_OF_RANGE };

    let score = round_hundredths(VALENCE_WEIGHT * valence_score + ENERGY_WEIGHT * energy_score);
    trace!("`{}' scores {score} for {target}", song.title);
    score
}

#[inline]
fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scores every song against `target`, keeping catalog order.
#[must_use]
pub fn batch_calculate_scores(songs: &[Song], target: Mood) -> Vec<(&Song, f64)> {
    if songs.len() < PARALLEL_THRESHOLD {
        songs
            .iter()
            .map(|song| (song, calculate_match_score(song, target)))
            .collect()
    } else {
        // indexed parallel collect preserves input order
        songs
            .par_iter()
            .map(|song| (song, calculate_match_score(song, target)))
            .collect()
    }
}

/// A song picked by the ranker, with its match score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredSong<'a> {
    pub song: &'a Song,
    pub match_score: f64,
}

/// Orders scored songs best first.
///
/// The sort is stable, so songs with equal scores keep their catalog order.
#[must_use]
pub fn rank_scored<'a>(mut scored: Vec<(&'a Song, f64)>, limit: usize) -> Vec<ScoredSong<'a>> {
    scored.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    scored
        .into_iter()
        .take(limit)
        .map(|(song, match_score)| ScoredSong { song, match_score })
        .collect()
}

/// The `limit` best-matching songs in `catalog` for `target`, best first.
///
/// `limit == 0` yields nothing; a limit past the catalog size yields the
/// whole catalog.
#[must_use]
pub fn rank_songs(catalog: &Catalog, target: Mood, limit: usize) -> Vec<ScoredSong<'_>> {
    let ranked = rank_scored(batch_calculate_scores(catalog.songs(), target), limit);
    debug!(
        "Ranked {} of {} songs for {target} (limit {limit})",
        ranked.len(),
        catalog.len()
    );
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: i64, valence: f64, energy: f64) -> Song {
        Song {
            id,
            title: format!("Song {id}"),
            artist: "Artist".to_string(),
            mood: Mood::Calm,
            valence,
            energy,
            tempo: 100.0,
            genre: "test".to_string(),
        }
    }

    #[test]
    fn test_four_outcomes_for_happy() {
        assert_eq!(calculate_match_score(&song(1, 0.9, 0.9), Mood::Happy), 1.0);
        assert_eq!(calculate_match_score(&song(2, 0.9, 0.1), Mood::Happy), 0.8);
        assert_eq!(calculate_match_score(&song(3, 0.1, 0.9), Mood::Happy), 0.7);
        assert_eq!(calculate_match_score(&song(4, 0.1, 0.1), Mood::Happy), 0.5);
    }

    #[test]
    fn test_range_edges_are_inclusive() {
        // calm: valence 0.3..=0.6, energy 0.0..=0.4
        assert_eq!(calculate_match_score(&song(1, 0.3, 0.4), Mood::Calm), 1.0);
        assert_eq!(calculate_match_score(&song(2, 0.6, 0.0), Mood::Calm), 1.0);
        assert_eq!(calculate_match_score(&song(3, 0.61, 0.41), Mood::Calm), 0.5);
    }

    #[test]
    fn test_only_possible_scores_occur() {
        let mut valence = 0.0;
        while valence <= 1.0 {
            let mut energy = 0.0;
            while energy <= 1.0 {
                for mood in Mood::ALL {
                    let score = calculate_match_score(&song(1, valence, energy), mood);
                    assert!(POSSIBLE_SCORES.contains(&score), "unexpected score {score}");
                }
                energy += 0.05;
            }
            valence += 0.05;
        }
    }

    #[test]
    fn test_rank_orders_descending_with_stable_ties() {
        let songs = vec![
            song(1, 0.1, 0.1), // 0.5
            song(2, 0.9, 0.9), // 1.0
            song(3, 0.9, 0.1), // 0.8
            song(4, 0.8, 0.7), // 1.0
            song(5, 0.1, 0.1), // 0.5
        ];
        let catalog = Catalog::from_songs(songs).unwrap();

        let ranked = rank_songs(&catalog, Mood::Happy, 10);
        let ids: Vec<i64> = ranked.iter().map(|s| s.song.id).collect();
        assert_eq!(ids, vec![2, 4, 3, 1, 5]);

        let scores: Vec<f64> = ranked.iter().map(|s| s.match_score).collect();
        assert_eq!(scores, vec![1.0, 1.0, 0.8, 0.5, 0.5]);
    }

    #[test]
    fn test_rank_limits() {
        let catalog = Catalog::builtin();
        assert!(rank_songs(&catalog, Mood::Sad, 0).is_empty());
        assert_eq!(rank_songs(&catalog, Mood::Sad, 3).len(), 3);
        assert_eq!(rank_songs(&catalog, Mood::Sad, 100).len(), catalog.len());
        assert!(rank_songs(&Catalog::default(), Mood::Sad, 5).is_empty());
    }

    #[test]
    fn test_parallel_scoring_matches_sequential_order() {
        let songs: Vec<Song> = (0..2000)
            .map(|i| song(i, (i % 100) as f64 / 100.0, (i % 37) as f64 / 37.0))
            .collect();

        let batched = batch_calculate_scores(&songs, Mood::Energetic);
        assert_eq!(batched.len(), songs.len());
        for ((scored, score), original) in batched.iter().zip(&songs) {
            assert_eq!(scored.id, original.id);
            assert_eq!(*score, calculate_match_score(original, Mood::Energetic));
        }
    }
}
