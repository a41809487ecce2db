//! Mood-aware song recommendations from free-text input.
//!
//! Core modules:
//! - [`sentiment`] - Text sentiment (polarity, subjectivity)
//! - [`classifier`] - Emotion classification from sentiment
//! - [`mood`] - Mood labels and their audio-feature ranges
//! - [`algorithm`] - Match scoring and ranking
//! - [`recommender`] - The hybrid text-to-songs pipeline
//!
//! ### Supporting Modules
//!
//! - [`song`], [`catalog`] - The read-only song catalog
//! - [`db`] - SQLite catalog files
//! - [`api`] - JSON request/response shapes
//! - [`error`] - Request errors
//! - [`config`] - Data directory and runtime configuration
//! - [`cli`], [`completion`] - Command-line interface and shell completions
//!
//! ## Quick Start Example
//!
//! ```
//! use moodmuse::catalog::Catalog;
//! use moodmuse::recommender::Recommender;
//!
//! let catalog = Catalog::builtin();
//! let recommender = Recommender::with_lexicon(&catalog);
//!
//! let result = recommender.recommend("I feel really sad and lonely", 3)?;
//! println!("Detected {} ({:.2})", result.mood, result.confidence);
//! for item in &result.items {
//!     println!("{} - {} ({:.1})", item.song.artist, item.song.title, item.match_score);
//! }
//! # Ok::<(), moodmuse::error::RecommendError>(())
//! ```
//!
//! ## Algorithm Details
//!
//! 1. The sentiment oracle reduces text to a polarity and a subjectivity.
//! 2. An ordered rule cascade turns those into one of six moods plus a
//!    confidence. The rules overlap, so the first match wins.
//! 3. Every song is scored against the mood's valence and energy ranges
//!    (valence weighted 0.6, energy 0.4), giving 1.0, 0.8, 0.7 or 0.5.
//! 4. Songs are ranked by score; ties keep catalog order.
//!
//! ## Error Handling
//!
//! Request-level failures are [`error::RecommendError`]: empty input or no
//! candidates. Loading catalogs and configuration return
//! `Result<T, anyhow::Error>` with context.

pub mod algorithm;
pub mod api;
pub mod catalog;
pub mod classifier;
pub mod cli;
pub mod completion;
pub mod config;
pub mod db;
pub mod error;
pub mod mood;
pub mod recommender;
pub mod sentiment;
pub mod song;
