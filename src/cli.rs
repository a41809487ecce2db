//! # Command-Line Interface Module
//!
//! Clap derive definitions for the `moodmuse` binary.
//!
//! ## Examples
//!
//! ```bash
//! moodmuse recommend "I feel great today"
//! moodmuse recommend --top-n 3 "so tired and sad"
//! echo '{"text": "angry at everything", "top_n": 2}' | moodmuse request
//! moodmuse mood calm
//! moodmuse --catalog songs.json stats
//! ```

use crate::recommender::DEFAULT_TOP_N;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Main application arguments structure.
#[derive(Parser, Debug)]
#[command(name = "moodmuse")]
#[command(about = "Moodmuse: mood-aware song recommendations from free-text input")]
#[command(version)]
pub struct Args {
    /// Catalog to recommend from
    ///
    /// `.json` files are read as a JSON array of songs, anything else as a
    /// SQLite catalog created by `init-db`. Defaults to the catalog in the
    /// data directory, or the built-in songs if there is none.
    #[arg(long, global = true, env = "MOODMUSE_CATALOG", value_hint = clap::ValueHint::FilePath)]
    pub catalog: Option<PathBuf>,

    /// Songs per request when `--top-n` (or a request's `top_n`) is absent
    #[arg(long, global = true, env = "MOODMUSE_TOP_N", default_value_t = DEFAULT_TOP_N)]
    pub default_top_n: usize,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend songs for how you feel
    ///
    /// Detects the mood expressed in TEXT and prints the best matching songs
    /// as JSON. Exits with status 2 on empty input and 3 when nothing could
    /// be recommended.
    Recommend {
        /// Free text describing your mood
        text: String,

        /// Number of songs to recommend
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        top_n: Option<i64>,
    },

    /// Answer a JSON request read from stdin
    ///
    /// Expects `{"text": "...", "top_n": 5}`; `top_n` is optional.
    Request,

    /// Recommend songs for a given mood, skipping detection
    Mood {
        /// One of: happy, sad, energetic, calm, romantic, angry
        mood: String,

        /// Number of songs to recommend
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        top_n: Option<i64>,
    },

    /// Show the sentiment and detected mood for TEXT
    Analyze {
        /// Free text to analyze
        text: String,
    },

    /// List the supported mood labels
    Emotions,

    /// Show song counts per mood and per genre
    Stats,

    /// List every song in the catalog
    List,

    /// Write the built-in catalog to the SQLite catalog file
    ///
    /// Uses `--catalog` when given, otherwise the data directory.
    InitDb {
        /// Overwrite an existing catalog file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    ///
    /// Usage: moodmuse completion bash > ~/.local/share/bash-completion/completions/moodmuse
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_recommend() {
        let args = Args::parse_from(["moodmuse", "--pretty", "recommend", "-n", "3", "so happy"]);
        assert!(args.pretty);
        match args.command {
            Command::Recommend { text, top_n } => {
                assert_eq!(text, "so happy");
                assert_eq!(top_n, Some(3));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_default_and_negative_top_n() {
        let args = Args::parse_from(["moodmuse", "mood", "calm", "--default-top-n", "2"]);
        assert_eq!(args.default_top_n, 2);

        let args = Args::parse_from(["moodmuse", "recommend", "-n", "-3", "meh"]);
        match args.command {
            Command::Recommend { top_n, .. } => assert_eq!(top_n, Some(-3)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_catalog_after_subcommand() {
        let args = Args::parse_from(["moodmuse", "stats", "--catalog", "songs.json"]);
        assert_eq!(args.catalog, Some(PathBuf::from("songs.json")));
    }
}
