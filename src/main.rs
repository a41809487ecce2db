//! # Moodmuse
//!
//! Command-line front end: loads the catalog once, answers one request and
//! prints JSON to stdout.
//!
//! ```bash
//! moodmuse recommend "what a wonderful day"
//! moodmuse mood romantic --top-n 2
//! moodmuse emotions
//! moodmuse stats
//! ```

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::{debug, info};
use moodmuse::api::{self, ErrorResponse, RecommendRequest, RecommendResponse};
use moodmuse::catalog::Catalog;
use moodmuse::classifier::classify;
use moodmuse::cli::{Args, Command};
use moodmuse::config::{self, RuntimeConfig};
use moodmuse::error::RecommendError;
use moodmuse::mood::Mood;
use moodmuse::recommender::Recommender;
use moodmuse::sentiment::{LexiconAnalyzer, SentimentOracle};
use moodmuse::{completion, db};
use serde::Serialize;
use std::io::{self, Read};

/// Process exit status for each request error.
fn exit_code(err: &RecommendError) -> i32 {
    match err {
        RecommendError::InvalidInput(_) => 2,
        RecommendError::NotFound(_) => 3,
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize response")?;
    println!("{rendered}");
    Ok(())
}

/// Prints a recommendation outcome, exiting non-zero on request errors.
fn respond(outcome: std::result::Result<RecommendResponse<'_>, RecommendError>, pretty: bool) -> Result<()> {
    match outcome {
        Ok(response) => print_json(&response, pretty),
        Err(err) => {
            info!("Request rejected: {err}");
            print_json(&ErrorResponse::from(&err), pretty)?;
            std::process::exit(exit_code(&err));
        }
    }
}

fn runtime_config(args: &Args) -> RuntimeConfig {
    RuntimeConfig {
        catalog_path: args.catalog.clone(),
        default_top_n: args.default_top_n,
    }
}

/// Main entry point for moodmuse.
///
/// Logging is controlled via `RUST_LOG`, e.g.
/// `RUST_LOG=moodmuse::classifier=debug moodmuse recommend "..."`.
fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    debug!("Parsed arguments: {args:?}");
    let runtime = runtime_config(&args);

    match &args.command {
        Command::Recommend { text, top_n } => {
            let catalog = runtime.load_catalog()?;
            let recommender = Recommender::with_lexicon(&catalog);
            let request = RecommendRequest::new(text.as_str(), *top_n);
            respond(
                api::handle_recommend(&recommender, &request, runtime.default_top_n),
                args.pretty,
            )?;
        }
        Command::Request => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read request from stdin")?;

            let catalog = runtime.load_catalog()?;
            let recommender = Recommender::with_lexicon(&catalog);
            let outcome = RecommendRequest::from_json(&raw)
                .and_then(|request| {
                    api::handle_recommend(&recommender, &request, runtime.default_top_n)
                });
            respond(outcome, args.pretty)?;
        }
        Command::Mood { mood, top_n } => {
            let mood: Mood = mood.parse()?;
            let catalog = runtime.load_catalog()?;
            let recommender = Recommender::with_lexicon(&catalog);
            respond(
                api::handle_mood(&recommender, mood, *top_n, runtime.default_top_n),
                args.pretty,
            )?;
        }
        Command::Analyze { text } => {
            if text.is_empty() {
                let err = RecommendError::no_input();
                print_json(&ErrorResponse::from(&err), args.pretty)?;
                std::process::exit(exit_code(&err));
            }
            let sentiment = LexiconAnalyzer::new().analyze(text);
            let classification = classify(sentiment);
            print_json(
                &serde_json::json!({
                    "polarity": sentiment.polarity,
                    "subjectivity": sentiment.subjectivity,
                    "detected_emotion": classification.mood,
                    "confidence": classification.confidence,
                }),
                args.pretty,
            )?;
        }
        Command::Emotions => {
            print_json(&api::emotions(), args.pretty)?;
        }
        Command::Stats => {
            let catalog = runtime.load_catalog()?;
            print_json(&api::stats(&catalog), args.pretty)?;
        }
        Command::List => {
            let catalog = runtime.load_catalog()?;
            for song in catalog.songs() {
                println!(
                    "{:>4}  {} - {}  [{}, {}]  valence {:.2}  energy {:.2}  tempo {:.0}",
                    song.id,
                    song.artist,
                    song.title,
                    song.mood,
                    song.genre,
                    song.valence,
                    song.energy,
                    song.tempo
                );
            }
        }
        Command::InitDb { force } => {
            let path = match &args.catalog {
                Some(path) => path.clone(),
                None => config::get_catalog_path()?,
            };
            info!("Writing built-in catalog to {}", path.display());
            db::init_catalog(&path, Catalog::builtin().songs(), *force)?;
            println!("Catalog written to {}", path.display());
        }
        Command::Completion { shell } => {
            let mut cmd = Args::command();
            completion::generate_completions(
                completion::shell_to_completion_shell(*shell),
                &mut cmd,
                &mut io::stdout(),
            );
        }
    }

    Ok(())
}
