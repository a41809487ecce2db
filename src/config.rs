//! # Configuration Module
//!
//! Data directory handling and runtime settings.
//!
//! ## Data Storage
//!
//! The default SQLite catalog lives in the platform-standard data directory:
//! - Linux: `~/.local/share/moodmuse/catalog.db`
//! - macOS: `~/Library/Application Support/moodmuse/catalog.db`
//! - Windows: `%APPDATA%\moodmuse\catalog.db`
//!
//! Every setting can be overridden from the command line or the environment
//! (see [`crate::cli`]).

use crate::catalog::Catalog;
use crate::db;
use crate::recommender::DEFAULT_TOP_N;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "moodmuse";
const CATALOG_FILE: &str = "catalog.db";

/// Returns the moodmuse data directory, creating it if needed.
///
/// # Errors
///
/// Fails if the platform has no data directory or it cannot be created.
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        anyhow::anyhow!(
            "Could not determine system data directory. Please ensure your platform supports standard data directories."
        )
    })?;

    let app_dir = data_dir.join(APP_DIR);
    fs::create_dir_all(&app_dir).with_context(|| {
        format!(
            "Failed to create moodmuse data directory at {}. Please check file permissions.",
            app_dir.display()
        )
    })?;

    Ok(app_dir)
}

/// Path of the default SQLite catalog inside the data directory.
pub fn get_catalog_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(CATALOG_FILE))
}

/// Configuration for runtime behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Catalog to load at startup. `None` means the default data-dir
    /// database when present, otherwise the built-in seed.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Songs per request when the request names no count.
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_top_n: DEFAULT_TOP_N,
        }
    }
}

impl RuntimeConfig {
    /// Create configuration with an explicit catalog path
    #[must_use]
    pub fn with_catalog_path(catalog_path: PathBuf) -> Self {
        Self {
            catalog_path: Some(catalog_path),
            ..Self::default()
        }
    }

    /// Loads the configured catalog.
    ///
    /// An explicit path must exist. Files ending in `.json` are read as JSON,
    /// anything else as a SQLite catalog.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => load_catalog_file(path),
            None => {
                let default_path = get_catalog_path()?;
                if default_path.exists() {
                    load_catalog_file(&default_path)
                } else {
                    info!("No catalog database found, using the built-in catalog");
                    Ok(Catalog::builtin())
                }
            }
        }
    }
}

fn load_catalog_file(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        anyhow::bail!("Catalog file {} does not exist", path.display());
    }
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    debug!(
        "Loading {} catalog from {}",
        if is_json { "JSON" } else { "SQLite" },
        path.display()
    );

    if is_json {
        Catalog::load_json(path)
    } else {
        db::load_catalog(path)
    }
}
