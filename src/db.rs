//! # Catalog Database
//!
//! SQLite storage for catalogs. The recommender never writes to the
//! database at request time: a catalog file is created once with
//! [`init_catalog`] and read once at startup with [`load_catalog`].

use crate::catalog::Catalog;
use crate::mood::Mood;
use crate::song::Song;
use anyhow::{bail, Context, Result};
use log::{info, trace};
use rusqlite::{Connection, OpenFlags};
use std::fs;
use std::path::Path;

/// Open an existing catalog database read-only.
pub fn connect(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open_with_flags(db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .with_context(|| format!("Failed to open catalog database at {}", db_path.display()))?;

    Ok(conn)
}

/// Creates the catalog database at `db_path` and fills it with `songs`.
///
/// Fails if the file already exists, unless `force` is set, in which case
/// the old file is replaced.
pub fn init_catalog(db_path: &Path, songs: &[Song], force: bool) -> Result<()> {
    if db_path.exists() {
        if !force {
            bail!(
                "Catalog database already exists at {}. Use --force to overwrite it.",
                db_path.display()
            );
        }
        fs::remove_file(db_path)
            .with_context(|| format!("Failed to remove old catalog at {}", db_path.display()))?;
    }

    let mut conn = Connection::open(db_path)
        .with_context(|| format!("Failed to create catalog database at {}", db_path.display()))?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS songs (
            id      INTEGER PRIMARY KEY,
            title   TEXT    NOT NULL,
            artist  TEXT    NOT NULL,
            emotion TEXT    NOT NULL,
            valence REAL    NOT NULL,
            energy  REAL    NOT NULL,
            tempo   REAL    NOT NULL,
            genre   TEXT    NOT NULL
        )",
        [],
    )
    .context("Invalid SQL command when creating songs table")?;

    insert(songs, &mut conn)?;
    info!("Wrote {} songs to {}", songs.len(), db_path.display());
    Ok(())
}

/// Adds all songs to a freshly created database in one transaction.
fn insert(songs: &[Song], conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction()?;

    {
        let mut stmt = tx.prepare(
            "INSERT INTO songs (id, title, artist, emotion, valence, energy, tempo, genre)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )?;

        for song in songs {
            stmt.execute((
                song.id,
                &song.title,
                &song.artist,
                song.mood.label(),
                song.valence,
                song.energy,
                song.tempo,
                &song.genre,
            ))
            .with_context(|| format!("Failed to insert song into catalog: {song:?}"))?;
        }
    }

    tx.commit().context("Committing catalog transaction failed")?;
    Ok(())
}

/// Reads every song, in id order, and validates them into a [`Catalog`].
pub fn load_catalog(db_path: &Path) -> Result<Catalog> {
    let conn = connect(db_path)?;
    let songs = retrieve_songs_vec(&conn)?;
    let catalog = Catalog::from_songs(songs)
        .with_context(|| format!("Catalog database {} failed validation", db_path.display()))?;
    info!("Loaded {} songs from {}", catalog.len(), db_path.display());
    Ok(catalog)
}

/// Retrieves all songs from the database.
pub fn retrieve_songs_vec(conn: &Connection) -> Result<Vec<Song>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, title, artist, emotion, valence, energy, tempo, genre
             FROM songs ORDER BY id",
        )
        .context("Invalid SQL statement when selecting songs")?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, f64>(4)?,
                row.get::<_, f64>(5)?,
                row.get::<_, f64>(6)?,
                row.get::<_, String>(7)?,
            ))
        })
        .context("Cannot query songs")?;

    let mut songs = Vec::new();
    for row in rows {
        let (id, title, artist, emotion, valence, energy, tempo, genre) =
            row.context("Failed to read song row")?;
        let mood: Mood = emotion
            .parse()
            .with_context(|| format!("Song {id} has an unsupported emotion tag"))?;
        trace!("Read song {id} `{title}` ({mood})");
        songs.push(Song {
            id,
            title,
            artist,
            mood,
            valence,
            energy,
            tempo,
            genre,
        });
    }

    Ok(songs)
}
