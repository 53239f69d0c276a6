//! High-score table
//!
//! One SQLite table:
//!
//! ```sql
//! scores(id INTEGER PRIMARY KEY AUTOINCREMENT,
//!        player TEXT NOT NULL,
//!        points INTEGER NOT NULL,
//!        ts DATETIME DEFAULT CURRENT_TIMESTAMP)
//! ```
//!
//! Each call opens its own connection and closes it on return. There is a
//! single writer (the game loop), so nothing is shared or pooled.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use super::{user_data_dir, StorageError};

/// Database file name inside the user data dir
pub const DB_FILE: &str = "scores.db";

/// Name stored when the player leaves the entry empty
pub const DEFAULT_PLAYER: &str = "Player";

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS scores(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        player TEXT NOT NULL,
        points INTEGER NOT NULL,
        ts DATETIME DEFAULT CURRENT_TIMESTAMP
    )";

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub player: String,
    pub points: u32,
}

/// Handle to the score database at a fixed path.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// Open (creating if needed) the database at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let store = Self { path: path.into() };
        store.connect()?;
        Ok(store)
    }

    /// Open `scores.db` in the user data directory.
    pub fn open_default() -> Result<Self, StorageError> {
        Self::open(user_data_dir()?.join(DB_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(&self.path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(conn)
    }

    /// Record a finished run. Blank names are stored as "Player".
    pub fn add_score(&self, player: &str, points: u32) -> Result<(), StorageError> {
        let player = normalize_name(player);
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO scores(player, points) VALUES (?1, ?2)",
            params![player, points],
        )?;
        log::info!("Saved score {} for {}", points, player);
        Ok(())
    }

    /// Highest score ever recorded, 0 when the table is empty.
    pub fn best_score(&self) -> Result<u32, StorageError> {
        let conn = self.connect()?;
        let best: Option<u32> = conn.query_row("SELECT MAX(points) FROM scores", [], |row| row.get(0))?;
        Ok(best.unwrap_or(0))
    }

    /// Best `limit` scores, highest first. Equal scores keep the order they
    /// were set in.
    pub fn top_scores(&self, limit: usize) -> Result<Vec<ScoreEntry>, StorageError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT player, points FROM scores ORDER BY points DESC, ts ASC, id ASC LIMIT ?1",
        )?;
        let rows = stmt
            .query_map(params![limit as i64], |row| {
                Ok(ScoreEntry {
                    player: row.get(0)?,
                    points: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

/// Trimmed name, or the default when nothing is left.
pub fn normalize_name(name: &str) -> &str {
    match name.trim() {
        "" => DEFAULT_PLAYER,
        trimmed => trimmed,
    }
}
