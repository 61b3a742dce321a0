use super::migrations::init_with_migrations;
use crate::msg_debug;
use anyhow::{Context, Result};
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub const DB_FILE_NAME: &str = "taskboard.db";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Where a `DATABASE_URL` points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbLocation {
    Memory,
    File(PathBuf),
}

impl DbLocation {
    /// Accepts a bare path, a `sqlite://` or `sqlite:` URL, or `:memory:`.
    pub fn parse(database_url: &str) -> Self {
        let url = database_url.trim();
        let path = url.strip_prefix("sqlite://").or_else(|| url.strip_prefix("sqlite:")).unwrap_or(url);

        match path {
            "" | ":memory:" => DbLocation::Memory,
            path => DbLocation::File(PathBuf::from(path)),
        }
    }
}

/// An open SQLite connection.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Connects, checks the connection with a probe query and applies pending migrations.
    pub fn open(database_url: &str) -> Result<Db> {
        let mut db = Self::connect(database_url)?;

        db.conn
            .query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .context("database connection check failed")?;
        msg_debug!(format!("Connected to {}", database_url));

        init_with_migrations(&mut db.conn)?;

        Ok(db)
    }

    /// Connects without touching the schema. Used to inspect migration state.
    pub fn connect(database_url: &str) -> Result<Db> {
        let conn = match DbLocation::parse(database_url) {
            DbLocation::Memory => Connection::open_in_memory()?,
            DbLocation::File(path) => {
                if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                Connection::open(&path).with_context(|| format!("failed to open database {}", path.display()))?
            }
        };
        conn.busy_timeout(BUSY_TIMEOUT)?;

        Ok(Db { conn })
    }

    /// A fresh, fully migrated in-memory database.
    pub fn in_memory() -> Result<Db> {
        Self::open(":memory:")
    }
}
