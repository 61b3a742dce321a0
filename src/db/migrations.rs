//! Versioned, non-destructive schema migrations.
//!
//! Every schema change is a numbered migration recorded in the `migrations`
//! table. On startup all pending migrations run inside one transaction, so a
//! failure leaves the previous schema untouched. Migrations create, extend
//! or rebuild tables, but never drop rows: existing data survives every restart.
//!
//! ## Usage
//!
//! ```rust
//! use taskboard::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory()?;
//! init_with_migrations(&mut conn)?;
//! assert_eq!(get_db_version(&conn)?, 3);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Transaction};
use std::collections::HashSet;

/// Tracking table holding one row per applied migration.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

const SCHEMA_TODOS: &str = "CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    task TEXT NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

/// Same layout as `todos`, used to rebuild a legacy table in place.
const SCHEMA_TODOS_REBUILD: &str = "CREATE TABLE todos_rebuild (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    task TEXT NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations, applied in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: the task table
        self.add_migration(1, "create_todos", |tx| {
            tx.execute(SCHEMA_TODOS, [])?;
            Ok(())
        });

        // Version 2: upgrade tables created by older deployments, which may
        // predate the completion flag or the creation timestamp
        self.add_migration(2, "add_missing_todo_columns", |tx| {
            let columns = table_columns(tx, "todos")?;

            if !columns.contains("completed") {
                tx.execute("ALTER TABLE todos ADD COLUMN completed BOOLEAN NOT NULL DEFAULT FALSE", [])?;
                msg_info!(Message::ColumnAdded("completed".to_string()));
            }
            tx.execute("UPDATE todos SET completed = FALSE WHERE completed IS NULL", [])?;

            // SQLite refuses non-constant defaults in ADD COLUMN, so backfill instead
            if !columns.contains("created_at") {
                tx.execute("ALTER TABLE todos ADD COLUMN created_at TIMESTAMP", [])?;
                msg_info!(Message::ColumnAdded("created_at".to_string()));
            }
            tx.execute("UPDATE todos SET created_at = CURRENT_TIMESTAMP WHERE created_at IS NULL", [])?;

            Ok(())
        });

        // Version 3: a plain INTEGER PRIMARY KEY hands out max(id)+1, which
        // reuses the id of a deleted newest row. Rebuild such tables with
        // AUTOINCREMENT, keeping every row and id.
        self.add_migration(3, "todos_autoincrement_ids", |tx| {
            if uses_autoincrement(tx, "todos")? {
                return Ok(());
            }

            tx.execute(SCHEMA_TODOS_REBUILD, [])?;
            let copied = tx.execute(
                "INSERT INTO todos_rebuild (id, task, completed, created_at)
                 SELECT id, task, COALESCE(completed, FALSE), COALESCE(created_at, CURRENT_TIMESTAMP) FROM todos",
                [],
            )?;
            tx.execute("DROP TABLE todos", [])?;
            tx.execute("ALTER TABLE todos_rebuild RENAME TO todos", [])?;
            msg_info!(Message::TableRebuilt("todos".to_string(), copied));

            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the recorded schema version.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!("Database is up to date");
            return Ok(());
        }

        msg_info!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;

        for migration in pending {
            msg_info!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_success!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        msg_success!(Message::AllMigrationsCompleted);

        Ok(())
    }

    /// Highest applied version, or 0 for a database that has never been migrated.
    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0)).unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }

    fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    /// Applied migrations as `(version, name, applied_at)`, oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        conn.execute(MIGRATIONS_TABLE, [])?;
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

fn table_columns(conn: &Connection, table: &str) -> Result<HashSet<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let columns = stmt.query_map([], |row| row.get::<_, String>(1))?.collect::<Result<HashSet<_>, _>>()?;

    Ok(columns)
}

fn uses_autoincrement(conn: &Connection, table: &str) -> Result<bool> {
    let sql: Option<String> = conn
        .query_row("SELECT sql FROM sqlite_master WHERE type = 'table' AND name = ?1", params![table], |row| row.get(0))
        .optional()?;

    Ok(sql.is_some_and(|sql| sql.to_ascii_uppercase().contains("AUTOINCREMENT")))
}

/// Brings `conn` up to the latest schema.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;
    Ok(())
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let manager = MigrationManager::new();
    manager.get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    let current = manager.get_current_version(conn)?;
    Ok(current < manager.latest_version())
}
