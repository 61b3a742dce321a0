//! Display implementation for taskboard messages.
//!
//! All user-facing text is defined here, in one place, so call sites stay
//! free of string literals and wording stays consistent.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(text) => format!("Task '{}' added", text),
            Message::TaskDeleted(id) => format!("Task #{} deleted", id),
            Message::TaskCompleted(text) => format!("Task '{}' marked as done", text),
            Message::TaskReopened(text) => format!("Task '{}' marked as pending", text),

            // === BOARD MESSAGES ===
            Message::BoardHeader => "📝 My Tasks".to_string(),
            Message::BoardEmpty => "🎯 No tasks yet. Add your first one!".to_string(),
            Message::BoardStats { completed, pending, total } => {
                format!("Completed: {} | Pending: {} | Total: {}", completed, pending, total)
            }
            Message::BoardLoadFailed(error) => format!("Failed to load tasks: {}", error),

            // === SERVER MESSAGES ===
            Message::ServerListening(address) => format!("Server running on http://{}", address),
            Message::ServerStopped => "Server shutdown complete".to_string(),
            Message::ShutdownRequested(signal) => format!("Received {}, initiating graceful shutdown", signal),

            // === ERROR MESSAGES ===
            Message::CommandFailed(error) => format!("Error: {}", error),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::ColumnAdded(column) => format!("Added missing column todos.{}", column),
            Message::TableRebuilt(table, rows) => format!("Rebuilt table {} with never-reused ids ({} rows kept)", table, rows),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
        };

        write!(f, "{}", text)
    }
}
