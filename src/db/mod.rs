//! Persistence layer built on SQLite.
//!
//! - [`db`]: connection setup from a `DATABASE_URL`
//! - [`migrations`]: versioned, additive schema changes
//! - [`tasks`]: the task store and its error type

/// Connection management and initialization.
pub mod db;

/// Database schema migration system.
pub mod migrations;

/// CRUD operations on the `todos` table.
pub mod tasks;
