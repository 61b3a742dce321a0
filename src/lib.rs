//! # Taskboard
//!
//! A minimal personal task tracker: a JSON API server over a single SQLite
//! table, and a terminal client that works against it.
//!
//! ## Features
//!
//! - **Task Store**: list, create, delete and complete tasks with additive migrations
//! - **Task API**: `/api/todos` routes with JSON error bodies, plus the client bundle
//! - **Task Client**: HTTP client, immutable board snapshot and pending/completed view
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskboard::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
pub mod server;
