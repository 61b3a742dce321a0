//! Core library modules shared by the server and the terminal client.
//!
//! - **Model**: the task record and its text rule
//! - **Client state**: the board snapshot and its derived view
//! - **Infrastructure**: configuration, data directory, logging, messages
//! - **Presentation**: terminal rendering of the board

pub mod board;
pub mod config;
pub mod data_storage;
pub mod logging;
pub mod messages;
pub mod task;
pub mod view;
