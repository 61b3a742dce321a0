//! Client side of the task API.
//!
//! [`TaskApi`] is the seam between the board state and the network: the
//! terminal client uses [`HttpTaskApi`], tests plug in their own
//! implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskboard::api::{HttpTaskApi, TaskApi};
//!
//! # async fn run() -> Result<(), taskboard::api::ClientError> {
//! let api = HttpTaskApi::new("http://127.0.0.1:3000");
//! let task = api.create("Buy milk").await?;
//! api.set_completion(task.id, true).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::task::Task;
use reqwest::StatusCode;
use thiserror::Error;

pub mod todos;

pub use todos::HttpTaskApi;

/// Everything that can go wrong on the client side.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with an error status; `message` is its `error` field.
    #[error("{message}")]
    Server { status: StatusCode, message: String },

    /// The request never got a response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Submitting a draft with nothing but whitespace.
    #[error("Task text must not be empty")]
    BlankDraft,

    /// Acting on a task the board does not hold.
    #[error("task {0} is not on the board")]
    UnknownTask(i64),
}

/// The four task operations as seen from a client.
#[allow(async_fn_in_trait)]
pub trait TaskApi {
    async fn list(&self) -> Result<Vec<Task>, ClientError>;

    async fn create(&self, text: &str) -> Result<Task, ClientError>;

    async fn delete(&self, id: i64) -> Result<(), ClientError>;

    async fn set_completion(&self, id: i64, completed: bool) -> Result<Task, ClientError>;
}
