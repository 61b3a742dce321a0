//! Route handlers for `/api/todos`.
//!
//! Handlers only validate the request, run one store operation and shape
//! the response. Each store call runs on the blocking pool.

use super::error::ApiError;
use crate::db::tasks::{TaskError, TaskStore};
use crate::libs::task::Task;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    store: Arc<TaskStore>,
}

impl AppState {
    pub fn new(store: Arc<TaskStore>) -> Self {
        Self { store }
    }

    /// Runs one store operation off the async workers and maps its failure.
    async fn run<T, F>(&self, operation: F) -> Result<T, ApiError>
    where
        F: FnOnce(&TaskStore) -> Result<T, TaskError> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);

        match tokio::task::spawn_blocking(move || operation(&store)).await {
            Ok(result) => result.map_err(ApiError::from),
            Err(error) => {
                tracing::error!(%error, "store operation did not complete");
                Err(ApiError::internal_error())
            }
        }
    }
}

/// Body of a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// GET /api/todos
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.run(|store| store.list()).await?;
    tracing::info!(count = tasks.len(), "GET /api/todos");

    Ok(Json(tasks))
}

/// POST /api/todos with `{"task": "..."}`
///
/// A missing or non-string `task` is treated the same as blank text.
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Json(body) = payload.map_err(reject_body)?;
    let text = body.get("task").and_then(Value::as_str).unwrap_or_default().to_string();

    let task = state.run(move |store| store.create(&text)).await?;
    tracing::info!(id = task.id, "POST /api/todos created todo");

    Ok(Json(task))
}

/// DELETE /api/todos/{id}
pub async fn delete_todo(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<DeleteResponse>, ApiError> {
    let id = parse_id(&id)?;

    state.run(move |store| store.delete(id)).await?;
    tracing::info!(id, "DELETE /api/todos deleted todo");

    Ok(Json(DeleteResponse { success: true }))
}

/// PUT /api/todos/{id} with `{"completed": true|false}`
pub async fn set_completion(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let id = parse_id(&id)?;
    let Json(body) = payload.map_err(reject_body)?;

    let completed = match body.get("completed") {
        Some(Value::Bool(completed)) => *completed,
        None | Some(Value::Null) => return Err(ApiError::bad_request("completed field is required")),
        Some(_) => return Err(ApiError::bad_request("completed must be boolean")),
    };

    let task = state.run(move |store| store.set_completion(id, completed)).await?;
    tracing::info!(id, completed, "PUT /api/todos updated todo");

    Ok(Json(task))
}

/// Any other path under `/api`.
pub async fn api_not_found() -> ApiError {
    ApiError::not_found("Not found")
}

/// Ids that are not integers cannot name a task, so they are reported as missing.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::not_found("Task not found"))
}

fn reject_body(rejection: JsonRejection) -> ApiError {
    tracing::debug!(error = %rejection.body_text(), "rejected request body");
    ApiError::bad_request("Request body must be a JSON object")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn numeric_ids_parse() {
        assert_eq!(parse_id("42"), Ok(42));
    }

    #[test]
    fn non_numeric_ids_are_not_found() {
        for raw in ["abc", "1.5", "", "12abc"] {
            assert_eq!(parse_id(raw).unwrap_err().status, StatusCode::NOT_FOUND);
        }
    }
}
