use super::{ClientError, TaskApi};
use crate::libs::task::Task;
use crate::server::error::ErrorBody;
use crate::server::handlers::DeleteResponse;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::json;

const TODOS_URL: &str = "api/todos";

/// `TaskApi` over HTTP with reqwest.
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: Client,
    base_url: String,
}

impl HttpTaskApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn todos_url(&self) -> String {
        format!("{}/{}", self.base_url, TODOS_URL)
    }

    fn todo_url(&self, id: i64) -> String {
        format!("{}/{}/{}", self.base_url, TODOS_URL, id)
    }

    /// Turns error statuses into `ClientError::Server` and parses successful bodies as `T`.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|body| body.error)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("request failed").to_string());
            return Err(ClientError::Server { status, message });
        }

        serde_json::from_str(&body).map_err(|error| ClientError::Decode(error.to_string()))
    }
}

impl TaskApi for HttpTaskApi {
    async fn list(&self) -> Result<Vec<Task>, ClientError> {
        let response = self.client.get(self.todos_url()).send().await?;
        Self::decode(response).await
    }

    async fn create(&self, text: &str) -> Result<Task, ClientError> {
        let response = self.client.post(self.todos_url()).json(&json!({ "task": text })).send().await?;
        Self::decode(response).await
    }

    async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let response = self.client.delete(self.todo_url(id)).send().await?;
        let confirmation: DeleteResponse = Self::decode(response).await?;

        if !confirmation.success {
            return Err(ClientError::Decode(format!("server did not confirm deletion of task {}", id)));
        }
        Ok(())
    }

    async fn set_completion(&self, id: i64, completed: bool) -> Result<Task, ClientError> {
        let response = self.client.put(self.todo_url(id)).json(&json!({ "completed": completed })).send().await?;
        Self::decode(response).await
    }
}
