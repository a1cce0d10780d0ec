//! reqwest-backed implementation of the REST contract.

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use super::{ClientError, ClientResult, TodoApi};
use crate::errors::ErrorResponse;
use crate::models::{
    CreateTodoListRequest, CreateTodoRequest, DeleteListResponse, TodoItem, TodoList,
    UpdateTodoRequest,
};

/// Talks to the API service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: Client,
    base_url: String,
}

impl HttpTodoApi {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:4000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// `{base}/api/todolists/{segments...}`, each segment percent-encoded.
    fn url(&self, segments: &[&str]) -> ClientResult<Url> {
        if let Some(bad) = segments
            .iter()
            .find(|s| matches!(s.trim(), "" | "." | ".."))
        {
            return Err(ClientError::InvalidRequest(format!("invalid id '{}'", bad)));
        }

        let mut url = Url::parse(&self.base_url).map_err(|e| {
            ClientError::InvalidRequest(format!("invalid API URL '{}': {}", self.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidRequest(format!("invalid API URL '{}'", self.base_url))
            })?
            .pop_if_empty()
            .extend(["api", "todolists"])
            .extend(segments);
        Ok(url)
    }
}

/// Decode a success body, or turn the error payload into a [`ClientError::Api`].
async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        let bytes = response.bytes().await?;
        return Ok(serde_json::from_slice(&bytes)?);
    }

    let text = response.text().await?;
    tracing::debug!("API call failed with {}: {}", status, text);

    let (message, code) = match serde_json::from_str::<ErrorResponse>(&text) {
        Ok(body) => (body.message, body.error),
        Err(_) if text.trim().is_empty() => (
            status.canonical_reason().unwrap_or("Request failed").to_string(),
            None,
        ),
        Err(_) => (text, None),
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
        code,
    })
}

impl TodoApi for HttpTodoApi {
    async fn get_todo_lists(&self) -> ClientResult<Vec<TodoList>> {
        let response = self.client.get(self.url(&[])?).send().await?;
        decode(response).await
    }

    async fn create_todo_list(&self, name: &str) -> ClientResult<TodoList> {
        let body = CreateTodoListRequest {
            name: name.to_string(),
        };
        let response = self.client.post(self.url(&[])?).json(&body).send().await?;
        decode(response).await
    }

    async fn get_todo_list(&self, list_id: &str) -> ClientResult<TodoList> {
        let response = self
            .client
            .get(self.url(&[list_id])?)
            .send()
            .await?;
        decode(response).await
    }

    async fn delete_todo_list(&self, list_id: &str) -> ClientResult<DeleteListResponse> {
        let response = self
            .client
            .delete(self.url(&[list_id])?)
            .send()
            .await?;
        decode(response).await
    }

    async fn get_todos_for_list(&self, list_id: &str) -> ClientResult<Vec<TodoItem>> {
        let response = self
            .client
            .get(self.url(&[list_id, "todos"])?)
            .send()
            .await?;
        decode(response).await
    }

    async fn add_todo_to_list(&self, list_id: &str, text: &str) -> ClientResult<Vec<TodoItem>> {
        let body = CreateTodoRequest {
            text: text.to_string(),
        };
        let response = self
            .client
            .post(self.url(&[list_id, "todos"])?)
            .json(&body)
            .send()
            .await?;
        decode(response).await
    }

    async fn update_todo_in_list(
        &self,
        list_id: &str,
        todo_id: &str,
        changes: &UpdateTodoRequest,
    ) -> ClientResult<TodoItem> {
        let response = self
            .client
            .patch(self.url(&[list_id, "todos", todo_id])?)
            .json(changes)
            .send()
            .await?;
        decode(response).await
    }

    async fn delete_todo_from_list(
        &self,
        list_id: &str,
        todo_id: &str,
    ) -> ClientResult<Vec<TodoItem>> {
        let response = self
            .client
            .delete(self.url(&[list_id, "todos", todo_id])?)
            .send()
            .await?;
        decode(response).await
    }
}
