//! Client data-access layer.
//!
//! [`TodoApi`] states the REST contract once; every front end talks to the
//! server through an implementation of it. No business logic, no caching:
//! failures are handed back unchanged for the caller to present.

mod http;

pub use http::HttpTodoApi;

use std::future::Future;

use thiserror::Error;

use crate::models::{DeleteListResponse, TodoItem, TodoList, UpdateTodoRequest};

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-2xx status.
    #[error("{message} (HTTP {status})")]
    Api {
        status: u16,
        message: String,
        code: Option<String>,
    },
    /// A 2xx answer whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// The request could not be addressed: bad base URL or an unusable id.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport(err) => err.status().map(|s| s.as_u16()),
            ClientError::Decode(_) | ClientError::InvalidRequest(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Text suitable for showing to a user.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Decode(_) => {
                "the server sent a response that could not be read".to_string()
            }
            ClientError::InvalidRequest(detail) => detail.clone(),
            ClientError::Transport(_) => "the server could not be reached".to_string(),
        }
    }
}

/// One method per API operation.
pub trait TodoApi {
    /// `GET /api/todolists`
    fn get_todo_lists(&self) -> impl Future<Output = ClientResult<Vec<TodoList>>> + Send;

    /// `POST /api/todolists`
    fn create_todo_list(&self, name: &str)
        -> impl Future<Output = ClientResult<TodoList>> + Send;

    /// `GET /api/todolists/:listId`
    fn get_todo_list(&self, list_id: &str)
        -> impl Future<Output = ClientResult<TodoList>> + Send;

    /// `DELETE /api/todolists/:listId`
    fn delete_todo_list(
        &self,
        list_id: &str,
    ) -> impl Future<Output = ClientResult<DeleteListResponse>> + Send;

    /// `GET /api/todolists/:listId/todos`
    fn get_todos_for_list(
        &self,
        list_id: &str,
    ) -> impl Future<Output = ClientResult<Vec<TodoItem>>> + Send;

    /// `POST /api/todolists/:listId/todos`, answering with every item of the list.
    fn add_todo_to_list(
        &self,
        list_id: &str,
        text: &str,
    ) -> impl Future<Output = ClientResult<Vec<TodoItem>>> + Send;

    /// `PATCH /api/todolists/:listId/todos/:todoId`
    fn update_todo_in_list(
        &self,
        list_id: &str,
        todo_id: &str,
        changes: &UpdateTodoRequest,
    ) -> impl Future<Output = ClientResult<TodoItem>> + Send;

    /// `DELETE /api/todolists/:listId/todos/:todoId`, answering with the remaining items.
    fn delete_todo_from_list(
        &self,
        list_id: &str,
        todo_id: &str,
    ) -> impl Future<Output = ClientResult<Vec<TodoItem>>> + Send;
}
