//! TodoList model and its request/response bodies.

use serde::{Deserialize, Serialize};

/// A named container of to-do items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoList {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub created_at: String,
}

/// Request body for creating a new list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTodoListRequest {
    /// Missing and `null` names deserialize as empty so they fail validation instead of body parsing.
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub name: String,
}

/// Response body of a successful list deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteListResponse {
    pub message: String,
    pub deleted_list: TodoList,
}
