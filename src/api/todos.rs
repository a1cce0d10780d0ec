//! TodoItem API endpoints, scoped beneath a list.
//!
//! Create and delete answer with every item left in the list so clients can
//! replace their snapshot instead of patching it.

use axum::extract::{Path, State};

use super::{created, parse_id, success, ApiJson, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateTodoRequest, TodoItem, UpdateTodoRequest};
use crate::AppState;

const INVALID_LIST_ID: &str = "Invalid List ID format";
const INVALID_ID: &str = "Invalid ID format";

/// GET /api/todolists/:listId/todos - List the items of a list, oldest first.
pub async fn list_todos(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
) -> ApiResult<Vec<TodoItem>> {
    let list_id = parse_id(&list_id, INVALID_LIST_ID)?;

    if state.repo.get_todo_list(&list_id).await?.is_none() {
        return Err(AppError::NotFound("Parent ToDo List not found".to_string()));
    }

    success(state.repo.list_todos(&list_id).await?)
}

/// POST /api/todolists/:listId/todos - Add an item to a list.
pub async fn create_todo(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
    ApiJson(request): ApiJson<CreateTodoRequest>,
) -> ApiResult<Vec<TodoItem>> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation(
            "Todo item text is required".to_string(),
        ));
    }
    let list_id = parse_id(&list_id, INVALID_LIST_ID)?;

    if state.repo.get_todo_list(&list_id).await?.is_none() {
        return Err(AppError::missing_parent_list());
    }

    state.repo.create_todo(&list_id, &request.text).await?;
    created(state.repo.list_todos(&list_id).await?)
}

/// PATCH /api/todolists/:listId/todos/:todoId - Update text and/or done.
pub async fn update_todo(
    State(state): State<AppState>,
    Path((list_id, todo_id)): Path<(String, String)>,
    ApiJson(request): ApiJson<UpdateTodoRequest>,
) -> ApiResult<TodoItem> {
    let list_id = parse_id(&list_id, INVALID_ID)?;
    let todo_id = parse_id(&todo_id, INVALID_ID)?;

    if request.is_empty() {
        return Err(AppError::Validation(
            "No update fields provided (text or done)".to_string(),
        ));
    }
    if request.text.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(AppError::Validation(
            "Todo item text cannot be empty".to_string(),
        ));
    }

    success(state.repo.update_todo(&list_id, &todo_id, &request).await?)
}

/// DELETE /api/todolists/:listId/todos/:todoId - Remove one item.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path((list_id, todo_id)): Path<(String, String)>,
) -> ApiResult<Vec<TodoItem>> {
    let list_id = parse_id(&list_id, INVALID_ID)?;
    let todo_id = parse_id(&todo_id, INVALID_ID)?;

    state.repo.delete_todo(&list_id, &todo_id).await?;
    success(state.repo.list_todos(&list_id).await?)
}
