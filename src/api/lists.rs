//! TodoList API endpoints.

use axum::extract::{Path, State};

use super::{created, parse_id, success, ApiJson, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateTodoListRequest, DeleteListResponse, TodoList};
use crate::AppState;

const INVALID_LIST_ID: &str = "Invalid List ID format";

/// GET /api/todolists - List all lists, newest first.
pub async fn list_todo_lists(State(state): State<AppState>) -> ApiResult<Vec<TodoList>> {
    success(state.repo.list_todo_lists().await?)
}

/// POST /api/todolists - Create a new list.
pub async fn create_todo_list(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateTodoListRequest>,
) -> ApiResult<TodoList> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("List name is required".to_string()));
    }

    let list = state.repo.create_todo_list(&request.name).await?;
    tracing::info!("Created list {} ({})", list.id, list.name);
    created(list)
}

/// GET /api/todolists/:listId - Get a single list.
pub async fn get_todo_list(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
) -> ApiResult<TodoList> {
    let list_id = parse_id(&list_id, INVALID_LIST_ID)?;

    match state.repo.get_todo_list(&list_id).await? {
        Some(list) => success(list),
        None => Err(AppError::NotFound("ToDo List not found".to_string())),
    }
}

/// DELETE /api/todolists/:listId - Delete a list and all of its items.
pub async fn delete_todo_list(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
) -> ApiResult<DeleteListResponse> {
    let list_id = parse_id(&list_id, INVALID_LIST_ID)?;

    let deleted_list = state.repo.delete_todo_list(&list_id).await?;
    tracing::info!("Deleted list {} ({})", deleted_list.id, deleted_list.name);

    success(DeleteListResponse {
        message: "ToDo List and all its items deleted successfully".to_string(),
        deleted_list,
    })
}
