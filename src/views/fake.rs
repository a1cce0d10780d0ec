//! In-memory stand-in for the API service, used by view model tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::client::{ClientError, ClientResult, TodoApi};
use crate::models::{DeleteListResponse, TodoItem, TodoList, UpdateTodoRequest};

#[derive(Default)]
struct Store {
    lists: Vec<TodoList>,
    items: Vec<TodoItem>,
}

#[derive(Clone, Default)]
pub(crate) struct InMemoryApi {
    store: Arc<Mutex<Store>>,
    calls: Arc<AtomicUsize>,
    fail_next: Arc<AtomicBool>,
}

impl InMemoryApi {
    /// Number of API calls made so far.
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make the next call fail with a 500.
    pub(crate) fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn begin(&self) -> ClientResult<std::sync::MutexGuard<'_, Store>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(api_error(500, "Server error while accessing storage"));
        }
        Ok(self.store.lock().unwrap())
    }
}

fn api_error(status: u16, message: &str) -> ClientError {
    ClientError::Api {
        status,
        message: message.to_string(),
        code: None,
    }
}

fn not_found(message: &str) -> ClientError {
    api_error(404, message)
}

fn items_of(store: &Store, list_id: &str) -> Vec<TodoItem> {
    store
        .items
        .iter()
        .filter(|item| item.list_id == list_id)
        .cloned()
        .collect()
}

impl TodoApi for InMemoryApi {
    async fn get_todo_lists(&self) -> ClientResult<Vec<TodoList>> {
        let store = self.begin()?;
        Ok(store.lists.iter().rev().cloned().collect())
    }

    async fn create_todo_list(&self, name: &str) -> ClientResult<TodoList> {
        let mut store = self.begin()?;
        let name = name.trim();
        if name.is_empty() {
            return Err(api_error(400, "List name is required"));
        }
        if store.lists.iter().any(|list| list.name == name) {
            return Err(api_error(400, "A list with this name already exists"));
        }
        let list = TodoList {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        store.lists.push(list.clone());
        Ok(list)
    }

    async fn get_todo_list(&self, list_id: &str) -> ClientResult<TodoList> {
        let store = self.begin()?;
        store
            .lists
            .iter()
            .find(|list| list.id == list_id)
            .cloned()
            .ok_or_else(|| not_found("ToDo List not found"))
    }

    async fn delete_todo_list(&self, list_id: &str) -> ClientResult<DeleteListResponse> {
        let mut store = self.begin()?;
        let position = store
            .lists
            .iter()
            .position(|list| list.id == list_id)
            .ok_or_else(|| not_found("ToDo List not found"))?;
        store.items.retain(|item| item.list_id != list_id);
        let deleted_list = store.lists.remove(position);
        Ok(DeleteListResponse {
            message: "ToDo List and all its items deleted successfully".to_string(),
            deleted_list,
        })
    }

    async fn get_todos_for_list(&self, list_id: &str) -> ClientResult<Vec<TodoItem>> {
        let store = self.begin()?;
        if !store.lists.iter().any(|list| list.id == list_id) {
            return Err(not_found("Parent ToDo List not found"));
        }
        Ok(items_of(&store, list_id))
    }

    async fn add_todo_to_list(&self, list_id: &str, text: &str) -> ClientResult<Vec<TodoItem>> {
        let mut store = self.begin()?;
        if text.trim().is_empty() {
            return Err(api_error(400, "Todo item text is required"));
        }
        if !store.lists.iter().any(|list| list.id == list_id) {
            return Err(not_found("Parent ToDo List not found, cannot add item"));
        }
        store.items.push(TodoItem {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.trim().to_string(),
            done: false,
            list_id: list_id.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        });
        Ok(items_of(&store, list_id))
    }

    async fn update_todo_in_list(
        &self,
        list_id: &str,
        todo_id: &str,
        changes: &UpdateTodoRequest,
    ) -> ClientResult<TodoItem> {
        let mut store = self.begin()?;
        let item = store
            .items
            .iter_mut()
            .find(|item| item.id == todo_id && item.list_id == list_id)
            .ok_or_else(|| not_found("Todo item not found in this list or list does not exist"))?;
        if let Some(text) = &changes.text {
            item.text = text.trim().to_string();
        }
        if let Some(done) = changes.done {
            item.done = done;
        }
        Ok(item.clone())
    }

    async fn delete_todo_from_list(
        &self,
        list_id: &str,
        todo_id: &str,
    ) -> ClientResult<Vec<TodoItem>> {
        let mut store = self.begin()?;
        let position = store
            .items
            .iter()
            .position(|item| item.id == todo_id && item.list_id == list_id)
            .ok_or_else(|| not_found("Todo item not found in this list or list does not exist"))?;
        store.items.remove(position);
        Ok(items_of(&store, list_id))
    }
}
