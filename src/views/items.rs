//! Per-list views: active items and completed items.
//!
//! Both views wrap the same [`ListSnapshot`] and differ only in the filter
//! they apply and the actions they offer.

use super::{active_items, completed_items, failure_message, ActionOutcome, Confirm, ViewState};
use crate::client::TodoApi;
use crate::models::{TodoItem, TodoList, UpdateTodoRequest};

/// The last fetched list details and its full item set.
struct ListSnapshot<A: TodoApi> {
    api: A,
    list_id: Option<String>,
    list: Option<TodoList>,
    items: Vec<TodoItem>,
    state: ViewState,
    error: Option<String>,
}

impl<A: TodoApi> ListSnapshot<A> {
    fn new(api: A) -> Self {
        Self {
            api,
            list_id: None,
            list: None,
            items: Vec::new(),
            state: ViewState::Loading,
            error: None,
        }
    }

    async fn load(&mut self, list_id: &str, action: &str) {
        if self.list_id.as_deref() != Some(list_id) {
            self.list = None;
            self.items.clear();
        }
        self.list_id = Some(list_id.to_string());
        self.state = ViewState::Loading;
        self.error = None;

        let list = match self.api.get_todo_list(list_id).await {
            Ok(list) => list,
            Err(err) => {
                self.state = ViewState::Failed(failure_message(action, &err));
                return;
            }
        };
        match self.api.get_todos_for_list(list_id).await {
            Ok(items) => {
                self.list = Some(list);
                self.items = items;
                self.state = ViewState::Ready;
            }
            Err(err) => {
                self.state = ViewState::Failed(failure_message(action, &err));
            }
        }
    }

    /// Id of the list, once it has loaded successfully.
    fn ready_list_id(&self) -> Option<String> {
        match (&self.state, &self.list_id) {
            (ViewState::Ready, Some(id)) => Some(id.clone()),
            _ => None,
        }
    }

    fn replace_items(&mut self, items: Vec<TodoItem>) -> ActionOutcome {
        self.items = items;
        self.error = None;
        ActionOutcome::Applied
    }

    async fn add(&mut self, text: &str) -> ActionOutcome {
        let Some(list_id) = self.ready_list_id() else {
            return ActionOutcome::Skipped;
        };
        if text.trim().is_empty() {
            return ActionOutcome::Skipped;
        }

        match self.api.add_todo_to_list(&list_id, text).await {
            Ok(items) => self.replace_items(items),
            Err(err) => {
                self.error = Some(failure_message("Failed to add item", &err));
                ActionOutcome::Failed
            }
        }
    }

    /// Flip `done`, then re-read the whole list.
    async fn set_done(&mut self, todo_id: &str, done: bool) -> ActionOutcome {
        let Some(list_id) = self.ready_list_id() else {
            return ActionOutcome::Skipped;
        };

        let updated = match self
            .api
            .update_todo_in_list(&list_id, todo_id, &UpdateTodoRequest::done(done))
            .await
        {
            Ok(item) => item,
            Err(err) => {
                self.error = Some(failure_message("Failed to update item", &err));
                return ActionOutcome::Failed;
            }
        };

        // Until the re-read lands, the updated item already sits in the right filter
        if let Some(slot) = self.items.iter_mut().find(|item| item.id == updated.id) {
            *slot = updated;
        }

        match self.api.get_todos_for_list(&list_id).await {
            Ok(items) => self.replace_items(items),
            Err(err) => {
                self.error = Some(failure_message("Failed to reload items", &err));
                ActionOutcome::Failed
            }
        }
    }

    async fn delete<C: Confirm>(
        &mut self,
        todo_id: &str,
        prompt: &str,
        confirm: &C,
    ) -> ActionOutcome {
        let Some(list_id) = self.ready_list_id() else {
            return ActionOutcome::Skipped;
        };
        if !confirm.confirm(prompt) {
            return ActionOutcome::Skipped;
        }

        match self.api.delete_todo_from_list(&list_id, todo_id).await {
            Ok(items) => self.replace_items(items),
            Err(err) => {
                self.error = Some(failure_message("Failed to delete item", &err));
                ActionOutcome::Failed
            }
        }
    }
}

/// The items of one list that still need doing.
pub struct ActiveTodosView<A: TodoApi> {
    snapshot: ListSnapshot<A>,
}

impl<A: TodoApi> ActiveTodosView<A> {
    pub fn new(api: A) -> Self {
        Self {
            snapshot: ListSnapshot::new(api),
        }
    }

    /// Load (or switch to) a list.
    pub async fn load(&mut self, list_id: &str) {
        self.snapshot
            .load(list_id, "Failed to load data for this list")
            .await;
    }

    pub fn state(&self) -> &ViewState {
        &self.snapshot.state
    }

    pub fn list(&self) -> Option<&TodoList> {
        self.snapshot.list.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.snapshot.error.as_deref()
    }

    pub fn active(&self) -> Vec<&TodoItem> {
        active_items(&self.snapshot.items)
    }

    /// Add an item. Blank text sends nothing.
    pub async fn add(&mut self, text: &str) -> ActionOutcome {
        self.snapshot.add(text).await
    }

    pub async fn mark_done(&mut self, todo_id: &str) -> ActionOutcome {
        self.snapshot.set_done(todo_id, true).await
    }

    pub async fn delete<C: Confirm>(&mut self, todo_id: &str, confirm: &C) -> ActionOutcome {
        self.snapshot
            .delete(
                todo_id,
                "Are you sure you want to permanently delete this task?",
                confirm,
            )
            .await
    }
}

/// The finished items of one list.
pub struct CompletedTodosView<A: TodoApi> {
    snapshot: ListSnapshot<A>,
}

impl<A: TodoApi> CompletedTodosView<A> {
    pub fn new(api: A) -> Self {
        Self {
            snapshot: ListSnapshot::new(api),
        }
    }

    pub async fn load(&mut self, list_id: &str) {
        self.snapshot
            .load(list_id, "Failed to load completed items")
            .await;
    }

    pub fn state(&self) -> &ViewState {
        &self.snapshot.state
    }

    pub fn list(&self) -> Option<&TodoList> {
        self.snapshot.list.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.snapshot.error.as_deref()
    }

    pub fn completed(&self) -> Vec<&TodoItem> {
        completed_items(&self.snapshot.items)
    }

    pub async fn mark_not_done(&mut self, todo_id: &str) -> ActionOutcome {
        self.snapshot.set_done(todo_id, false).await
    }

    pub async fn delete<C: Confirm>(&mut self, todo_id: &str, confirm: &C) -> ActionOutcome {
        self.snapshot
            .delete(
                todo_id,
                "Are you sure you want to permanently delete this completed task?",
                confirm,
            )
            .await
    }
}
