//! Overview of all lists: load, create, delete.

use super::{failure_message, ActionOutcome, Confirm, ViewState};
use crate::client::TodoApi;
use crate::models::TodoList;

pub struct ListSelectorView<A: TodoApi> {
    api: A,
    state: ViewState,
    lists: Vec<TodoList>,
    error: Option<String>,
}

impl<A: TodoApi> ListSelectorView<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ViewState::Loading,
            lists: Vec::new(),
            error: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Lists in server order (newest first).
    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn load(&mut self) {
        self.state = ViewState::Loading;
        self.error = None;

        match self.api.get_todo_lists().await {
            Ok(lists) => {
                self.lists = lists;
                self.state = ViewState::Ready;
            }
            Err(err) => {
                self.state = ViewState::Failed(failure_message("Failed to load lists", &err));
            }
        }
    }

    /// Create a list and re-read the overview. Blank names send nothing.
    pub async fn create_list(&mut self, name: &str) -> ActionOutcome {
        if name.trim().is_empty() {
            return ActionOutcome::Skipped;
        }

        if let Err(err) = self.api.create_todo_list(name).await {
            self.error = Some(failure_message("Failed to create list", &err));
            return ActionOutcome::Failed;
        }

        self.refresh("Failed to reload lists").await
    }

    /// Delete a list and everything in it, after confirmation.
    pub async fn delete_list<C: Confirm>(&mut self, list_id: &str, confirm: &C) -> ActionOutcome {
        let name = self
            .lists
            .iter()
            .find(|list| list.id == list_id)
            .map_or(list_id, |list| list.name.as_str());
        let prompt = format!(
            "Are you sure you want to delete the list \"{}\" and all its items?",
            name
        );
        if !confirm.confirm(&prompt) {
            return ActionOutcome::Skipped;
        }

        if let Err(err) = self.api.delete_todo_list(list_id).await {
            self.error = Some(failure_message("Failed to delete list", &err));
            return ActionOutcome::Failed;
        }

        self.refresh("Failed to reload lists").await
    }

    async fn refresh(&mut self, action: &str) -> ActionOutcome {
        match self.api.get_todo_lists().await {
            Ok(lists) => {
                self.lists = lists;
                self.state = ViewState::Ready;
                self.error = None;
                ActionOutcome::Applied
            }
            Err(err) => {
                self.error = Some(failure_message(action, &err));
                ActionOutcome::Failed
            }
        }
    }
}
