//! View models for the list selector, active items and completed items.
//!
//! Each view keeps the last snapshot the server returned and derives what it
//! shows from that snapshot on every read. Mutations replace the snapshot
//! with the server's answer; failures leave it untouched and record a
//! message in `error`.

mod items;
mod list_selector;

pub use items::{ActiveTodosView, CompletedTodosView};
pub use list_selector::ListSelectorView;

use crate::client::ClientError;
use crate::models::TodoItem;

/// Load state of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Ready,
    Failed(String),
}

/// What happened to a user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The server accepted the change and the snapshot was replaced.
    Applied,
    /// Nothing was sent (blank input, declined confirmation, nothing loaded).
    Skipped,
    /// The request failed; see the view's `error`.
    Failed,
}

/// Blocking yes/no prompt shown before destructive actions.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Items with `done == false`.
pub fn active_items(items: &[TodoItem]) -> Vec<&TodoItem> {
    items.iter().filter(|item| item.is_active()).collect()
}

/// Items with `done == true`.
pub fn completed_items(items: &[TodoItem]) -> Vec<&TodoItem> {
    items.iter().filter(|item| item.done).collect()
}

fn failure_message(action: &str, err: &ClientError) -> String {
    tracing::warn!("{} failed: {}", action, err);
    format!("{}: {}", action, err.user_message())
}

#[cfg(test)]
pub(crate) mod fake;
