//! TodoItem model and its request bodies.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single task belonging to exactly one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub text: String,
    pub done: bool,
    pub list_id: String,
    pub created_at: String,
}

impl TodoItem {
    /// Items that still need doing.
    pub fn is_active(&self) -> bool {
        !self.done
    }
}

/// Request body for creating a new item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub text: String,
}

/// Partial update of an item.
///
/// A field only counts when it carries the right JSON type: `text` must be a
/// string and `done` a boolean. Anything else is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(
        default,
        deserialize_with = "string_or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<String>,
    #[serde(
        default,
        deserialize_with = "bool_or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub done: Option<bool>,
}

impl UpdateTodoRequest {
    pub fn done(done: bool) -> Self {
        Self {
            text: None,
            done: Some(done),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            done: None,
        }
    }

    /// True when no recognised field was supplied.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.done.is_none()
    }
}

fn string_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_str().map(str::to_owned)))
}

fn bool_or_absent<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_bool()))
}
