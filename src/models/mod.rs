//! Data models for the multi-list to-do application.
//!
//! These models are shared by the API service and the client so both sides agree on the wire format.

mod todo_item;
mod todo_list;

pub use todo_item::*;
pub use todo_list::*;

use serde::{Deserialize, Deserializer};

/// Required string fields: `null` reads as empty, like a missing field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
