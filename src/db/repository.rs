//! Database repository for list and item operations.
//!
//! Uses prepared statements, and a transaction for the list cascade.

use chrono::{SecondsFormat, Utc};
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{TodoItem, TodoList, UpdateTodoRequest};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== LIST OPERATIONS ====================

    /// List all lists, newest first.
    pub async fn list_todo_lists(&self) -> Result<Vec<TodoList>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, created_at FROM todo_lists ORDER BY created_at DESC, rowid DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| list_from_row(&row)).collect())
    }

    /// Get a list by ID.
    pub async fn get_todo_list(&self, id: &str) -> Result<Option<TodoList>, AppError> {
        let row = sqlx::query("SELECT id, name, created_at FROM todo_lists WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(list_from_row))
    }

    /// Find a list by its exact (trimmed) name.
    pub async fn find_todo_list_by_name(&self, name: &str) -> Result<Option<TodoList>, AppError> {
        let row = sqlx::query("SELECT id, name, created_at FROM todo_lists WHERE name = ?")
            .bind(name.trim())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(list_from_row))
    }

    /// Create a new list.
    ///
    /// The name lookup only gives a friendly early answer; the UNIQUE constraint
    /// on `todo_lists.name` is what actually rejects concurrent duplicates.
    pub async fn create_todo_list(&self, name: &str) -> Result<TodoList, AppError> {
        let name = name.trim();

        if self.find_todo_list_by_name(name).await?.is_some() {
            return Err(AppError::duplicate_list_name());
        }

        self.insert_todo_list(name).await
    }

    async fn insert_todo_list(&self, name: &str) -> Result<TodoList, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = timestamp_now();

        sqlx::query("INSERT INTO todo_lists (id, name, created_at) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(name)
            .bind(&now)
            .execute(&self.pool)
            .await
            .map_err(|err| match &err {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    tracing::warn!("List name constraint rejected insert: {}", db_err);
                    AppError::duplicate_list_name()
                }
                _ => AppError::from(err),
            })?;

        Ok(TodoList {
            id,
            name: name.to_string(),
            created_at: now,
        })
    }

    /// Delete a list together with all of its items.
    ///
    /// Items go first, then the list, inside one transaction.
    pub async fn delete_todo_list(&self, id: &str) -> Result<TodoList, AppError> {
        let mut tx = self.pool.begin().await?;

        let removed_items = sqlx::query("DELETE FROM todo_items WHERE list_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let row = sqlx::query("SELECT id, name, created_at FROM todo_lists WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(list) = row.as_ref().map(list_from_row) else {
            return Err(AppError::NotFound("ToDo List not found".to_string()));
        };

        sqlx::query("DELETE FROM todo_lists WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!("Deleted list {} with {} items", id, removed_items);
        Ok(list)
    }

    // ==================== ITEM OPERATIONS ====================

    /// List all items of a list, oldest first.
    pub async fn list_todos(&self, list_id: &str) -> Result<Vec<TodoItem>, AppError> {
        let rows = sqlx::query(
            "SELECT id, text, done, list_id, created_at FROM todo_items WHERE list_id = ? ORDER BY created_at ASC, rowid ASC",
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| item_from_row(&row)).collect())
    }

    /// Get an item, only if it belongs to the given list.
    pub async fn get_todo(&self, list_id: &str, todo_id: &str) -> Result<Option<TodoItem>, AppError> {
        let row = sqlx::query(
            "SELECT id, text, done, list_id, created_at FROM todo_items WHERE id = ? AND list_id = ?",
        )
        .bind(todo_id)
        .bind(list_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(item_from_row))
    }

    /// Create a new item in a list. New items are never done.
    pub async fn create_todo(&self, list_id: &str, text: &str) -> Result<TodoItem, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = timestamp_now();
        let text = text.trim();

        sqlx::query(
            "INSERT INTO todo_items (id, text, done, list_id, created_at) VALUES (?, ?, 0, ?, ?)",
        )
        .bind(&id)
        .bind(text)
        .bind(list_id)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|err| match &err {
            // The list was deleted after the caller checked for it
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::missing_parent_list()
            }
            _ => AppError::from(err),
        })?;

        Ok(TodoItem {
            id,
            text: text.to_string(),
            done: false,
            list_id: list_id.to_string(),
            created_at: now,
        })
    }

    /// Apply a partial update to an item of a list.
    ///
    /// Concurrent updates to the same item are last-write-wins.
    pub async fn update_todo(
        &self,
        list_id: &str,
        todo_id: &str,
        changes: &UpdateTodoRequest,
    ) -> Result<TodoItem, AppError> {
        let text = changes.text.as_deref().map(str::trim);

        let result = sqlx::query(
            "UPDATE todo_items SET text = COALESCE(?, text), done = COALESCE(?, done) WHERE id = ? AND list_id = ?",
        )
        .bind(text)
        .bind(changes.done.map(|b| b as i32))
        .bind(todo_id)
        .bind(list_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(item_not_found());
        }

        self.get_todo(list_id, todo_id)
            .await?
            .ok_or_else(item_not_found)
    }

    /// Delete an item of a list.
    pub async fn delete_todo(&self, list_id: &str, todo_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM todo_items WHERE id = ? AND list_id = ?")
            .bind(todo_id)
            .bind(list_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(item_not_found());
        }

        Ok(())
    }
}

// Helper functions for row conversion

fn list_from_row(row: &sqlx::sqlite::SqliteRow) -> TodoList {
    TodoList {
        id: row.get("id"),
        name: row.get("name"),
        created_at: row.get("created_at"),
    }
}

fn item_from_row(row: &sqlx::sqlite::SqliteRow) -> TodoItem {
    let done: i32 = row.get("done");
    TodoItem {
        id: row.get("id"),
        text: row.get("text"),
        done: done != 0,
        list_id: row.get("list_id"),
        created_at: row.get("created_at"),
    }
}

fn item_not_found() -> AppError {
    AppError::NotFound("Todo item not found in this list or list does not exist".to_string())
}

/// Millisecond RFC 3339 in UTC, so lexical order matches creation order.
fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
