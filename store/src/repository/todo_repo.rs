//! Todo Repository - CRUD Operations
//!
//! SQLite-backed implementation of `Repository<Todo>`. Every write stamps
//! `updated_at`; ids are assigned by the database on insert and never change.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tokio::sync::Mutex;

use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Todo};

/// SQLite implementation of the Todo repository
pub struct TodoRepository {
    conn: Arc<Mutex<Connection>>,
}

const TODO_COLUMNS: &str = "id, title, description, is_important, is_done, created_at, updated_at";

impl TodoRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get(conn: &Connection, id: u32) -> DomainResult<Option<Todo>> {
        conn.query_row(
            &format!("SELECT {} FROM todos WHERE id = ?1", TODO_COLUMNS),
            params![id],
            row_to_todo,
        )
        .optional()
        .map_err(|e| DomainError::Internal(e.to_string()))
    }
}

#[async_trait]
impl Repository<Todo> for TodoRepository {
    async fn create(&self, entity: &Todo) -> DomainResult<Todo> {
        let conn = self.conn.lock().await;
        let now = Utc::now().timestamp();

        conn.execute(
            "INSERT INTO todos (title, description, is_important, is_done, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                entity.title,
                entity.description,
                entity.is_important,
                entity.is_done,
                now,
                now
            ],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let id = conn.last_insert_rowid() as u32;
        Self::get(&conn, id)?
            .ok_or_else(|| DomainError::Internal(format!("Todo {} vanished after insert", id)))
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Todo>> {
        let conn = self.conn.lock().await;
        Self::get(&conn, id)
    }

    async fn list(&self) -> DomainResult<Vec<Todo>> {
        let conn = self.conn.lock().await;

        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM todos ORDER BY id ASC", TODO_COLUMNS))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let rows = stmt
            .query_map([], row_to_todo)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut todos = Vec::new();
        for row in rows {
            todos.push(row.map_err(|e| DomainError::Internal(e.to_string()))?);
        }
        Ok(todos)
    }

    async fn update(&self, entity: &Todo) -> DomainResult<Todo> {
        let conn = self.conn.lock().await;
        let now = Utc::now().timestamp();

        let changed = conn
            .execute(
                "UPDATE todos SET title = ?1, description = ?2, is_important = ?3, is_done = ?4,
                 updated_at = ?5 WHERE id = ?6",
                params![
                    entity.title,
                    entity.description,
                    entity.is_important,
                    entity.is_done,
                    now,
                    entity.id
                ],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("Todo {} not found", entity.id)));
        }

        Self::get(&conn, entity.id)?
            .ok_or_else(|| DomainError::Internal(format!("Todo {} vanished after update", entity.id)))
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let conn = self.conn.lock().await;

        let changed = conn
            .execute("DELETE FROM todos WHERE id = ?1", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("Todo {} not found", id)));
        }
        Ok(())
    }
}

fn row_to_todo(row: &Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        is_important: row.get(3)?,
        is_done: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}
