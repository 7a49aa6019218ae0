//! Command Handlers for Todo CRUD
//!
//! Exposes Todo operations to the frontend over the host's IPC boundary.
//! Errors cross the boundary as strings; the frontend absorbs them into
//! user-facing notices.

use crate::domain::{Todo, User};
use crate::repository::Repository;
use crate::AppState;

/// Create a new todo
pub async fn create_todo(
    state: &AppState,
    title: String,
    description: Option<String>,
    is_important: Option<bool>,
) -> Result<Todo, String> {
    let todo = Todo::new(
        0, // ID will be assigned by the database
        title,
        description.unwrap_or_default(),
        is_important.unwrap_or(false),
    );

    let created = state.repo.create(&todo).await.map_err(|e| e.to_string())?;
    tracing::info!(id = created.id, "todo created");
    Ok(created)
}

/// List all todos
pub async fn list_todos(state: &AppState) -> Result<Vec<Todo>, String> {
    state.repo.list().await.map_err(|e| e.to_string())
}

/// Get todo by ID
pub async fn get_todo(state: &AppState, id: u32) -> Result<Option<Todo>, String> {
    state.repo.find_by_id(id).await.map_err(|e| e.to_string())
}

/// Partial update of the editable fields of a single todo
///
/// Only `title`, `description` and `is_important` can be written here;
/// `is_done` is owned by `mark_todo_done` and `id` is immutable. Absent
/// documents are refused, never created.
pub async fn update_todo(
    state: &AppState,
    id: u32,
    title: Option<String>,
    description: Option<String>,
    is_important: Option<bool>,
) -> Result<Todo, String> {
    let existing = state
        .repo
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Todo {} not found", id))?;

    let updated = Todo {
        id: existing.id,
        title: title.unwrap_or(existing.title),
        description: description.unwrap_or(existing.description),
        is_important: is_important.unwrap_or(existing.is_important),
        is_done: existing.is_done,
        created_at: existing.created_at,
        updated_at: existing.updated_at,
    };

    let saved = state.repo.update(&updated).await.map_err(|e| e.to_string())?;
    tracing::info!(id, "todo updated");
    Ok(saved)
}

/// Mark a todo as done
///
/// The one-directional completion transition: flips `is_done` to true and
/// touches nothing else.
pub async fn mark_todo_done(state: &AppState, id: u32) -> Result<Todo, String> {
    let mut todo = state
        .repo
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Todo {} not found", id))?;

    todo.is_done = true;

    let saved = state.repo.update(&todo).await.map_err(|e| e.to_string())?;
    tracing::info!(id, "todo finished");
    Ok(saved)
}

/// Delete todo
pub async fn delete_todo(state: &AppState, id: u32) -> Result<(), String> {
    state.repo.delete(id).await.map_err(|e| e.to_string())?;
    tracing::info!(id, "todo deleted");
    Ok(())
}

/// Current session user (admin flag gates row actions in the UI)
pub async fn current_user(state: &AppState) -> Result<User, String> {
    Ok(state.session.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    async fn setup_state() -> AppState {
        AppState::open(&PathBuf::from(":memory:"), User::new("tester", true))
            .await
            .expect("Failed to open test state")
    }

    #[tokio::test]
    async fn test_update_merges_only_given_fields() {
        let state = setup_state().await;
        let created = create_todo(&state, "Buy milk".into(), Some("2%".into()), Some(false))
            .await
            .unwrap();

        let updated = update_todo(&state, created.id, None, None, Some(true))
            .await
            .unwrap();

        assert_eq!(updated.title, "Buy milk");
        assert_eq!(updated.description, "2%");
        assert!(updated.is_important);
    }

    #[tokio::test]
    async fn test_update_cannot_touch_done_flag() {
        let state = setup_state().await;
        let created = create_todo(&state, "Buy milk".into(), None, None).await.unwrap();

        mark_todo_done(&state, created.id).await.unwrap();

        // A subsequent edit leaves the completion flag alone
        let updated = update_todo(&state, created.id, Some("Buy oat milk".into()), None, None)
            .await
            .unwrap();
        assert!(updated.is_done);
        assert_eq!(updated.title, "Buy oat milk");
    }

    #[tokio::test]
    async fn test_update_missing_todo_fails() {
        let state = setup_state().await;
        let err = update_todo(&state, 999, Some("Nope".into()), None, None)
            .await
            .expect_err("Update should fail");
        assert!(err.contains("not found"));
    }

    #[tokio::test]
    async fn test_mark_done_only_flips_flag() {
        let state = setup_state().await;
        let created = create_todo(&state, "Finish me".into(), Some("soon".into()), Some(true))
            .await
            .unwrap();

        let done = mark_todo_done(&state, created.id).await.unwrap();

        assert!(done.is_done);
        assert_eq!(done.title, "Finish me");
        assert_eq!(done.description, "soon");
        assert!(done.is_important);
    }

    #[tokio::test]
    async fn test_current_user_reports_session() {
        let state = setup_state().await;
        let user = current_user(&state).await.unwrap();
        assert_eq!(user.name, "tester");
        assert!(user.is_admin);
    }
}
