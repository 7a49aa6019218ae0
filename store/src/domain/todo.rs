//! Todo Entity
//!
//! A single to-do document: editable title/description/importance plus a
//! one-directional completion flag set only by the mark-done action.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A to-do item document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier, assigned by the store, never mutated
    pub id: u32,
    /// Title text (edit workflow enforces length >= 3 before writes)
    pub title: String,
    /// Longer description (edit workflow enforces length <= 300)
    pub description: String,
    /// User-toggled importance flag, independent of completion
    pub is_important: bool,
    /// Completion flag, only ever flipped false -> true
    pub is_done: bool,
    /// Unix seconds, maintained by the repository
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl Todo {
    /// Create a new, not-yet-persisted todo (id assigned on insert)
    pub fn new(id: u32, title: String, description: String, is_important: bool) -> Self {
        Self {
            id,
            title,
            description,
            is_important,
            is_done: false,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Entity for Todo {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = Todo::new(1, "Buy milk".to_string(), "2%".to_string(), true);
        assert_eq!(todo.id(), 1);
        assert_eq!(todo.title, "Buy milk");
        assert!(todo.is_important);
        assert!(!todo.is_done);
    }

    #[test]
    fn test_todo_field_names() {
        // The IPC boundary speaks camelCase
        let todo = Todo::new(7, "Title".to_string(), String::new(), false);
        let json = serde_json::to_value(&todo).unwrap();
        assert!(json.get("isImportant").is_some());
        assert!(json.get("isDone").is_some());
        assert!(json.get("is_important").is_none());
    }
}
