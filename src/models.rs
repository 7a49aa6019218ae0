//! Frontend Models
//!
//! Data structures matching backend entities, plus the navigation param bag
//! and the edit payload.

use serde::{Deserialize, Serialize};

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub is_important: bool,
    pub is_done: bool,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// Session user (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub is_admin: bool,
}

impl Default for User {
    fn default() -> Self {
        // Until the session loads, nothing is gated open
        Self {
            name: String::new(),
            is_admin: false,
        }
    }
}

/// Param bag handed to the edit modal when a row's Edit action fires
#[derive(Debug, Clone, PartialEq)]
pub struct EditTodoParams {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub is_important: bool,
}

impl EditTodoParams {
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title.clone(),
            description: todo.description.clone(),
            is_important: todo.is_important,
        }
    }
}

/// The exact field set an edit submit writes to the store.
///
/// `id` routes the update and `isDone` belongs to the mark-done action, so
/// neither appears here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    pub title: String,
    pub description: String,
    pub is_important: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_carries_only_editable_fields() {
        let patch = TodoPatch {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            is_important: true,
        };

        let json = serde_json::to_value(&patch).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("title"));
        assert!(obj.contains_key("description"));
        assert!(obj.contains_key("isImportant"));
        assert!(!obj.contains_key("id"));
        assert!(!obj.contains_key("isDone"));
    }
}
