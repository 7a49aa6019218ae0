//! Todo Commands
//!
//! Frontend bindings for todo CRUD against the remote document store.

use serde::Serialize;
use wasm_bindgen::JsValue;

use super::{invoke, invoke_error};
use crate::models::{Todo, TodoPatch};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoArgs<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub is_important: bool,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateTodoArgs<'a> {
    id: u32,
    title: &'a str,
    description: &'a str,
    is_important: bool,
}

// ========================
// Commands
// ========================

pub async fn list_todos() -> Result<Vec<Todo>, String> {
    let result = invoke("list_todos", JsValue::NULL).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_todo(args: &CreateTodoArgs<'_>) -> Result<Todo, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("create_todo", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Partial update of one document's editable fields; `id` routes the call
/// and is not part of the written field set
pub async fn update_todo(id: u32, patch: &TodoPatch) -> Result<Todo, String> {
    let args = UpdateTodoArgs {
        id,
        title: &patch.title,
        description: &patch.description,
        is_important: patch.is_important,
    };
    let js_args = serde_wasm_bindgen::to_value(&args).map_err(|e| e.to_string())?;
    let result = invoke("update_todo", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn mark_todo_done(id: u32) -> Result<Todo, String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let result = invoke("mark_todo_done", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_todo(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("delete_todo", js_args).await.map_err(invoke_error)?;
    Ok(())
}
