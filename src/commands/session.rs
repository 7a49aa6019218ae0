//! Session Commands
//!
//! Frontend binding for the current-user lookup. The admin flag it carries
//! gates the edit/delete/done row actions.

use wasm_bindgen::JsValue;

use super::{invoke, invoke_error};
use crate::models::User;

pub async fn current_user() -> Result<User, String> {
    let result = invoke("current_user", JsValue::NULL).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
