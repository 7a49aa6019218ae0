//! Command Wrappers
//!
//! Frontend bindings to the host-registered backend commands. This is the
//! only doorway to the remote document store; failures come back as strings
//! and are absorbed into user-facing notices by the callers.

mod session;
mod todo;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Render a rejected invoke into a plain error string
fn invoke_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

// Re-export all public items
pub use session::*;
pub use todo::*;
