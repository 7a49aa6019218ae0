//! Analytics and Diagnostics Sinks
//!
//! Fire-and-forget side channels the workflows call without awaiting. The
//! trait keeps them injectable so tests can record instead of log.

use wasm_bindgen::JsValue;

/// Injected capability for event logging and error recording
pub trait Telemetry {
    /// A todo was edited; records the new title
    fn todo_edited(&self, title: &str);
    /// A todo was deleted
    fn todo_deleted(&self);
    /// A todo was marked done
    fn todo_finished(&self);
    /// A modal was opened
    fn modal_opened(&self, name: &str);
    /// A caught error, with the call site it came from
    fn record_error(&self, context: &str, detail: &str);
}

/// Production sink: the browser console
pub struct ConsoleTelemetry;

impl Telemetry for ConsoleTelemetry {
    fn todo_edited(&self, title: &str) {
        web_sys::console::log_1(&JsValue::from_str(&format!("[analytics] edit_todo title={}", title)));
    }

    fn todo_deleted(&self) {
        web_sys::console::log_1(&JsValue::from_str("[analytics] delete_todo"));
    }

    fn todo_finished(&self) {
        web_sys::console::log_1(&JsValue::from_str("[analytics] finish_todo"));
    }

    fn modal_opened(&self, name: &str) {
        web_sys::console::log_1(&JsValue::from_str(&format!("[analytics] open_modal name={}", name)));
    }

    fn record_error(&self, context: &str, detail: &str) {
        web_sys::console::error_1(&JsValue::from_str(&format!("[diagnostics] {}: {}", context, detail)));
    }
}

#[cfg(test)]
pub mod recording {
    //! Test sink that remembers every call

    use super::Telemetry;
    use std::cell::RefCell;

    #[derive(Default)]
    pub struct RecordingTelemetry {
        pub events: RefCell<Vec<String>>,
        pub errors: RefCell<Vec<String>>,
    }

    impl Telemetry for RecordingTelemetry {
        fn todo_edited(&self, title: &str) {
            self.events.borrow_mut().push(format!("edit:{}", title));
        }

        fn todo_deleted(&self) {
            self.events.borrow_mut().push("delete".to_string());
        }

        fn todo_finished(&self) {
            self.events.borrow_mut().push("finish".to_string());
        }

        fn modal_opened(&self, name: &str) {
            self.events.borrow_mut().push(format!("open_modal:{}", name));
        }

        fn record_error(&self, context: &str, detail: &str) {
            self.errors.borrow_mut().push(format!("{}: {}", context, detail));
        }
    }
}
