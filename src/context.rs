//! Application Context
//!
//! Shared state provided via Leptos Context API: reload trigger, notice
//! channel, modal/detail routing, and the session.

use leptos::prelude::*;

use crate::models::{EditTodoParams, Todo, User};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload todos from the store - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload todos from the store - write
    set_reload_trigger: WriteSignal<u32>,
    /// Current user-facing notice, if any - read
    pub notice: ReadSignal<Option<String>>,
    set_notice: WriteSignal<Option<String>>,
    /// Param bag for the open edit modal (None = closed) - read
    pub editing: ReadSignal<Option<EditTodoParams>>,
    set_editing: WriteSignal<Option<EditTodoParams>>,
    /// Todo shown in the detail view (None = hidden) - read
    pub detail: ReadSignal<Option<Todo>>,
    set_detail: WriteSignal<Option<Todo>>,
    /// Session user, seeded once on startup
    pub session: ReadSignal<User>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        notice: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        editing: (ReadSignal<Option<EditTodoParams>>, WriteSignal<Option<EditTodoParams>>),
        detail: (ReadSignal<Option<Todo>>, WriteSignal<Option<Todo>>),
        session: ReadSignal<User>,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            notice: notice.0,
            set_notice: notice.1,
            editing: editing.0,
            set_editing: editing.1,
            detail: detail.0,
            set_detail: detail.1,
            session,
        }
    }

    /// Trigger a reload of todos
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show a user-facing notice banner
    pub fn notify(&self, message: impl Into<String>) {
        self.set_notice.set(Some(message.into()));
    }

    pub fn clear_notice(&self) {
        self.set_notice.set(None);
    }

    /// Open the edit modal for one todo
    pub fn open_editor(&self, params: EditTodoParams) {
        self.set_editing.set(Some(params));
    }

    /// Return from the edit modal to the list
    pub fn close_editor(&self) {
        self.set_editing.set(None);
    }

    /// Push the read-only detail view for one todo
    pub fn show_detail(&self, todo: Todo) {
        self.set_detail.set(Some(todo));
    }

    pub fn close_detail(&self) {
        self.set_detail.set(None);
    }
}
