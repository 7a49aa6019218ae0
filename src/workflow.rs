//! Edit Todo Workflow
//!
//! The state machine behind the edit modal: seed form state from the
//! navigation params, validate on submit, hand the caller a patch to send,
//! then absorb the remote outcome into feedback and a close-or-stay decision.
//!
//! The machine itself never awaits; the single suspension point (the store
//! call) lives in the component, between `submit` and `complete`. Validation
//! therefore always precedes the send, and the send's completion always
//! precedes feedback and reset.

use crate::analytics::Telemetry;
use crate::form::{FormState, Rules, Schema};
use crate::models::{EditTodoParams, TodoPatch};

/// Where the workflow currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fields are editable, no remote call in flight
    Editing,
    /// An update call is outstanding
    Submitting,
    /// The modal is done and should be gone
    Closed,
}

/// Outcome of a submit request
#[derive(Debug, Clone, PartialEq)]
pub enum Submit {
    /// Validation failed; field errors are in the form, nothing was sent
    Rejected,
    /// A call is already outstanding; nothing was validated or sent
    Busy,
    /// Valid: send exactly this patch to the store
    Send(TodoPatch),
}

/// Validation schema for the edit form
pub fn edit_todo_schema() -> Schema {
    Schema::new()
        .field(
            "title",
            Rules::new()
                .required("Title is required")
                .min_len(3, "Title length should be at least 3 characters"),
        )
        .field(
            "description",
            Rules::new().max_len(300, "Must be max 300 characters"),
        )
}

/// State machine for editing one todo
pub struct EditWorkflow {
    todo_id: u32,
    schema: Schema,
    form: FormState,
    is_important: bool,
    phase: Phase,
}

impl EditWorkflow {
    /// Seed from the navigation param bag; runs once per modal open
    pub fn new(params: &EditTodoParams) -> Self {
        let mut form = FormState::new();
        form.reset(&[
            ("title", params.title.as_str()),
            ("description", params.description.as_str()),
        ]);

        Self {
            todo_id: params.id,
            schema: edit_todo_schema(),
            form,
            is_important: params.is_important,
            phase: Phase::Editing,
        }
    }

    pub fn todo_id(&self) -> u32 {
        self.todo_id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn is_important(&self) -> bool {
        self.is_important
    }

    pub fn toggle_important(&mut self) {
        self.is_important = !self.is_important;
    }

    /// Field write from a bound input
    pub fn set_field(&mut self, name: &'static str, value: String) {
        self.form.set_value(name, value);
    }

    /// Blur notification from a bound input
    pub fn blur_field(&mut self, name: &'static str) {
        self.form.validate_field(&self.schema, name);
    }

    /// Ask to submit. Validation happens here; no patch is produced unless
    /// the whole form passes, and never while a call is outstanding.
    pub fn submit(&mut self) -> Submit {
        if self.phase != Phase::Editing {
            return Submit::Busy;
        }

        if !self.form.validate(&self.schema) {
            return Submit::Rejected;
        }

        self.phase = Phase::Submitting;
        Submit::Send(TodoPatch {
            title: self.form.value("title").to_string(),
            description: self.form.value("description").to_string(),
            is_important: self.is_important,
        })
    }

    /// Feed back the remote outcome. Success resets the form and closes;
    /// failure keeps everything the user typed and reopens for retry.
    /// Returns the notice to show.
    pub fn complete(&mut self, result: Result<(), String>, telemetry: &dyn Telemetry) -> &'static str {
        match result {
            Ok(()) => {
                telemetry.todo_edited(self.form.value("title"));
                self.reset_form();
                self.phase = Phase::Closed;
                "Todo updated!"
            }
            Err(detail) => {
                telemetry.record_error("edit_todo", &detail);
                self.phase = Phase::Editing;
                "Something went wrong"
            }
        }
    }

    /// Close without saving. Ignored while a call is outstanding (it cannot
    /// be aborted); returns whether the modal closed.
    pub fn dismiss(&mut self) -> bool {
        if self.phase == Phase::Submitting {
            return false;
        }
        self.reset_form();
        self.phase = Phase::Closed;
        true
    }

    fn reset_form(&mut self) {
        self.form.reset(&[("title", ""), ("description", "")]);
        self.is_important = false;
    }
}
