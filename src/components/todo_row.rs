//! Todo List Row Component
//!
//! One row per todo: title, status line, and the Edit / Delete / More / Done
//! actions. Edit and Done are gated on the admin flag and skipped for
//! finished todos; Delete is admin-only.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::analytics::{ConsoleTelemetry, Telemetry};
use crate::commands;
use crate::context::AppContext;
use crate::models::{EditTodoParams, Todo};

/// Status line under the title
pub(crate) fn status_text(is_done: bool, is_important: bool) -> &'static str {
    if is_done {
        "Done"
    } else if is_important {
        "In progress ... IMPORTANT"
    } else {
        "In progress ..."
    }
}

#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = todo.id;
    let is_done = todo.is_done;
    let is_important = todo.is_important;
    let is_admin = move || ctx.session.get().is_admin;

    let edit_params = EditTodoParams::from_todo(&todo);
    let detail_todo = todo.clone();

    let open_edit_modal = move |_| {
        ctx.open_editor(edit_params.clone());
        ConsoleTelemetry.modal_opened("edit_todo");
    };

    let delete_todo = move |_| {
        spawn_local(async move {
            match commands::delete_todo(id).await {
                Ok(()) => {
                    ctx.notify("Todo deleted!");
                    ConsoleTelemetry.todo_deleted();
                    ctx.reload();
                }
                Err(error) => {
                    ctx.notify("Something went wrong");
                    ConsoleTelemetry.record_error("delete_todo", &error);
                }
            }
        });
    };

    let more_info = move |_| {
        ctx.show_detail(detail_todo.clone());
    };

    let mark_as_done = move |_| {
        spawn_local(async move {
            match commands::mark_todo_done(id).await {
                Ok(_) => {
                    ctx.notify("Todo finished!");
                    ConsoleTelemetry.todo_finished();
                    ctx.reload();
                }
                Err(error) => {
                    ctx.notify("Something went wrong");
                    ConsoleTelemetry.record_error("finish_todo", &error);
                }
            }
        });
    };

    let row_class = if is_done {
        "todo-row done"
    } else if is_important {
        "todo-row important"
    } else {
        "todo-row"
    };

    view! {
        <div class=row_class>
            <div class="todo-title">{todo.title.clone()}</div>
            <div class="todo-status">{status_text(is_done, is_important)}</div>
            <div class="todo-actions">
                <button
                    class="action-btn edit"
                    disabled=move || is_done || !is_admin()
                    on:click=open_edit_modal
                >
                    "Edit"
                </button>
                <button
                    class="action-btn delete"
                    disabled=move || !is_admin()
                    on:click=delete_todo
                >
                    "Delete"
                </button>
                <button class="action-btn more" on:click=more_info>
                    "More"
                </button>
                <button
                    class="action-btn done"
                    disabled=move || is_done || !is_admin()
                    on:click=mark_as_done
                >
                    "Done"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::status_text;

    #[test]
    fn done_wins_over_important() {
        assert_eq!(status_text(true, true), "Done");
        assert_eq!(status_text(true, false), "Done");
    }

    #[test]
    fn important_in_progress_is_called_out() {
        assert_eq!(status_text(false, true), "In progress ... IMPORTANT");
    }

    #[test]
    fn plain_in_progress_otherwise() {
        assert_eq!(status_text(false, false), "In progress ...");
    }
}
