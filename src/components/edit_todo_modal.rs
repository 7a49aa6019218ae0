//! Edit Todo Modal
//!
//! Composes two bound fields and an importance toggle over the edit
//! workflow. Submit validates locally, then issues the single update call;
//! success closes the modal, failure keeps it open with the input intact.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::analytics::ConsoleTelemetry;
use crate::commands;
use crate::components::BoundField;
use crate::context::AppContext;
use crate::models::EditTodoParams;
use crate::workflow::{EditWorkflow, Phase, Submit};

#[component]
pub fn EditTodoModal(params: EditTodoParams) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Seeded once per open; the modal is remounted for every edit action
    let workflow = RwSignal::new(EditWorkflow::new(&params));

    let heading = format!("Edit Todo: \"{}\"", params.title);

    let title_value = Signal::derive(move || workflow.with(|w| w.form().value("title").to_string()));
    let title_error =
        Signal::derive(move || workflow.with(|w| w.form().error("title").map(str::to_string)));
    let description_value =
        Signal::derive(move || workflow.with(|w| w.form().value("description").to_string()));
    let description_error = Signal::derive(move || {
        workflow.with(|w| w.form().error("description").map(str::to_string))
    });

    let is_important = move || workflow.with(|w| w.is_important());
    let submitting = move || workflow.with(|w| w.phase() == Phase::Submitting);

    let handle_submit = move |_| {
        let action = workflow
            .try_update(|w| w.submit())
            .unwrap_or(Submit::Busy);

        if let Submit::Send(patch) = action {
            let id = workflow.with_untracked(|w| w.todo_id());
            spawn_local(async move {
                let result = commands::update_todo(id, &patch).await.map(|_| ());
                let notice = workflow
                    .try_update(|w| w.complete(result, &ConsoleTelemetry))
                    .unwrap_or("Something went wrong");
                ctx.notify(notice);
                if workflow.with_untracked(|w| w.phase() == Phase::Closed) {
                    ctx.close_editor();
                    ctx.reload();
                }
            });
        }
    };

    let handle_dismiss = move |_| {
        let closed = workflow.try_update(|w| w.dismiss()).unwrap_or(false);
        if closed {
            ctx.close_editor();
        }
    };

    view! {
        <div class="modal-overlay">
            <div class="edit-todo-modal">
                <h2 class="modal-title">{heading}</h2>

                <div class="modal-inputs">
                    <BoundField
                        name="title"
                        placeholder="Title"
                        value=title_value
                        error=title_error
                        on_change=move |value: String| {
                            workflow.update(|w| w.set_field("title", value));
                        }
                        on_blur=move |_| workflow.update(|w| w.blur_field("title"))
                    />
                    <BoundField
                        name="description"
                        placeholder="Description"
                        value=description_value
                        error=description_error
                        on_change=move |value: String| {
                            workflow.update(|w| w.set_field("description", value));
                        }
                        on_blur=move |_| workflow.update(|w| w.blur_field("description"))
                    />
                    <label class="importance-toggle">
                        <input
                            type="checkbox"
                            prop:checked=is_important
                            on:change=move |_| workflow.update(|w| w.toggle_important())
                        />
                        "Is Important?"
                    </label>
                </div>

                <div class="modal-buttons">
                    <button class="dismiss-btn" on:click=handle_dismiss>
                        "Dismiss"
                    </button>
                    <button
                        class="submit-btn"
                        disabled=submitting
                        on:click=handle_submit
                    >
                        "Submit"
                    </button>
                </div>
            </div>
        </div>
    }
}
