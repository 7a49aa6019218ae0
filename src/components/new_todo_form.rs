//! New Todo Form Component
//!
//! Inline form for creating todos from the list screen.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::analytics::{ConsoleTelemetry, Telemetry};
use crate::commands::{self, CreateTodoArgs};
use crate::context::AppContext;

/// Record a failed create and hand back the notice to show
fn create_failed(telemetry: &dyn Telemetry, error: &str) -> &'static str {
    telemetry.record_error("create_todo", error);
    "Something went wrong"
}

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_title, set_new_title) = signal(String::new());
    let (new_description, set_new_description) = signal(String::new());
    let (is_important, set_is_important) = signal(false);

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        if title.is_empty() {
            return;
        }
        let description = new_description.get();
        let important = is_important.get();

        spawn_local(async move {
            let args = CreateTodoArgs {
                title: &title,
                description: &description,
                is_important: important,
            };
            match commands::create_todo(&args).await {
                Ok(_) => {
                    set_new_title.set(String::new());
                    set_new_description.set(String::new());
                    set_is_important.set(false);
                    ctx.reload();
                }
                Err(error) => {
                    ctx.notify(create_failed(&ConsoleTelemetry, &error));
                }
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <div class="new-todo-row">
                <input
                    type="text"
                    placeholder="Add new todo..."
                    prop:value=move || new_title.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_title.set(input.value());
                    }
                />
                <input
                    type="text"
                    placeholder="Description"
                    prop:value=move || new_description.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_description.set(input.value());
                    }
                />
                <label class="importance-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || is_important.get()
                        on:change=move |_| set_is_important.update(|v| *v = !*v)
                    />
                    "Important"
                </label>
                <button type="submit">"Add"</button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::create_failed;
    use crate::analytics::recording::RecordingTelemetry;

    #[test]
    fn failed_create_records_error_and_warns_user() {
        let telemetry = RecordingTelemetry::default();

        let notice = create_failed(&telemetry, "store unreachable");

        assert_eq!(notice, "Something went wrong");
        assert_eq!(
            telemetry.errors.borrow().as_slice(),
            ["create_todo: store unreachable"]
        );
        assert!(telemetry.events.borrow().is_empty());
    }
}
