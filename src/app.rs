//! Todo Frontend App
//!
//! Root component: loads the list and session, provides context, and hosts
//! the notice banner, detail view, and edit modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::commands;
use crate::components::{EditTodoModal, NewTodoForm, Notice, TodoDetail, TodoRow};
use crate::context::AppContext;
use crate::models::{EditTodoParams, Todo, User};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (todos, set_todos) = signal(Vec::<Todo>::new());
    let (session, set_session) = signal(User::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let (editing, set_editing) = signal::<Option<EditTodoParams>>(None);
    let (detail, set_detail) = signal::<Option<Todo>>(None);

    // Provide context to all children
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        (notice, set_notice),
        (editing, set_editing),
        (detail, set_detail),
        session,
    ));

    // Load session once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(user) = commands::current_user().await {
                set_session.set(user);
            }
        });
    });

    // Load todos on mount and after every mutation
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        spawn_local(async move {
            match commands::list_todos().await {
                Ok(loaded) => set_todos.set(loaded),
                Err(error) => {
                    web_sys::console::error_1(&JsValue::from_str(&format!(
                        "failed to load todos: {}",
                        error
                    )));
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <Notice />

            <main class="main-content">
                <h1>"Todos"</h1>

                <NewTodoForm />

                <div class="todo-list">
                    <For
                        each=move || todos.get()
                        key=|todo| todo.id
                        children=move |todo| view! { <TodoRow todo /> }
                    />
                </div>

                <p class="todo-count">{move || format!("{} todos", todos.get().len())}</p>
            </main>

            {move || detail.get().map(|todo| view! { <TodoDetail todo /> })}

            {move || editing.get().map(|params| view! { <EditTodoModal params /> })}
        </div>
    }
}
