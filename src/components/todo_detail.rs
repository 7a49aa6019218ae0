//! Todo Detail Component
//!
//! Read-only view pushed by a row's More action.

use leptos::prelude::*;

use crate::components::todo_row::status_text;
use crate::context::AppContext;
use crate::models::Todo;

#[component]
pub fn TodoDetail(todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="todo-detail">
            <div class="detail-header">
                <h2>{todo.title.clone()}</h2>
                <button class="close-btn" on:click=move |_| ctx.close_detail()>
                    "×"
                </button>
            </div>
            <p class="detail-status">{status_text(todo.is_done, todo.is_important)}</p>
            <p class="detail-description">{todo.description.clone()}</p>
        </div>
    }
}
