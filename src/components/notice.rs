//! Notice Banner Component
//!
//! Displays the current user-facing notice ("Todo updated!", "Something
//! went wrong", ...) until acknowledged.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn Notice() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.notice.get().map(|message| view! {
            <div class="notice-banner">
                <span class="notice-text">{message}</span>
                <button class="notice-ok-btn" on:click=move |_| ctx.clear_notice()>
                    "OK"
                </button>
            </div>
        })}
    }
}
