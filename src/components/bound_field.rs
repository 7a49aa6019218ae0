//! Bound Field Component
//!
//! Reusable text input bound by name to a shared form-state container. A
//! controlled view: every keystroke is written back through `on_change`,
//! blur is forwarded through `on_blur`, and the container's error for this
//! field (if any) renders beneath the input.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn BoundField(
    /// Field name in the form-state container
    name: &'static str,
    placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] on_blur: Callback<()>,
) -> impl IntoView {
    view! {
        <div class=move || {
            if error.get().is_some() { "bound-field has-error" } else { "bound-field" }
        }>
            <input
                type="text"
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    on_change.run(input.value());
                }
                on:blur=move |_| on_blur.run(())
            />
        </div>
        {move || error.get().map(|message| view! {
            <p class="field-error">{message}</p>
        })}
    }
}
