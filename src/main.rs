//! Todo Frontend Entry Point

mod analytics;
mod app;
mod commands;
mod components;
mod context;
mod form;
mod models;
mod workflow;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
