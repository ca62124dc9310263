//! Filegai Frontend Entry Point

mod alert;
mod api;
mod app;
mod color;
mod components;
mod context;
mod digest;
mod editor;
mod filename;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
