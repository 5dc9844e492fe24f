// ABOUTME: Library entry point for the Mandelview WASM application
// ABOUTME: Exposes the rendering core and provides the hydrate function for browser mounting

mod app;
mod components;
pub mod rendering;

use leptos::*;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount_to_body(|| {
        view! {
          <app::App />
        }
    });
}
