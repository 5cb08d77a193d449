//! # episodes-ui
//!
//! Leptos frontend for the episode streaming site: layouts, pages, loading
//! skeletons, and the auth + toast contexts. Built twice: with `ssr` for the
//! Axum server and with `hydrate` for the WASM bundle.

pub mod app;
pub mod components;
pub mod layouts;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
