//! # client
//!
//! Leptos + WASM frontend for the academy portal.
//!
//! This crate contains pages, components, application state, REST helpers,
//! and wire types. Role dashboards (admin, coach, parent) are thin tables over
//! the backend; the skill-progress tracker owns the only non-trivial client
//! state (catalog merge plus optimistic updates).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("academy portal hydrating");
    leptos::mount::hydrate_body(app::App);
}
