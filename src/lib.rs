//! # newsstand
//!
//! Leptos + WASM frontend for the publication subscription service.
//!
//! This crate contains pages, components, application state, and the REST
//! client for the backend API. Page switching is a single in-memory enum
//! rather than URL routing; the active publication-type filter is mirrored
//! into the URL query string for shareable links.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
