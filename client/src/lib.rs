//! # client
//!
//! Leptos + WASM frontend for the Quill blog.
//!
//! This crate contains the route pages, presentational components, the
//! session provider, and the REST clients for the hosted document store and
//! identity provider. It compiles natively for SSR (feature `ssr`) and tests,
//! and to WASM for hydration (feature `hydrate`).

pub mod app;
pub mod components;
pub mod config;
pub mod model;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
