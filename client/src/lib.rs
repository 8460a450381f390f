//! # smartcity-client
//!
//! Leptos + WASM frontend for the Smart City Platform dashboard.
//!
//! This crate contains the route table, the session-backed auth gate, route
//! guards, the role-aware shell and the pages. It is rendered on the server
//! by the root crate (`ssr` feature) and hydrated in the browser
//! (`hydrate` feature).

pub mod app;
pub mod components;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
