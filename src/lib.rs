//! # beacon-console
//!
//! Leptos + WASM client for the Beacon administration console: login,
//! a multi-module "my page" workspace area, and REST-backed stores for
//! the session and workspace selection.
//!
//! The crate is split into routing (`app`, `routes`), stores (`state`),
//! the REST boundary (`net`), route-level screens (`pages`), and
//! browser glue (`util`).

pub mod app;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point for the browser build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
