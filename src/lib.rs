//! # spendboard-client
//!
//! Leptos + WASM frontend for the Spendboard expense-management system.
//!
//! The session core (persisted storage, session state, controller, and
//! access gate) is framework-free and tested natively; the view tree in
//! `pages`/`components` consumes it through context. Browser-only code
//! sits behind the `csr` feature so the whole crate compiles and runs
//! its tests off-browser.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod storage;

/// Browser entry point: mounts the application onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
