//! # client
//!
//! Leptos + WASM browser client for the Wheels ride-sharing service.
//!
//! Pages own route-level orchestration, `net` adapts the REST contract from
//! the `rides` crate to `gloo-net`, and `util` holds the browser glue
//! (`localStorage` session, alerts, navigation after a flow settles). All
//! flow logic lives in `rides`; this crate only binds it to signals.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
