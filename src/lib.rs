//! # pawcare
//!
//! Leptos + WASM frontend for the PawCare pet-care booking service.
//!
//! This crate contains the entry redirector that reconciles in-memory
//! session state with persisted credentials, the two-page registration
//! flow with its single-use handoff, login/logout, and the notification
//! surface they share.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_helpers;

/// WASM entry point: install logging and mount the app into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
