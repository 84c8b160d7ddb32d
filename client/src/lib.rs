//! # quotemark-client
//!
//! Leptos + WASM view layer for the PDF quote viewer.
//!
//! The browser-independent behavior (coordinate mapping, overlay, controller
//! state machine) lives in the `viewer` crate. This crate binds it to the
//! DOM: pdf.js rendering, the annotation store's REST endpoints, and the
//! toolbar, page surface and sidebar components. Browser-only code is gated
//! behind the `csr` feature so the rest builds and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: logging, panic hook, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
