//! hashnav application shell.
//!
//! A Leptos single-page application routed by the URL fragment, plus the
//! `hashnav-serve` binary that serves the built site as static files.

#![allow(non_snake_case)]

pub mod about;
pub mod app;
pub mod config;
pub mod device;
pub mod error;
pub mod history;
pub mod routes;
pub mod views;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(App);
}
