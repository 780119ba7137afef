//! # leafscan
//!
//! Leptos + WASM frontend for potato leaf disease analysis. The page stages
//! a leaf photo, uploads it to an external inference service, and renders
//! the returned classification with confidence and advisory text.
//!
//! This crate contains pages, components, application state, and the
//! prediction-service client. Compiled with the `hydrate` feature it is the
//! browser bundle; with `ssr` it backs the small axum host binary.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entrypoint: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
