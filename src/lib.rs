//! # hyrule-portal
//!
//! Leptos + WASM frontend for the Hyrule Portal fan site: a home page, a
//! filterable game gallery, a contact form, and a step-by-step puzzle guide
//! with persisted progress. Replaces the hand-written JavaScript pages with a
//! Rust-native UI layer.
//!
//! This crate contains pages, components, application state, data types and
//! fetchers, and browser utilities (localStorage, URL parameters, clipboard).
//! Everything that touches the browser is gated behind the `csr` feature so
//! the state and utility logic tests run natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point — mounts the application onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(app::App);
}
