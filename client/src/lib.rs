//! # novademy-client
//!
//! Leptos + WASM front end for the Novademy exam-preparation platform.
//!
//! This crate contains pages, components, application state, form
//! validation, translations and the REST client. The `ssr` build is rendered
//! by `novademy-server`; the `hydrate` build runs in the browser and talks to
//! the same-origin `/api/v1` proxy.

pub mod app;
pub mod components;
pub mod forms;
pub mod i18n;
pub mod net;
pub mod pages;
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
