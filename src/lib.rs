//! # authdash
//!
//! Leptos + WASM frontend for a token-authenticated dashboard backed by a
//! Django REST Framework `authtoken` API.
//!
//! This crate contains the auth client (token acquire/persist/clear), the
//! login and dashboard pages, their view state, and the static instructional
//! content shown to users exploring the token flow.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_support;

pub use app::App;

/// Hydration entry point for the WASM client.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
