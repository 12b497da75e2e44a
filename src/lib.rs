//! # storefront
//!
//! Leptos + WASM storefront client. Pages are guarded by a locally stored
//! session token, the cart lives in `localStorage`, and products, login, and
//! registration go through the storefront REST API.
//!
//! `start()` is the browser entry point: it builds the config, runs the auth
//! guard once for the current page, and only then mounts the application.

pub mod app;
pub mod components;
pub mod config;
pub mod guard;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already initialized: {e}");
    }

    let config = config::StorefrontConfig::from_build_env();
    let guard = guard::AuthGuard::new(config.guard.clone());
    if !guard.enforce() {
        return;
    }

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
