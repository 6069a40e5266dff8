//! # authflow
//!
//! Leptos + WASM browser client that signs users in against a remote identity
//! service and gates the dashboard behind that session.
//!
//! The core is `state::auth::AuthManager`, which owns the session lifecycle;
//! `util::auth` holds the route-guard policy consuming it. Pages and
//! components are thin views over those two.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;
    use crate::config::ClientConfig;

    console_error_panic_hook::set_once();
    let config = ClientConfig::from_build_env();
    let _ = console_log::init_with_level(config.log_level);
    log::info!("authflow starting against {}", config.api_base);
    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
