//! # signup-client
//!
//! Leptos + WASM browser client for the school activity signup backend.
//!
//! The client fetches the activity roster and the teacher's auth status,
//! renders them, and sends signup/unregister/login/logout requests. State
//! lives in `state`, every mutation goes through `dispatch`, and `presenter`
//! turns state snapshots into view models that `components` render.

pub mod app;
pub mod components;
pub mod config;
pub mod dispatch;
pub mod net;
pub mod presenter;
pub mod state;

pub use app::App;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger was already installed");
    }
    leptos::mount::mount_to_body(App);
}
