//! # vidstream
//!
//! Leptos + WASM single-page client for a video-sharing backend: feed,
//! playback, uploads, playlists, comments, likes, subscriptions, posts, and
//! a channel-insights screen, all driven by bearer-token REST calls.
//!
//! This crate contains pages, components, shared application state, and the
//! API access layer. The backend itself is external; everything here is UI
//! state wiring over its REST surface.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
