//! # client
//!
//! Leptos + WASM frontend for the StreamQ live-question moderation widget.
//! Attendees submit questions for a live stream, a moderator clears or
//! rejects them by button or swipe, and approved questions feed the
//! read-only speaker view.
//!
//! This crate contains the app shell, the dashboard page, shared reactive
//! state, and the websocket client for the external realtime record store.
//! Swipe recognition lives in the `gesture` crate; the shared record model
//! and wire schema live in `records`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install diagnostics and hydrate the app shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
