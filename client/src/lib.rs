//! # client
//!
//! Leptos + WASM frontend for the group chat: login, registration, the
//! group chat room and the member profile, all talking to the remote REST
//! backend through the `chat` crate's flows.
//!
//! This crate contains pages, components, the browser HTTP adapter, and the
//! `localStorage` session store. The host server renders it with the `ssr`
//! feature; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
