//! # client
//!
//! Leptos + WASM frontend for the ChapFarm administration dashboard.
//!
//! This crate contains pages, components, session state, REST wrappers and
//! the route table. It is compiled with `ssr` for server rendering inside the
//! root `chapfarm` server and with `hydrate` for the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating chapfarm dashboard");
    leptos::mount::hydrate_body(app::App);
}
