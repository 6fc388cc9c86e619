//! # busline
//!
//! Leptos + WASM frontend for the Busline bus-ticketing platform.
//!
//! This crate contains pages, components, application state, the REST API
//! layer, and the browser session store. Customers search published trips;
//! operators manage buses, routes, fares, and schedules against the
//! platform's REST backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
