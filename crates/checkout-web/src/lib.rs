//! coin-checkout Web Frontend
//!
//! Leptos-based WASM store: a coin package list, the card checkout modal
//! driven by `checkout-core`, toasts, and a local profile editor.

mod app;
mod components;
mod config;
mod observer;
mod packages;
mod pages;
mod stripe;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[allow(unsafe_code)]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
