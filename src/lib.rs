//! Go Nepal - tourism website front end
//!
//! Navigation bar, login page, destination listings and a shared sign-in
//! modal, rendered on the server and hydrated in the browser with Leptos.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
