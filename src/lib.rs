//! Portfolio page effects
//!
//! Scroll reveal, smooth anchor scrolling, copyright year, header parallax,
//! a typewriter tagline and an animated starfield canvas. The effect logic
//! lives in [`core`] and builds everywhere; the DOM wiring in `web` only
//! builds for `wasm32`.

pub mod core;
pub mod time;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    // Initialize tracing for browser console
    tracing_wasm::set_as_global_default();

    if let Err(e) = web::run() {
        tracing::error!(?e, "Failed to start page effects");
    }
}
