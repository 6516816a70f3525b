//! Browser wiring for every effect
//!
//! Each routine guards its own elements and is initialized independently:
//! a missing element or a failing routine never stops the others.

mod canvas;
mod copyright;
mod dom;
mod parallax;
mod raf;
mod reveal;
mod smooth_scroll;
mod starfield;
mod typing;

use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement};

use crate::core::FxConfig;

/// Optional inline JSON config element
const CONFIG_ELEMENT_ID: &str = "fx-config";

/// Read the page config, falling back to defaults
fn read_config(document: &Document) -> FxConfig {
    match dom::by_id::<HtmlElement>(document, CONFIG_ELEMENT_ID).and_then(|e| e.text_content()) {
        Some(json) => FxConfig::from_json_or_default(&json),
        None => {
            debug!("No inline fx config, using defaults");
            FxConfig::default()
        }
    }
}

fn report(routine: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        warn!(routine, ?e, "Effect failed to initialize");
    }
}

/// Initialize every effect enabled for the page's variant
pub fn init() -> Result<(), JsValue> {
    let window = dom::window()?;
    let document = dom::document()?;
    let config = read_config(&document);

    info!(variant = ?config.variant, "Initializing page effects");

    report("scroll_reveal", reveal::init_scroll_reveal(&document));
    report("smooth_scroll", smooth_scroll::init_smooth_scroll(&document));
    report("copyright", copyright::update_copyright_year(&document));

    if config.variant.parallax() {
        report(
            "parallax",
            parallax::init_parallax(&window, &document, config.parallax_factor),
        );
    }
    if config.variant.typing() {
        report(
            "typing",
            typing::init_typing_effect(&window, &document, &config.typing),
        );
    }
    if config.variant.starfield() {
        report(
            "starfield",
            starfield::init_starfield(&window, &document, &config.starfield),
        );
    }

    Ok(())
}

/// Run `init` once the DOM is ready
pub fn run() -> Result<(), JsValue> {
    let document = dom::document()?;

    if document.ready_state() != "loading" {
        return init();
    }

    let on_ready = Closure::once_into_js(move |_: Event| {
        report("init", init());
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    debug!("Waiting for DOMContentLoaded");
    Ok(())
}
