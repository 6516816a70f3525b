//! Header parallax on scroll

use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, Window};

use super::dom;
use crate::core::parallax;

const HEADER_SELECTOR: &str = "header";

pub fn init_parallax(window: &Window, document: &Document, factor: f64) -> Result<(), JsValue> {
    let Some(header) = dom::query::<HtmlElement>(document, HEADER_SELECTOR)? else {
        debug!("No header element, skipping parallax");
        return Ok(());
    };

    let window_clone = window.clone();
    let on_scroll = Closure::wrap(Box::new(move |_: Event| {
        let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
        let Some(style) = parallax(scroll_y, header.offset_height() as f64, factor) else {
            return;
        };

        let css = header.style();
        if let Err(e) = css
            .set_property("transform", &style.transform_css())
            .and_then(|_| css.set_property("opacity", &style.opacity_css()))
        {
            warn!(?e, "Failed to apply parallax style");
        }
    }) as Box<dyn FnMut(Event)>);

    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();

    debug!(factor, "Header parallax wired");
    Ok(())
}
