//! Thin helpers over `web_sys` lookups
//!
//! Lookups return `Ok(None)` for a missing element; only JS exceptions
//! surface as `Err`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// First element matching `selector`, cast to `T`
pub fn query<T: JsCast>(document: &Document, selector: &str) -> Result<Option<T>, JsValue> {
    Ok(document
        .query_selector(selector)?
        .and_then(|e| e.dyn_into::<T>().ok()))
}

/// Every element matching `selector`
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Element with the given id, cast to `T`
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<T>().ok())
}

pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Viewport width and height in CSS pixels
pub fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

/// Run `f` once after `delay_ms`
pub fn set_timeout<F>(window: &Window, delay_ms: u32, f: F) -> Result<i32, JsValue>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(move || f());
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms as i32,
    )
}
