//! Keep the footer copyright year current

use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use super::dom;
use crate::core::replace_year;
use crate::time::current_year;

const COPYRIGHT_SELECTOR: &str = ".footer-copyright";

pub fn update_copyright_year(document: &Document) -> Result<(), JsValue> {
    let Some(element) = dom::query::<Element>(document, COPYRIGHT_SELECTOR)? else {
        debug!("No copyright element, skipping");
        return Ok(());
    };

    let text = element.text_content().unwrap_or_default();
    if let Some(updated) = replace_year(&text, current_year()) {
        element.set_text_content(Some(&updated));
    }
    Ok(())
}
