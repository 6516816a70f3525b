//! Smooth scrolling for same-page links

use tracing::{debug, trace};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::dom;
use crate::core::{anchor_action, AnchorAction, ANCHOR_SELECTOR};

pub fn init_smooth_scroll(document: &Document) -> Result<(), JsValue> {
    let anchors = dom::query_all(document, ANCHOR_SELECTOR)?;

    for anchor in &anchors {
        let link = anchor.clone();
        let document = document.clone();
        let on_click = Closure::wrap(Box::new(move |e: Event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };

            let mut target: Option<Element> = None;
            let action = anchor_action(&href, |id| {
                target = document.get_element_by_id(id);
                target.is_some()
            });

            match (action, target) {
                (AnchorAction::ScrollTo(id), Some(target)) => {
                    e.prevent_default();
                    trace!(id, "Smooth scrolling to anchor");

                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
                _ => trace!(href = %href, "Anchor left to default action"),
            }
        }) as Box<dyn FnMut(Event)>);

        anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    debug!(count = anchors.len(), "Smooth scroll links wired");
    Ok(())
}
