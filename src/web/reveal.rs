//! Scroll reveal via IntersectionObserver

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom;
use crate::core::{RevealTracker, ANIMATE_CLASS, REVEAL_SELECTOR, REVEAL_THRESHOLD, VISIBLE_CLASS};

/// Attribute carrying each target's tracker index
const INDEX_ATTR: &str = "data-fx-reveal";

fn entry_index(target: &Element) -> Option<usize> {
    target.get_attribute(INDEX_ATTR)?.parse().ok()
}

pub fn init_scroll_reveal(document: &Document) -> Result<(), JsValue> {
    let targets = dom::query_all(document, REVEAL_SELECTOR)?;
    if targets.is_empty() {
        debug!("No reveal targets, skipping");
        return Ok(());
    }

    for (idx, element) in targets.iter().enumerate() {
        element.class_list().add_1(ANIMATE_CLASS)?;
        element.set_attribute(INDEX_ATTR, &idx.to_string())?;
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new(targets.len())));
    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let entries: Vec<IntersectionObserverEntry> = entries
                .iter()
                .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                .collect();

            let mut tracker = tracker.borrow_mut();
            let revealed = tracker.on_entries(
                entries
                    .iter()
                    .filter_map(|e| Some((entry_index(&e.target())?, e.is_intersecting()))),
            );

            for entry in &entries {
                let target = entry.target();
                if !entry_index(&target).is_some_and(|idx| revealed.contains(&idx)) {
                    continue;
                }
                if let Err(e) = target.class_list().add_1(VISIBLE_CLASS) {
                    warn!(?e, "Failed to mark element visible");
                }
                observer.unobserve(&target);
            }

            if tracker.pending() == 0 {
                debug!("All reveal targets shown");
                observer.disconnect();
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    on_intersect.forget();

    for element in &targets {
        observer.observe(element);
    }

    debug!(count = targets.len(), "Scroll reveal observing");
    Ok(())
}
