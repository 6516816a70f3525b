//! Typewriter effect on the header tagline

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use super::dom;
use crate::core::{TypingConfig, Typewriter};

const TAGLINE_SELECTOR: &str = ".header-tagline";

type TimerClosure = Closure<dyn FnMut()>;

struct TypingState {
    window: Window,
    tagline: HtmlElement,
    typewriter: Typewriter,
    config: TypingConfig,
    /// Re-armed with `setTimeout` for every character
    step: Option<TimerClosure>,
}

impl TypingState {
    fn schedule(&self, delay_ms: u32) {
        let Some(ref step) = self.step else {
            return;
        };
        if let Err(e) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                step.as_ref().unchecked_ref(),
                delay_ms as i32,
            )
        {
            warn!(?e, "Failed to schedule typing step");
        }
    }

    /// Type one character, or wind down once the text is complete
    fn advance(&mut self) {
        if self.typewriter.next().is_some() {
            self.tagline.set_text_content(Some(self.typewriter.typed()));
        }
        if !self.typewriter.is_done() {
            self.schedule(self.config.char_delay_ms);
            return;
        }

        let tagline = self.tagline.clone();
        let linger = self.config.cursor_linger_ms;
        if let Err(e) = dom::set_timeout(&self.window, linger, move || {
            if let Err(e) = tagline.style().set_property("border-right", "none") {
                warn!(?e, "Failed to remove typing cursor");
            }
        }) {
            warn!(?e, "Failed to schedule cursor removal");
        }
        debug!("Typing effect finished");
    }
}

pub fn init_typing_effect(
    window: &Window,
    document: &Document,
    config: &TypingConfig,
) -> Result<(), JsValue> {
    let Some(tagline) = dom::query::<HtmlElement>(document, TAGLINE_SELECTOR)? else {
        debug!("No tagline element, skipping typing effect");
        return Ok(());
    };

    let text = tagline.text_content().unwrap_or_default();
    tagline.set_text_content(Some(""));
    tagline
        .style()
        .set_property("border-right", &config.cursor_style)?;

    let typewriter = Typewriter::new(&text);
    debug!(chars = typewriter.remaining(), "Typing effect scheduled");

    let state = Rc::new(RefCell::new(TypingState {
        window: window.clone(),
        tagline,
        typewriter,
        config: config.clone(),
        step: None,
    }));

    // The closure holds the state it lives in, keeping both alive for the page
    let state_clone = state.clone();
    let step = Closure::wrap(Box::new(move || {
        state_clone.borrow_mut().advance();
    }) as Box<dyn FnMut()>);

    let mut s = state.borrow_mut();
    s.step = Some(step);
    s.schedule(config.start_delay_ms);
    drop(s);

    Ok(())
}
