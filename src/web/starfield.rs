//! Starfield canvas wiring: resize listener and animation loop

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, Event, HtmlCanvasElement, Window};

use super::canvas::CanvasSurface;
use super::dom;
use super::raf::RafLoop;
use crate::core::{StarfieldConfig, Starfield};

/// Id of the canvas the starfield draws into
pub const STARS_CANVAS_ID: &str = "stars-canvas";

/// Shared between the resize listener and the frame callback
struct StarfieldState {
    field: Starfield,
    surface: CanvasSurface,
    reduced_motion: bool,
}

impl StarfieldState {
    fn resize(&mut self, window: &Window) {
        let (width, height) = dom::viewport_size(window);
        self.surface.set_size(width, height);
        self.field.resize(width, height);

        // Resizing the canvas wipes it; a stopped field needs its static frame back
        if self.reduced_motion {
            self.field.draw(&mut self.surface);
        }
    }
}

pub fn init_starfield(
    window: &Window,
    document: &Document,
    config: &StarfieldConfig,
) -> Result<(), JsValue> {
    let Some(canvas) = dom::by_id::<HtmlCanvasElement>(document, STARS_CANVAS_ID) else {
        debug!(id = STARS_CANVAS_ID, "No starfield canvas, skipping");
        return Ok(());
    };
    let Some(ctx) = canvas
        .get_context("2d")?
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        debug!("Starfield canvas has no 2d context, skipping");
        return Ok(());
    };

    let reduced_motion = dom::prefers_reduced_motion(window);
    let state = Rc::new(RefCell::new(StarfieldState {
        field: Starfield::from_entropy(config.clone()),
        surface: CanvasSurface::new(canvas, ctx),
        reduced_motion: false,
    }));
    state.borrow_mut().resize(window);

    let window_clone = window.clone();
    let state_clone = state.clone();
    let on_resize = Closure::wrap(Box::new(move |_: Event| {
        state_clone.borrow_mut().resize(&window_clone);
    }) as Box<dyn FnMut(Event)>);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    let schedule = {
        let mut s = state.borrow_mut();
        s.reduced_motion = reduced_motion;
        let StarfieldState { field, surface, .. } = &mut *s;
        field.start(surface, reduced_motion)
    };

    {
        let s = state.borrow();
        let (width, height) = s.field.size();
        info!(
            count = s.field.config().count,
            width,
            height,
            reduced_motion,
            "Starfield initialized"
        );
    }

    if schedule {
        let raf = RafLoop::start(window.clone(), move |_timestamp| {
            let mut s = state.borrow_mut();
            let StarfieldState { field, surface, .. } = &mut *s;
            field.tick(surface)
        });
        debug!(running = raf.is_running(), "Starfield loop scheduled");
        raf.forget();
    }

    Ok(())
}
