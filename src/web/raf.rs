//! `requestAnimationFrame` loop
//!
//! The callback runs once per display refresh and returns whether the loop
//! should continue. Returning `false` ends the loop without scheduling
//! another frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

type RafClosure = Closure<dyn FnMut(f64)>;

/// Handle to a running loop. Dropping it cancels the loop; use
/// [`forget`](Self::forget) to keep it for the page's lifetime.
pub struct RafLoop {
    inner: Rc<RafInner>,
}

struct RafInner {
    window: Window,
    /// Registered with `requestAnimationFrame`; refers to itself through `inner`
    closure: RefCell<Option<RafClosure>>,
    callback: RefCell<Box<dyn FnMut(f64) -> bool>>,
    running: Cell<bool>,
    raf_id: Cell<i32>,
}

impl RafInner {
    fn request_frame(&self) {
        if let Some(ref closure) = *self.closure.borrow() {
            match self
                .window
                .request_animation_frame(closure.as_ref().unchecked_ref())
            {
                Ok(id) => self.raf_id.set(id),
                Err(e) => {
                    error!(?e, "requestAnimationFrame failed");
                    self.running.set(false);
                }
            }
        }
    }
}

impl RafLoop {
    /// Start calling `callback` with the frame timestamp (ms)
    pub fn start<F>(window: Window, callback: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let inner = Rc::new(RafInner {
            window,
            closure: RefCell::new(None),
            callback: RefCell::new(Box::new(callback)),
            running: Cell::new(true),
            raf_id: Cell::new(0),
        });

        let weak = Rc::downgrade(&inner);
        let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if !inner.running.get() {
                return;
            }

            let keep_going = (inner.callback.borrow_mut())(timestamp_ms);
            if !keep_going {
                debug!("Animation loop finished");
                inner.running.set(false);
                return;
            }
            inner.request_frame();
        }) as Box<dyn FnMut(f64)>);

        *inner.closure.borrow_mut() = Some(closure);
        inner.request_frame();

        Self { inner }
    }

    /// Cancel the pending frame and end the loop
    pub fn stop(&self) {
        if !self.inner.running.replace(false) {
            return;
        }
        if let Err(e) = self
            .inner
            .window
            .cancel_animation_frame(self.inner.raf_id.get())
        {
            error!(?e, "cancelAnimationFrame failed");
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    /// Keep the loop alive for the rest of the page's lifetime
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.stop();
        self.inner.closure.borrow_mut().take();
    }
}
