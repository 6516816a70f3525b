//! `DrawSurface` backed by a 2D canvas context

use std::f64::consts::TAU;

use tracing::trace;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::core::{DrawSurface, Rgba};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    /// Resize the backing pixel buffer (this also clears it)
    pub fn set_size(&self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(x, y, radius, 0.0, TAU) {
            trace!(?e, radius, "Skipping circle");
            return;
        }
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }
}
