//! Drawing surface abstraction
//!
//! The starfield only needs a clear and a filled circle. The browser backs
//! this with a 2D canvas context; tests and the CLI record the calls.

use super::config::Rgb;

/// Fill color with a floating point alpha
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Rgba {
    pub fn new(rgb: Rgb, alpha: f64) -> Self {
        Self { rgb, alpha }
    }

    /// CSS `rgba()` string, usable as a canvas fill style
    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.alpha
        )
    }
}

/// 2D raster target for particle rendering
pub trait DrawSurface {
    /// Clear the whole `width` x `height` region
    fn clear(&mut self, width: f64, height: f64);

    /// Fill a circle centred on (`x`, `y`)
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba);
}

/// A single recorded circle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgba,
}

/// Surface that records draw calls instead of rasterizing them
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Number of `clear` calls, one per rendered frame
    pub frames: usize,
    /// Circles drawn since the last clear
    pub circles: Vec<Circle>,
    /// Circles drawn over the surface's lifetime
    pub total_circles: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, _width: f64, _height: f64) {
        self.frames += 1;
        self.circles.clear();
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.total_circles += 1;
        self.circles.push(Circle { x, y, radius, color });
    }
}
