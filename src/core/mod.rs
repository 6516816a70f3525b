//! Platform-agnostic core module - shared between the browser build and CLI

pub mod anchor;
pub mod config;
pub mod parallax;
pub mod reveal;
pub mod starfield;
pub mod surface;
pub mod text;

pub use anchor::{anchor_action, resolve_anchor, AnchorAction, ANCHOR_SELECTOR};
pub use config::{FxConfig, Rgb, StarfieldConfig, TypingConfig, Variant};
pub use parallax::{parallax, ParallaxStyle};
pub use reveal::{RevealTracker, ANIMATE_CLASS, REVEAL_SELECTOR, REVEAL_THRESHOLD, VISIBLE_CLASS};
pub use starfield::{Particle, Starfield};
pub use surface::{DrawSurface, RecordingSurface, Rgba};
pub use text::{replace_year, Typewriter};
