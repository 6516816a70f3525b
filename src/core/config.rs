//! Page configuration
//!
//! Fixed for the lifetime of a page. The browser reads it once from an
//! optional `<script type="application/json" id="fx-config">` element,
//! the CLI from the `FX_CONFIG` env var. Missing fields use the defaults.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Which set of effects a page enables
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Reveal, smooth scroll and copyright only
    Basic,
    /// Basic plus header parallax and typing effect
    Scifi,
    /// Sci-fi plus the animated starfield canvas
    #[default]
    Starfield,
}

impl Variant {
    pub fn parallax(self) -> bool {
        matches!(self, Variant::Scifi | Variant::Starfield)
    }

    pub fn typing(self) -> bool {
        matches!(self, Variant::Scifi | Variant::Starfield)
    }

    pub fn starfield(self) -> bool {
        matches!(self, Variant::Starfield)
    }
}

/// Plain RGB color, alpha is supplied per draw call
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Starfield animator constants
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Number of particles regenerated on every resize
    pub count: usize,
    pub color: Rgb,
    pub min_size: f64,
    pub max_size: f64,
    /// Drift speed is drawn from `[0.1, 0.1 + speed]`
    pub speed: f64,
    /// Particles with a larger radius get a halo
    pub glow_threshold: f64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 150,
            color: Rgb::WHITE,
            min_size: 0.5,
            max_size: 2.0,
            speed: 0.3,
            glow_threshold: 1.5,
        }
    }
}

/// Typing effect timings (milliseconds)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub start_delay_ms: u32,
    pub char_delay_ms: u32,
    pub cursor_linger_ms: u32,
    pub cursor_style: String,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 500,
            char_delay_ms: 50,
            cursor_linger_ms: 1000,
            cursor_style: "2px solid var(--accent-primary)".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    pub variant: Variant,
    pub starfield: StarfieldConfig,
    /// Header translation per scrolled pixel
    pub parallax_factor: f64,
    pub typing: TypingConfig,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            starfield: StarfieldConfig::default(),
            parallax_factor: 0.5,
            typing: TypingConfig::default(),
        }
    }
}

impl FxConfig {
    /// Parse a JSON config, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Invalid fx config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FxConfig::default();
        assert_eq!(config.variant, Variant::Starfield);
        assert_eq!(config.starfield.count, 150);
        assert_eq!(config.starfield.glow_threshold, 1.5);
        assert_eq!(config.typing.char_delay_ms, 50);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = FxConfig::from_json_or_default(
            r#"{"variant": "basic", "starfield": {"count": 20}}"#,
        );
        assert_eq!(config.variant, Variant::Basic);
        assert_eq!(config.starfield.count, 20);
        assert_eq!(config.starfield.max_size, 2.0);
        assert_eq!(config.parallax_factor, 0.5);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        let config = FxConfig::from_json_or_default("{not json");
        assert_eq!(config, FxConfig::default());
    }

    #[test]
    fn variant_feature_matrix() {
        assert!(!Variant::Basic.parallax());
        assert!(!Variant::Basic.typing());
        assert!(!Variant::Basic.starfield());

        assert!(Variant::Scifi.parallax());
        assert!(Variant::Scifi.typing());
        assert!(!Variant::Scifi.starfield());

        assert!(Variant::Starfield.starfield());
    }
}
