//! Header parallax maths

/// Style to apply to the header for a given scroll offset
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxStyle {
    /// Vertical translation in CSS pixels
    pub translate_y: f64,
    /// Header opacity in [0, 1]
    pub opacity: f64,
}

impl ParallaxStyle {
    pub fn transform_css(&self) -> String {
        format!("translateY({}px)", self.translate_y)
    }

    pub fn opacity_css(&self) -> String {
        format!("{}", self.opacity)
    }
}

/// Compute the header style for `scroll_y`.
///
/// Returns `None` once the header has scrolled fully out of view (or has
/// no height), in which case the last written style is left alone.
pub fn parallax(scroll_y: f64, header_height: f64, factor: f64) -> Option<ParallaxStyle> {
    if header_height <= 0.0 || scroll_y > header_height {
        return None;
    }
    let scroll_y = scroll_y.max(0.0);
    Some(ParallaxStyle {
        translate_y: scroll_y * factor,
        opacity: (1.0 - scroll_y / header_height).clamp(0.0, 1.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_top() {
        let style = parallax(0.0, 400.0, 0.5).unwrap();
        assert_eq!(style.translate_y, 0.0);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.transform_css(), "translateY(0px)");
    }

    #[test]
    fn test_half_way() {
        let style = parallax(200.0, 400.0, 0.5).unwrap();
        assert_eq!(style.translate_y, 100.0);
        assert_eq!(style.opacity, 0.5);
        assert_eq!(style.opacity_css(), "0.5");
    }

    #[test]
    fn test_past_header() {
        assert_eq!(parallax(401.0, 400.0, 0.5), None);
        assert_eq!(parallax(10.0, 0.0, 0.5), None);
    }

    #[test]
    fn test_overscroll_is_treated_as_top() {
        // Elastic scrolling can report negative offsets
        let style = parallax(-30.0, 400.0, 0.5).unwrap();
        assert_eq!(style.translate_y, 0.0);
        assert_eq!(style.opacity, 1.0);
    }
}
