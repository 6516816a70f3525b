//! In-page anchor resolution

/// Links intercepted for smooth scrolling
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Target element id for a same-page link.
///
/// A bare `#`, an empty fragment or a non-fragment href yield `None`; the
/// click then keeps its default behavior.
pub fn resolve_anchor(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    Some(id)
}

/// What a click on a same-page link should do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    /// Prevent the default jump and smooth-scroll to this id
    ScrollTo(&'a str),
    /// Leave the click alone
    Default,
}

/// Decide the click action, given a lookup for whether an id exists
pub fn anchor_action<'a, F>(href: &'a str, exists: F) -> AnchorAction<'a>
where
    F: FnOnce(&str) -> bool,
{
    match resolve_anchor(href) {
        Some(id) if exists(id) => AnchorAction::ScrollTo(id),
        _ => AnchorAction::Default,
    }
}
