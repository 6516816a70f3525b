//! One-shot scroll reveal bookkeeping
//!
//! Elements are tracked by index. The first intersecting notification for
//! an element reveals it and drops it from the pending set for good.

use std::collections::BTreeSet;
use tracing::trace;

/// Elements that take part in the reveal animation
pub const REVEAL_SELECTOR: &str = ".section-title, .about-content, .project-card, .skills-container";

/// Base class applied to every reveal target up front
pub const ANIMATE_CLASS: &str = "animate-on-scroll";

/// Class applied once an element has been revealed
pub const VISIBLE_CLASS: &str = "visible";

/// Fraction of an element that must be visible to count as intersecting
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Tracks which elements are still waiting to be revealed
#[derive(Debug, Default)]
pub struct RevealTracker {
    pending: BTreeSet<usize>,
}

impl RevealTracker {
    /// Track elements `0..count`
    pub fn new(count: usize) -> Self {
        Self {
            pending: (0..count).collect(),
        }
    }

    /// Process a batch of `(index, is_intersecting)` notifications.
    ///
    /// Returns the indices to reveal now, each at most once over the
    /// tracker's lifetime.
    pub fn on_entries<I>(&mut self, entries: I) -> Vec<usize>
    where
        I: IntoIterator<Item = (usize, bool)>,
    {
        let revealed: Vec<usize> = entries
            .into_iter()
            .filter(|&(_, intersecting)| intersecting)
            .filter_map(|(idx, _)| self.pending.remove(&idx).then_some(idx))
            .collect();

        if !revealed.is_empty() {
            trace!(?revealed, pending = self.pending.len(), "Elements revealed");
        }
        revealed
    }

    #[cfg(test)]
    pub fn is_pending(&self, idx: usize) -> bool {
        self.pending.contains(&idx)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
