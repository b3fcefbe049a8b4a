//! Half-open time spans.

use serde::{Deserialize, Serialize};

/// A coordinate on the shared day axis (minutes from day start, pixel rows,
/// or any other monotone unit the caller picks).
pub type Time = i64;

/// A half-open span `[start, end)` on the day axis.
///
/// Unlike a validated interval type, a `TimeSpan` accepts any pair of
/// coordinates: spans with `start >= end` are representable so that
/// degenerate events flow through layout with defined (if odd) geometry.
/// Use [`is_well_formed`](Self::is_well_formed) to detect them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimeSpan {
    /// Start (inclusive).
    pub start: Time,
    /// End (exclusive).
    pub end: Time,
}

impl TimeSpan {
    /// Create a new span.
    #[inline]
    pub const fn new(start: Time, end: Time) -> Self {
        Self { start, end }
    }

    /// `end - start`. Negative for inverted spans.
    #[inline]
    pub const fn duration(&self) -> Time {
        self.end.saturating_sub(self.start)
    }

    /// Whether `start < end`.
    #[inline]
    pub const fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    /// Proper overlap: `self.start < other.end && self.end > other.start`.
    ///
    /// Symmetric. Spans that merely touch (`a.end == b.start`) do not overlap.
    #[inline]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }
}
