//! Day events.

use serde::{Deserialize, Serialize};

use crate::span::{Time, TimeSpan};

/// A single event on the day axis.
///
/// `id` is opaque: layout only ever compares ids for equality, so any
/// `PartialEq` type works (strings, integers, UUIDs, handles).
///
/// Events are expected to satisfy `start < end`. Layout does not reject
/// events that break this; see [`TimeSpan`] for how they behave.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event<I> {
    pub id: I,
    pub start: Time,
    pub end: Time,
}

impl<I> Event<I> {
    /// Create a new event.
    #[inline]
    pub const fn new(id: I, start: Time, end: Time) -> Self {
        Self { id, start, end }
    }

    /// The event's interval.
    #[inline]
    pub const fn span(&self) -> TimeSpan {
        TimeSpan::new(self.start, self.end)
    }

    /// `end - start`.
    #[inline]
    pub const fn duration(&self) -> Time {
        self.span().duration()
    }

    /// Whether the two events' intervals properly overlap.
    ///
    /// Ids are ignored; two events with the same id still collide if their
    /// intervals do.
    #[inline]
    pub fn collides_with<J>(&self, other: &Event<J>) -> bool {
        self.span().overlaps(&other.span())
    }
}
