//! Laid-out events.
//!
//! [`DayLayout`] is the engine's output: the input events in layout order
//! (longest first), each wrapped in a [`PositionedEvent`] carrying its column
//! assignment and geometry. Collision sets hold positions in this same
//! order, so they stay valid only as long as the layout is not reordered;
//! [`DayLayout::by_start`] and [`DayLayout::positions_by_start`] therefore
//! return views rather than resorting.

use std::collections::VecDeque;
use std::hash::Hash;

use dayview_core::{Event, Time, compare_by_start};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::collision::CollisionSet;
use crate::config::LayoutConfig;
use crate::geometry::EventBox;

/// An event plus its layout annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionedEvent<I> {
    #[serde(flatten)]
    pub event: Event<I>,
    /// Equal to `event.start`.
    pub top: Time,
    /// `event.end - event.start`.
    pub duration: Time,
    /// Column index within the event's collision group.
    pub column: usize,
    /// Number of columns shared by the collision group.
    pub columns: usize,
    /// Layout positions of the events this one overlaps.
    pub collisions: CollisionSet,
    pub left: u32,
    pub width: u32,
}

impl<I> PositionedEvent<I> {
    /// The annotation every event starts from before collisions are resolved.
    pub(crate) fn unresolved(event: Event<I>, config: &LayoutConfig) -> Self {
        Self {
            top: event.start,
            duration: event.duration(),
            column: 0,
            columns: 1,
            collisions: CollisionSet::new(),
            left: config.margin,
            width: config.total_width,
            event,
        }
    }

    #[inline]
    pub fn id(&self) -> &I {
        &self.event.id
    }

    /// Whether no other event overlaps this one.
    #[inline]
    pub fn is_isolated(&self) -> bool {
        self.collisions.is_empty()
    }

    /// Rectangle for renderers.
    #[must_use]
    pub fn bounds(&self) -> EventBox {
        EventBox {
            left: self.left,
            top: self.top,
            width: self.width,
            height: self.duration,
        }
    }
}

/// Result of laying out one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayLayout<I> {
    events: Vec<PositionedEvent<I>>,
}

impl<I> DayLayout<I> {
    pub(crate) fn from_positioned(events: Vec<PositionedEvent<I>>) -> Self {
        Self { events }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events in layout order.
    pub fn iter(&self) -> std::slice::Iter<'_, PositionedEvent<I>> {
        self.events.iter()
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&PositionedEvent<I>> {
        self.events.get(position)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[PositionedEvent<I>] {
        &self.events
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<PositionedEvent<I>> {
        self.events
    }

    /// Layout positions ordered by start time. Ties keep layout order.
    #[must_use]
    pub fn positions_by_start(&self) -> Vec<usize> {
        let mut positions: Vec<usize> = (0..self.events.len()).collect();
        positions.sort_by(|&a, &b| compare_by_start(&self.events[a].event, &self.events[b].event));
        positions
    }

    /// Events ordered by start time. Ties keep layout order.
    #[must_use]
    pub fn by_start(&self) -> Vec<&PositionedEvent<I>> {
        self.positions_by_start()
            .into_iter()
            .map(|position| &self.events[position])
            .collect()
    }

    /// Ids of the events colliding with the one at `position`.
    pub fn collision_ids(&self, position: usize) -> impl Iterator<Item = &I> + '_ {
        self.events
            .get(position)
            .into_iter()
            .flat_map(|positioned| positioned.collisions.iter())
            .filter_map(|other| self.events.get(other).map(PositionedEvent::id))
    }

    /// Widest collision group, or 0 for an empty day.
    #[must_use]
    pub fn max_columns(&self) -> usize {
        self.events.iter().map(|e| e.columns).max().unwrap_or(0)
    }

    /// Connected collision components as sorted position lists, ordered by
    /// their smallest member.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.events.len()];
        let mut components = Vec::new();
        let mut queue = VecDeque::new();

        for root in 0..self.events.len() {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            queue.push_back(root);

            let mut members = Vec::new();
            while let Some(current) = queue.pop_front() {
                members.push(current);
                for next in &self.events[current].collisions {
                    if next < visited.len() && !visited[next] {
                        visited[next] = true;
                        queue.push_back(next);
                    }
                }
            }
            members.sort_unstable();
            components.push(members);
        }

        components
    }
}

impl<I: PartialEq> DayLayout<I> {
    /// First event with the given id.
    #[must_use]
    pub fn find(&self, id: &I) -> Option<&PositionedEvent<I>> {
        self.events.iter().find(|e| e.id() == id)
    }
}

impl<I: Hash + Eq> DayLayout<I> {
    /// Map from id to layout position. With duplicate ids the first
    /// position wins, matching [`find`](Self::find).
    #[must_use]
    pub fn index_by_id(&self) -> FxHashMap<&I, usize> {
        let mut index = FxHashMap::default();
        index.reserve(self.events.len());
        for (position, positioned) in self.events.iter().enumerate() {
            index.entry(positioned.id()).or_insert(position);
        }
        index
    }
}

impl<I> IntoIterator for DayLayout<I> {
    type Item = PositionedEvent<I>;
    type IntoIter = std::vec::IntoIter<PositionedEvent<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a, I> IntoIterator for &'a DayLayout<I> {
    type Item = &'a PositionedEvent<I>;
    type IntoIter = std::slice::Iter<'a, PositionedEvent<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl<I> std::ops::Index<usize> for DayLayout<I> {
    type Output = PositionedEvent<I>;

    fn index(&self, position: usize) -> &Self::Output {
        &self.events[position]
    }
}
