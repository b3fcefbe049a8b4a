//! The day layout engine.
//!
//! # Algorithm
//!
//! Layout runs four passes over a batch of events:
//!
//! 1. **Initialize.** Every event gets `column = 0`, `columns = 1`, an empty
//!    collision set, full width and the margin as its left edge.
//! 2. **Sort.** Events are stably sorted longest first, so long "anchor"
//!    events claim low columns before the shorter events nested in them.
//! 3. **Resolve columns.** For each position, scan the already-sorted
//!    events from the front, stopping at the first event with the same id.
//!    Every scanned event that overlaps the current one is linked in both
//!    collision sets and proposes `resolve(candidate) + 1`. Under
//!    [`ColumnRule::LastCollision`] the last proposal wins; under
//!    [`ColumnRule::Highest`] the largest does. A resolved column above 1
//!    is reset to 0 when the event has fewer than two collisions at that
//!    point (a lone pairwise overlap never needs a third band).
//! 4. **Size.** One left-to-right pass computes each event's column count
//!    as the largest `partner.column + 1` (floored at its current count) and
//!    writes it into every partner. Widths and left edges are then derived
//!    from the final counts. The pass is not repeated, so a later event can
//!    lower the count of partners it shares with an earlier, wider event;
//!    a component may end with mixed counts, but `column < columns` always
//!    holds.
//!
//! # Complexity
//!
//! `resolve` is recursive, but results are memoized per call: by the time
//! position `p` is resolved, every candidate before it already is, so each
//! scan is linear and the whole layout is O(n²) in the event count.
//!
//! # Failure Modes
//!
//! None. Events with `start >= end` or duplicate ids are laid out like any
//! other; their geometry is deterministic but may look odd.

use dayview_core::{Event, compare_by_duration_desc, debug, debug_span, trace};

use crate::collision::{CollisionSet, link};
use crate::config::{ColumnRule, LayoutConfig};
use crate::layout::{DayLayout, PositionedEvent};

/// Lay out a day with the default configuration.
///
/// Equivalent to `DayLayoutEngine::default().lay_out(events)`.
pub fn lay_out_day<I: PartialEq>(events: Vec<Event<I>>) -> DayLayout<I> {
    DayLayoutEngine::default().lay_out(events)
}

/// Column layout solver for one day of events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayLayoutEngine {
    config: LayoutConfig,
}

impl DayLayoutEngine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub const fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out `events`, returning them annotated in layout order.
    pub fn lay_out<I: PartialEq>(&self, events: Vec<Event<I>>) -> DayLayout<I> {
        let _span = debug_span!("lay_out_day", events = events.len()).entered();

        let mut positioned: Vec<PositionedEvent<I>> = events
            .into_iter()
            .map(|event| PositionedEvent::unresolved(event, &self.config))
            .collect();
        positioned.sort_by(|a, b| compare_by_duration_desc(&a.event, &b.event));

        self.resolve_columns(&mut positioned);
        self.size_columns(&mut positioned);

        debug!(
            events = positioned.len(),
            max_columns = positioned.iter().map(|e| e.columns).max().unwrap_or(0),
            "day laid out"
        );
        DayLayout::from_positioned(positioned)
    }

    /// Pass 3: column resolution and degenerate-pair collapse.
    fn resolve_columns<I: PartialEq>(&self, positioned: &mut [PositionedEvent<I>]) {
        let mut resolver = ColumnResolver::new(positioned, self.config.column_rule);

        let mut columns = Vec::with_capacity(positioned.len());
        for position in 0..positioned.len() {
            let mut column = resolver.resolve(position);
            let collisions = resolver.collisions[position].len();
            if column > 1 && collisions < 2 {
                debug!(position, column, collisions, "degenerate pair collapsed");
                column = 0;
            }
            trace!(position, column, "column resolved");
            columns.push(column);
        }

        let collisions = resolver.into_collisions();
        for ((event, column), set) in positioned.iter_mut().zip(columns).zip(collisions) {
            event.column = column;
            event.collisions = set;
        }
    }

    /// Pass 4: shared column counts, then widths and left edges.
    fn size_columns<I>(&self, positioned: &mut [PositionedEvent<I>]) {
        for position in 0..positioned.len() {
            let partners = std::mem::take(&mut positioned[position].collisions);

            let columns = partners
                .iter()
                .map(|partner| positioned[partner].column + 1)
                .fold(positioned[position].columns.max(1), usize::max);

            positioned[position].columns = columns;
            for partner in &partners {
                positioned[partner].columns = columns;
            }
            positioned[position].collisions = partners;
        }

        for event in positioned.iter_mut() {
            let geometry = self.config.geometry(event.column, event.columns);
            event.left = geometry.left;
            event.width = geometry.width;
        }
    }
}

/// Recursive leftward collision search over the duration-sorted sequence.
///
/// Owns the collision sets while columns are being resolved; the sequence
/// itself is only read.
struct ColumnResolver<'a, I> {
    events: &'a [PositionedEvent<I>],
    rule: ColumnRule,
    collisions: Vec<CollisionSet>,
    /// Raw (pre-collapse) column per position, filled on first resolve.
    resolved: Vec<Option<usize>>,
}

impl<'a, I: PartialEq> ColumnResolver<'a, I> {
    fn new(events: &'a [PositionedEvent<I>], rule: ColumnRule) -> Self {
        Self {
            events,
            rule,
            collisions: vec![CollisionSet::new(); events.len()],
            resolved: vec![None; events.len()],
        }
    }

    /// Column proposed for the event at `position` by its predecessors.
    fn resolve(&mut self, position: usize) -> usize {
        if let Some(column) = self.resolved[position] {
            return column;
        }

        let events = self.events;
        let current = &events[position].event;
        let mut column = 0;

        for (candidate, other) in events.iter().enumerate() {
            if other.event.id == current.id {
                break;
            }
            if !other.event.collides_with(current) {
                continue;
            }
            link(&mut self.collisions, position, candidate);
            let proposed = self.resolve(candidate) + 1;
            column = match self.rule {
                ColumnRule::LastCollision => proposed,
                ColumnRule::Highest => column.max(proposed),
            };
        }

        self.resolved[position] = Some(column);
        column
    }

    fn into_collisions(self) -> Vec<CollisionSet> {
        self.collisions
    }
}
