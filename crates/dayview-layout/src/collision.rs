//! Collision bookkeeping.
//!
//! A [`CollisionSet`] holds the positions (in layout order) of every event a
//! given event was found to overlap. Positions are kept sorted so the set
//! serializes deterministically and membership is a binary search.

use serde::{Deserialize, Serialize};

/// Sorted, duplicate-free set of layout positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<usize>", into = "Vec<usize>")]
pub struct CollisionSet {
    positions: Vec<usize>,
}

impl CollisionSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
        }
    }

    /// Insert a position. Returns `false` if it was already present.
    pub fn insert(&mut self, position: usize) -> bool {
        match self.positions.binary_search(&position) {
            Ok(_) => false,
            Err(slot) => {
                self.positions.insert(slot, position);
                true
            }
        }
    }

    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        self.positions.binary_search(&position).is_ok()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions in ascending order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.positions.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.positions
    }
}

impl<'a> IntoIterator for &'a CollisionSet {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter().copied()
    }
}

impl FromIterator<usize> for CollisionSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut set = Self::new();
        for position in iter {
            set.insert(position);
        }
        set
    }
}

impl From<Vec<usize>> for CollisionSet {
    fn from(positions: Vec<usize>) -> Self {
        positions.into_iter().collect()
    }
}

impl From<CollisionSet> for Vec<usize> {
    fn from(set: CollisionSet) -> Self {
        set.positions
    }
}

/// Record that the owner of `set` collides with the event at `position`.
///
/// Idempotent: registering the same position twice leaves the set unchanged
/// and returns `false`.
pub fn register_collision(set: &mut CollisionSet, position: usize) -> bool {
    set.insert(position)
}

/// Register a collision in both directions between positions `a` and `b`.
pub(crate) fn link(sets: &mut [CollisionSet], a: usize, b: usize) {
    register_collision(&mut sets[a], b);
    register_collision(&mut sets[b], a);
}
