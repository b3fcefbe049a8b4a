//! Column geometry.
//!
//! Every event in a collision group gets an equal share of the configured
//! total width; its left edge is its column times that share, plus margin.
//! Arithmetic saturates, so absurd column counts yield zero-width boxes
//! instead of overflow.

use dayview_core::Time;
use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;

/// Horizontal placement of one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ColumnGeometry {
    pub left: u32,
    pub width: u32,
}

/// Rectangle handed to renderers: horizontal placement from layout, vertical
/// extent straight from the event's time coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EventBox {
    /// Left edge (inclusive).
    pub left: u32,
    /// Top edge, equal to the event start.
    pub top: Time,
    /// Width in layout units.
    pub width: u32,
    /// Height, equal to the event duration.
    pub height: Time,
}

impl EventBox {
    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u32 {
        self.left.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> Time {
        self.top.saturating_add(self.height)
    }

    /// Check if the box has no visible area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height <= 0
    }
}

/// `floor(total_width / columns)`, with `columns` floored at 1.
#[inline]
pub fn column_width(total_width: u32, columns: usize) -> u32 {
    let columns = u32::try_from(columns.max(1)).unwrap_or(u32::MAX);
    total_width / columns
}

/// `column * width + margin`, saturating.
#[inline]
pub fn column_left(column: usize, width: u32, margin: u32) -> u32 {
    let column = u32::try_from(column).unwrap_or(u32::MAX);
    column.saturating_mul(width).saturating_add(margin)
}

impl LayoutConfig {
    /// Geometry of `column` in a group of `columns`.
    #[must_use]
    pub fn geometry(&self, column: usize, columns: usize) -> ColumnGeometry {
        let width = column_width(self.total_width, columns);
        ColumnGeometry {
            left: column_left(column, width, self.margin),
            width,
        }
    }
}
