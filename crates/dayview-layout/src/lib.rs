#![forbid(unsafe_code)]

//! Column layout for overlapping day events.
//!
//! Given a day's events, [`lay_out_day`] assigns each one a column and a
//! shared column count so that overlapping events sit side by side instead
//! of on top of each other, then derives a left edge and width from a
//! configurable total width.
//!
//! # Usage
//!
//! ```
//! use dayview_core::Event;
//! use dayview_layout::lay_out_day;
//!
//! let layout = lay_out_day(vec![
//!     Event::new("standup", 0, 60),
//!     Event::new("sync", 0, 60),
//! ]);
//!
//! let widths: Vec<u32> = layout.iter().map(|e| e.width).collect();
//! assert_eq!(widths, vec![300, 300]);
//! assert_eq!(layout[1].left, 310);
//! ```
//!
//! # Invariants
//!
//! 1. Collision sets are symmetric and only contain properly overlapping
//!    events (touching events do not collide).
//! 2. An event without collisions has `column = 0` and `columns = 1`.
//! 3. An event with fewer than two collisions never ends in a column above 1.
//! 4. `width == total_width / columns` (floored) for every event.
//! 5. Layout is deterministic: equal input yields equal output.
//!
//! # Failure Modes
//!
//! None. Layout is infallible; only configuration loading can fail.

pub mod collision;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod layout;

pub use collision::{CollisionSet, register_collision};
pub use config::{
    ColumnRule, DEFAULT_MARGIN, DEFAULT_TOTAL_WIDTH, LayoutConfig, LayoutConfigError,
};
pub use engine::{DayLayoutEngine, lay_out_day};
pub use geometry::{ColumnGeometry, EventBox, column_left, column_width};
pub use layout::{DayLayout, PositionedEvent};

pub use dayview_core::{Event, Time, TimeSpan};
