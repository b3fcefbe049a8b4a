#![forbid(unsafe_code)]

//! Core: event model, time spans, and ordering helpers.
//!
//! # Role in Dayview
//! `dayview-core` is the input layer. It owns the [`Event`] type that callers
//! hand to the layout engine, the half-open [`TimeSpan`] used for collision
//! tests, and the small comparison helpers shared by the engine and by
//! renderers that need a stable presentation order.
//!
//! # How it fits in the system
//! `dayview-layout` consumes `Event` values and produces positioned events.
//! Nothing in this crate knows about columns or pixels, so it can be reused
//! by any collaborator that only needs interval geometry.

pub mod event;
pub mod logging;
pub mod order;
pub mod span;

pub use event::Event;
pub use order::{compare_by_duration_desc, compare_by_start, earlier_of, later_of};
pub use span::{Time, TimeSpan};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
