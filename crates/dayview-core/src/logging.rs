//! Logging shim.
//!
//! With the `tracing` feature enabled this module re-exports the `tracing`
//! macros. Without it, the same macro names are provided as no-ops so call
//! sites compile identically in both configurations:
//!
//! ```ignore
//! use dayview_core::{debug, debug_span};
//!
//! let _span = debug_span!("lay_out_day", events = 3).entered();
//! debug!(columns = 2, "component resolved");
//! ```

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Stand-in for `tracing::Span` when tracing is compiled out.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Mirrors `tracing::Span::entered`.
    #[inline]
    #[must_use]
    pub fn entered(self) -> Self {
        self
    }

    /// Mirrors `tracing::Span::in_scope`.
    #[inline]
    pub fn in_scope<F: FnOnce() -> T, T>(&self, f: F) -> T {
        f()
    }
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace_span {
    ($($arg:tt)*) => {
        $crate::logging::NoopSpan
    };
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug_span {
    ($($arg:tt)*) => {
        $crate::logging::NoopSpan
    };
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! info_span {
    ($($arg:tt)*) => {
        $crate::logging::NoopSpan
    };
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn_span {
    ($($arg:tt)*) => {
        $crate::logging::NoopSpan
    };
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! error_span {
    ($($arg:tt)*) => {
        $crate::logging::NoopSpan
    };
}
