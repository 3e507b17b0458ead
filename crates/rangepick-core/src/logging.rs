#![forbid(unsafe_code)]

//! Structured logging hooks.
//!
//! With the `tracing` feature enabled this module re-exports the `tracing`
//! macros used across rangepick, so downstream crates can log through
//! `rangepick_core::logging` without naming `tracing` themselves. Without the
//! feature nothing is exported and call sites are compiled out with
//! `#[cfg(feature = "tracing")]`.
//!
//! All events emitted by this crate use targets under `rangepick::`.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, trace, trace_span, warn};

/// Target used by selection transition events.
pub const SELECTION_TARGET: &str = "rangepick::selection";
