#![forbid(unsafe_code)]

//! Core: the date selection model and the date adapter capabilities it needs.
//!
//! # Role in rangepick
//! `rangepick-core` owns the [`Selection`](selection::Selection) state machine
//! that folds successive date picks into either a single date or a
//! start/end range. It performs no I/O, holds no UI state and knows nothing
//! about the concrete date type: every date operation goes through a
//! [`DateAdapter`](adapter::DateAdapter) supplied by the caller.
//!
//! # How it fits in the system
//! `rangepick-widgets` wraps a `Selection` in a range controller that binds
//! two endpoint fields and a picker popup. The controller forwards picks into
//! [`Selection::set_next`](selection::Selection::set_next) and re-reads
//! `start`/`end` after every call; the model itself emits no notifications.

pub mod adapter;
#[cfg(feature = "chrono")]
pub mod chrono_adapter;
pub mod logging;
pub mod selection;

pub use adapter::{DateAdapter, DisplayAdapter};
#[cfg(feature = "chrono")]
pub use chrono_adapter::ChronoAdapter;
pub use selection::{CompletionPolicy, Selection, SelectionInit, SelectionMode, SelectionPhase};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, trace_span, warn};
