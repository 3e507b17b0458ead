#![forbid(unsafe_code)]

//! Range input widgets for rangepick.
//!
//! # Role in rangepick
//! This crate is the glue around the core selection model. It binds a
//! [`Selection`](rangepick_core::Selection) to two endpoint fields and a
//! picker popup, and presents the pair to a host form field through
//! [`FormFieldControl`].
//!
//! # Primary responsibilities
//! - **DateRangeInput**: forwards picks into the selection and writes the
//!   result back into both fields.
//! - **RangeEndpoint**: one bound field with text, focus and validity.
//! - **Datepicker**: popup registration, open state and the pick queue.
//! - **Emitter**: synchronous change notification with RAII subscriptions.
//! - **RangeInputConfig**: settings, optionally loaded from TOML/JSON.

pub mod config;
pub mod control;
pub mod emitter;
pub mod endpoint;
pub mod popup;
pub mod range;
pub mod validation;

pub use config::{ConfigError, RangeInputConfig};
pub use control::FormFieldControl;
pub use emitter::{Emitter, StateChanges, Subscription};
pub use endpoint::{EndpointKind, RangeEndpoint};
pub use popup::{Datepicker, PickerError, PickerEvent};
pub use range::{DateRangeInput, RangeInputEvent};
pub use validation::RangeValidationError;
