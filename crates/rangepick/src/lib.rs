#![forbid(unsafe_code)]

//! rangepick public facade crate.
//!
//! This crate provides the stable surface area for users. It re-exports the
//! selection model and the range input widgets, offers a unified [`Error`],
//! and a small prelude for day-to-day usage.
//!
//! # Example
//!
//! ```rust,ignore
//! use rangepick::prelude::*;
//!
//! let (mut input, mut picker) = bind(ChronoAdapter::new(), RangeInputConfig::default())?;
//! picker.open()?;
//! picker.select(start);
//! picker.select(end);
//! input.sync_picker(&mut picker);
//! let range = checked_value(&input)?;
//! ```

pub mod error;

// --- Core re-exports -------------------------------------------------------

#[cfg(feature = "chrono")]
pub use rangepick_core::ChronoAdapter;
pub use rangepick_core::{
    CompletionPolicy, DateAdapter, DisplayAdapter, Selection, SelectionInit, SelectionMode,
    SelectionPhase,
};

// --- Widget re-exports -----------------------------------------------------

pub use rangepick_widgets::{
    ConfigError, DateRangeInput, Datepicker, Emitter, EndpointKind, FormFieldControl, PickerError,
    PickerEvent, RangeEndpoint, RangeInputConfig, RangeInputEvent, RangeValidationError,
    Subscription,
};

pub use error::{Error, Result};

// --- Binding helpers -------------------------------------------------------

/// Build a range input from `config` and a popup already registered to it.
///
/// The config is validated first; an invalid config never produces a
/// control.
pub fn bind<D: 'static, A: DisplayAdapter<D>>(
    adapter: A,
    config: RangeInputConfig,
) -> Result<(DateRangeInput<D, A>, Datepicker<D>)> {
    let problems = config.validate();
    if !problems.is_empty() {
        return Err(ConfigError::Validation(problems).into());
    }
    let input = DateRangeInput::with_config(adapter, config);
    let mut picker = Datepicker::new();
    input.attach_picker(&mut picker)?;
    tracing::debug!(target: "rangepick", id = %input.id(), "range input bound");
    Ok((input, picker))
}

/// The control's value, or every validation problem with it.
pub fn checked_value<D: 'static, A: DisplayAdapter<D>>(
    input: &DateRangeInput<D, A>,
) -> Result<Option<&Selection<D>>> {
    let errors = input.validate();
    if errors.is_empty() {
        Ok(input.value())
    } else {
        Err(Error::Invalid(errors))
    }
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    #[cfg(feature = "chrono")]
    pub use crate::ChronoAdapter;
    pub use crate::{
        DateAdapter, DateRangeInput, Datepicker, DisplayAdapter, EndpointKind, Error,
        FormFieldControl, RangeInputConfig, RangeInputEvent, Result, Selection, SelectionPhase,
        bind, checked_value,
    };

    pub use crate::{core, widgets};
}

pub use rangepick_core as core;
pub use rangepick_widgets as widgets;
