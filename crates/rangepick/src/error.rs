#![forbid(unsafe_code)]

//! Unified error type for rangepick applications.
//!
//! Each subsystem keeps its own typed error so callers can match on what
//! matters. [`Error`] wraps them for code that just wants `?` to work across
//! configuration loading, popup binding and value checks.

use std::fmt;

use rangepick_widgets::{ConfigError, PickerError, RangeValidationError};

/// Top-level error type for rangepick APIs.
#[derive(Debug)]
pub enum Error {
    /// Configuration could not be loaded or failed validation.
    Config(ConfigError),
    /// Popup binding or opening failed.
    Picker(PickerError),
    /// The control's current value is not acceptable.
    Invalid(Vec<RangeValidationError>),
}

/// Standard result type for rangepick APIs.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the error is about user input rather than setup.
    ///
    /// Hosts typically surface these next to the field instead of failing.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Picker(e) => write!(f, "picker: {e}"),
            Self::Invalid(errors) => {
                f.write_str("invalid range: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{err}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Picker(e) => Some(e),
            Self::Invalid(errors) => errors
                .first()
                .map(|e| e as &(dyn std::error::Error + 'static)),
        }
    }
}

// ── Conversions ─────────────────────────────────────────────────────────

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<PickerError> for Error {
    fn from(e: PickerError) -> Self {
        Self::Picker(e)
    }
}

impl From<Vec<RangeValidationError>> for Error {
    fn from(errors: Vec<RangeValidationError>) -> Self {
        Self::Invalid(errors)
    }
}
