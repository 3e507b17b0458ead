#![forbid(unsafe_code)]

//! Validation results for range inputs.

use crate::endpoint::EndpointKind;

/// A reason a range input's value is not acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeValidationError {
    /// The control is required and both endpoints are empty.
    Required,
    /// The endpoint's text is not a valid date.
    InvalidDate(EndpointKind),
    /// Both endpoints are set and the end precedes the start.
    EndBeforeStart,
}

impl std::fmt::Display for RangeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "a date range is required"),
            Self::InvalidDate(kind) => write!(f, "{} date is not a valid date", kind.as_str()),
            Self::EndBeforeStart => write!(f, "end date is before start date"),
        }
    }
}

impl std::error::Error for RangeValidationError {}
