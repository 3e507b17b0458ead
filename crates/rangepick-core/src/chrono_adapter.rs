#![forbid(unsafe_code)]

//! [`DateAdapter`] for `chrono::NaiveDate`.
//!
//! `NaiveDate` values are always well-formed, so validity here means "inside
//! the adapter's optional `[min, max]` bounds". Dates outside the bounds are
//! reported invalid and get filtered out by
//! [`Selection::valid_or_none`](crate::selection::Selection::valid_or_none).

use std::cmp::Ordering;
use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::adapter::{DateAdapter, DisplayAdapter};

/// Canonical serialization pattern.
pub const ISO_PATTERN: &str = "%Y-%m-%d";

/// Date adapter backed by `chrono`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChronoAdapter {
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
}

impl ChronoAdapter {
    /// Adapter accepting every date.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject dates before `min` (builder).
    #[must_use]
    pub fn with_min(mut self, min: NaiveDate) -> Self {
        self.min = Some(min);
        self
    }

    /// Reject dates after `max` (builder).
    #[must_use]
    pub fn with_max(mut self, max: NaiveDate) -> Self {
        self.max = Some(max);
        self
    }

    #[inline]
    pub fn min(&self) -> Option<NaiveDate> {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Option<NaiveDate> {
        self.max
    }
}

impl DateAdapter<NaiveDate> for ChronoAdapter {
    fn clone_date(&self, date: &NaiveDate) -> NaiveDate {
        *date
    }

    fn is_valid(&self, date: &NaiveDate) -> bool {
        self.min.is_none_or(|min| *date >= min) && self.max.is_none_or(|max| *date <= max)
    }

    fn same_date(&self, a: Option<&NaiveDate>, b: Option<&NaiveDate>) -> bool {
        a == b
    }
}

impl DisplayAdapter<NaiveDate> for ChronoAdapter {
    /// Falls back to ISO-8601 when `pattern` is not a valid `strftime` string.
    fn format(&self, date: &NaiveDate, pattern: &str) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(pattern)).is_err() {
            return date.format(ISO_PATTERN).to_string();
        }
        out
    }

    fn parse(&self, text: &str, pattern: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(text.trim(), pattern).ok()
    }

    fn deserialize(&self, text: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(text.trim(), ISO_PATTERN).ok()
    }

    fn compare(&self, a: &NaiveDate, b: &NaiveDate) -> Ordering {
        a.cmp(b)
    }
}
