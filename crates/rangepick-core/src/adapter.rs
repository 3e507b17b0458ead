#![forbid(unsafe_code)]

//! Date adapter capabilities.
//!
//! The selection model is generic over the date representation `D`. It never
//! inspects a date directly; it asks a [`DateAdapter`] to duplicate, validate
//! and compare dates. Controllers that render dates as text additionally need
//! a [`DisplayAdapter`].
//!
//! # Contract
//!
//! | Method | Must hold |
//! |--------|-----------|
//! | `clone_date(d)` | result is date-equal to `d` and shares no mutable identity with it |
//! | `same_date(None, None)` | `true` |
//! | `same_date(Some(_), None)` | `false` (and symmetrically) |
//! | `is_date_instance(None)` | `false` |

use std::cmp::Ordering;

/// Date operations the selection model depends on.
pub trait DateAdapter<D> {
    /// Produce an independent copy of `date`.
    fn clone_date(&self, date: &D) -> D;

    /// Whether `value` holds something this adapter recognises as a date.
    ///
    /// The default treats every present value as a date instance, which is
    /// right for representations that cannot hold anything else.
    fn is_date_instance(&self, value: Option<&D>) -> bool {
        value.is_some()
    }

    /// Whether `date` is a usable, valid date.
    fn is_valid(&self, date: &D) -> bool;

    /// Date equality. Two absent values are equal; present vs absent is not.
    fn same_date(&self, a: Option<&D>, b: Option<&D>) -> bool;
}

impl<D, A: DateAdapter<D> + ?Sized> DateAdapter<D> for &A {
    fn clone_date(&self, date: &D) -> D {
        (**self).clone_date(date)
    }

    fn is_date_instance(&self, value: Option<&D>) -> bool {
        (**self).is_date_instance(value)
    }

    fn is_valid(&self, date: &D) -> bool {
        (**self).is_valid(date)
    }

    fn same_date(&self, a: Option<&D>, b: Option<&D>) -> bool {
        (**self).same_date(a, b)
    }
}

/// Text conversion and ordering used by controllers that bind dates to
/// input fields.
///
/// `pattern` is an adapter-specific display format (for the chrono adapter,
/// a `strftime` string).
pub trait DisplayAdapter<D>: DateAdapter<D> {
    /// Render `date` for display in an input field.
    fn format(&self, date: &D, pattern: &str) -> String;

    /// Parse user-typed text using the display pattern.
    fn parse(&self, text: &str, pattern: &str) -> Option<D>;

    /// Parse a canonical (ISO-8601 `YYYY-MM-DD`) representation.
    fn deserialize(&self, text: &str) -> Option<D>;

    /// Chronological ordering of two dates.
    fn compare(&self, a: &D, b: &D) -> Ordering;
}

impl<D, A: DisplayAdapter<D> + ?Sized> DisplayAdapter<D> for &A {
    fn format(&self, date: &D, pattern: &str) -> String {
        (**self).format(date, pattern)
    }

    fn parse(&self, text: &str, pattern: &str) -> Option<D> {
        (**self).parse(text, pattern)
    }

    fn deserialize(&self, text: &str) -> Option<D> {
        (**self).deserialize(text)
    }

    fn compare(&self, a: &D, b: &D) -> Ordering {
        (**self).compare(a, b)
    }
}
