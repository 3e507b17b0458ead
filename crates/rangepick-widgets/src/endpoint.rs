#![forbid(unsafe_code)]

//! Endpoint fields of a date range input.
//!
//! A [`RangeEndpoint`] is one of the two bound inputs (start or end). It owns
//! the field's date value, the text shown in the field and its focus flag.
//! Dates always pass through the adapter: invalid or non-date values are
//! stored as `None` and remembered via [`RangeEndpoint::last_value_valid`] so
//! the controller can report a validation error.

use rangepick_core::DisplayAdapter;

use crate::emitter::{Emitter, StateChanges, Subscription};

/// Which side of the range an endpoint represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    Start,
    End,
}

impl EndpointKind {
    /// Stable lowercase name, used in logs and validation messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// One bound endpoint field.
#[derive(Debug)]
pub struct RangeEndpoint<D: 'static> {
    kind: EndpointKind,
    /// Current date value; always valid when present.
    value: Option<D>,
    /// Text as displayed (formatted value, or raw text while typing).
    text: String,
    focused: bool,
    /// Set once the field has been blurred.
    touched: bool,
    /// Whether the most recent input was either empty or a valid date.
    last_value_valid: bool,
    value_changes: Emitter<Option<D>>,
    state_changes: StateChanges,
}

impl<D: 'static> RangeEndpoint<D> {
    #[must_use]
    pub fn new(kind: EndpointKind) -> Self {
        Self {
            kind,
            value: None,
            text: String::new(),
            focused: false,
            touched: false,
            last_value_valid: true,
            value_changes: Emitter::new(),
            state_changes: StateChanges::new(),
        }
    }

    #[inline]
    pub fn kind(&self) -> EndpointKind {
        self.kind
    }

    #[inline]
    pub fn value(&self) -> Option<&D> {
        self.value.as_ref()
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn focused(&self) -> bool {
        self.focused
    }

    #[inline]
    pub fn touched(&self) -> bool {
        self.touched
    }

    #[inline]
    pub fn last_value_valid(&self) -> bool {
        self.last_value_valid
    }

    /// Update focus. Emits a state change only when the flag flips. Losing
    /// focus marks the field touched.
    ///
    /// Returns whether the flag changed.
    pub fn set_focused(&mut self, focused: bool) -> bool {
        if focused == self.focused {
            return false;
        }
        self.focused = focused;
        if !focused {
            self.touched = true;
        }
        self.state_changes.emit(&());
        true
    }

    /// Assign a date programmatically and render it into the field text.
    ///
    /// Invalid dates are dropped to `None` with `last_value_valid = false`.
    /// Returns whether the stored value changed (per adapter `same_date`);
    /// a value change is emitted only in that case.
    pub fn set_value<A: DisplayAdapter<D> + ?Sized>(
        &mut self,
        adapter: &A,
        pattern: &str,
        value: Option<D>,
    ) -> bool {
        self.last_value_valid = value.as_ref().is_none_or(|d| adapter.is_valid(d));
        let value = value.filter(|d| adapter.is_date_instance(Some(d)) && adapter.is_valid(d));
        self.text = value
            .as_ref()
            .map(|d| adapter.format(d, pattern))
            .unwrap_or_default();
        self.store(adapter, value)
    }

    /// Apply user-typed text.
    ///
    /// The text is parsed with `pattern`, falling back to ISO-8601. Blank
    /// text clears the value. Unparsable text is kept verbatim in the field
    /// but the value becomes `None` and `last_value_valid` turns false.
    pub fn set_text<A: DisplayAdapter<D> + ?Sized>(
        &mut self,
        adapter: &A,
        pattern: &str,
        text: &str,
    ) -> bool {
        self.text = text.to_string();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.last_value_valid = true;
            return self.store(adapter, None);
        }

        let parsed = adapter
            .parse(trimmed, pattern)
            .or_else(|| adapter.deserialize(trimmed));
        match parsed {
            Some(date) => {
                self.last_value_valid = adapter.is_valid(&date);
                let date = Some(date).filter(|d| adapter.is_valid(d));
                self.store(adapter, date)
            }
            None => {
                tracing::debug!(
                    target: "rangepick::endpoint",
                    endpoint = self.kind.as_str(),
                    "unparsable date text"
                );
                self.last_value_valid = false;
                self.store(adapter, None)
            }
        }
    }

    /// Re-render the text from the current value, discarding raw typed text.
    pub fn reformat<A: DisplayAdapter<D> + ?Sized>(&mut self, adapter: &A, pattern: &str) {
        if let Some(d) = self.value.as_ref() {
            self.text = adapter.format(d, pattern);
        }
    }

    /// Subscribe to value changes.
    pub fn subscribe_value_changes(&self, callback: impl Fn(&Option<D>) + 'static) -> Subscription {
        self.value_changes.subscribe(callback)
    }

    /// Subscribe to focus/state changes.
    pub fn subscribe_state_changes(&self, callback: impl Fn(&()) + 'static) -> Subscription {
        self.state_changes.subscribe(callback)
    }

    fn store<A: DisplayAdapter<D> + ?Sized>(&mut self, adapter: &A, value: Option<D>) -> bool {
        let changed = !adapter.same_date(self.value.as_ref(), value.as_ref());
        self.value = value;
        if changed {
            self.value_changes.emit(&self.value);
        }
        changed
    }
}
