#![forbid(unsafe_code)]

//! Picker popup model.
//!
//! The calendar itself is rendered elsewhere; this type only tracks what a
//! bound control needs to know about the popup: which input it serves,
//! whether it is open, and the picks it has produced. Picks are queued as
//! [`PickerEvent`]s and pulled by the control with
//! [`Datepicker::drain_events`], keeping delivery order equal to pick order.
//!
//! The popup does not know the selection, so it never closes itself on a
//! pick. The bound control closes it once a pick completes the range, when
//! [`Datepicker::close_on_complete`] allows.

use std::collections::VecDeque;

use rangepick_core::Selection;

/// Something the popup wants its bound input to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent<D> {
    /// The user confirmed a date in the calendar.
    DatePicked(D),
    /// The popup pushed back a whole selection (e.g. a stored value).
    SelectionPushed(Selection<D>),
    Opened,
    Closed,
}

/// Errors from popup operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// `open` was called before any input registered.
    NoInput,
    /// The popup is already bound to another input.
    AlreadyRegistered { current: String },
}

impl std::fmt::Display for PickerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoInput => write!(f, "attempted to open a date picker with no associated input"),
            Self::AlreadyRegistered { current } => {
                write!(f, "date picker is already registered to input {current:?}")
            }
        }
    }
}

impl std::error::Error for PickerError {}

/// Popup state shared by a calendar view and the input it is bound to.
#[derive(Debug)]
pub struct Datepicker<D> {
    registered_input: Option<String>,
    opened: bool,
    /// Let the bound control close the popup once a pick completes a range.
    close_on_complete: bool,
    events: VecDeque<PickerEvent<D>>,
}

impl<D> Default for Datepicker<D> {
    fn default() -> Self {
        Self {
            registered_input: None,
            opened: false,
            close_on_complete: true,
            events: VecDeque::new(),
        }
    }
}

impl<D> Datepicker<D> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the popup open after a range completes (builder).
    #[must_use]
    pub fn with_close_on_complete(mut self, close: bool) -> Self {
        self.close_on_complete = close;
        self
    }

    /// Bind the popup to an input id.
    ///
    /// A popup serves one input. Registering the same id again is a no-op;
    /// a different id is rejected.
    pub fn register_input(&mut self, id: &str) -> Result<(), PickerError> {
        match self.registered_input.as_deref() {
            Some(current) if current == id => Ok(()),
            Some(current) => {
                tracing::warn!(
                    target: "rangepick::popup",
                    current,
                    requested = id,
                    "date picker re-registration rejected"
                );
                Err(PickerError::AlreadyRegistered {
                    current: current.to_string(),
                })
            }
            None => {
                self.registered_input = Some(id.to_string());
                Ok(())
            }
        }
    }

    /// Release the binding, e.g. when the input is destroyed.
    pub fn unregister_input(&mut self) {
        self.registered_input = None;
        self.opened = false;
        self.events.clear();
    }

    #[inline]
    pub fn registered_input(&self) -> Option<&str> {
        self.registered_input.as_deref()
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.opened
    }

    #[inline]
    pub fn close_on_complete(&self) -> bool {
        self.close_on_complete
    }

    /// Open the popup. Fails when no input is registered.
    pub fn open(&mut self) -> Result<(), PickerError> {
        if self.registered_input.is_none() {
            return Err(PickerError::NoInput);
        }
        if !self.opened {
            self.opened = true;
            self.events.push_back(PickerEvent::Opened);
        }
        Ok(())
    }

    pub fn close(&mut self) {
        if self.opened {
            self.opened = false;
            self.events.push_back(PickerEvent::Closed);
        }
    }

    /// Record a confirmed calendar pick.
    pub fn select(&mut self, date: D) {
        self.events.push_back(PickerEvent::DatePicked(date));
    }

    /// Push a whole selection to the bound input.
    pub fn push_selection(&mut self, selection: Selection<D>) {
        self.events.push_back(PickerEvent::SelectionPushed(selection));
    }

    /// Number of undelivered events.
    #[inline]
    pub fn pending(&self) -> usize {
        self.events.len()
    }

    /// Take all queued events in delivery order.
    pub fn drain_events(&mut self) -> impl Iterator<Item = PickerEvent<D>> + '_ {
        self.events.drain(..)
    }
}
