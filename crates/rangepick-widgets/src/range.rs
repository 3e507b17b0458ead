#![forbid(unsafe_code)]

//! Date range input controller.
//!
//! # Design
//!
//! [`DateRangeInput`] coordinates three things:
//!
//! - a range [`Selection`] that folds picks into start/end,
//! - two [`RangeEndpoint`] fields showing those endpoints as text,
//! - a [`Datepicker`] popup that produces picks.
//!
//! Data flows one way per event. A popup pick goes through
//! [`Selection::set_next`], then both fields are rewritten from the
//! selection, then state-change subscribers are notified. Typed text goes
//! the other way: the field parses it and the selection is rebuilt from the
//! two field values.
//!
//! The controller owns no selection logic of its own; it only decides which
//! model call to make and what to re-render afterwards.
//!
//! # Focus
//!
//! The control is focused while either endpoint is. A state change is
//! emitted only when that aggregate flips, not on every field hop.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use rangepick_core::{DisplayAdapter, Selection, SelectionPhase};

use crate::config::RangeInputConfig;
use crate::control::FormFieldControl;
use crate::emitter::{Emitter, StateChanges, Subscription};
use crate::endpoint::{EndpointKind, RangeEndpoint};
use crate::popup::{Datepicker, PickerError, PickerEvent};
use crate::validation::RangeValidationError;

static NEXT_UNIQUE_ID: AtomicU64 = AtomicU64::new(0);

/// Input delivered to a range control by the host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeInputEvent<D> {
    /// An endpoint field gained focus.
    Focus(EndpointKind),
    /// An endpoint field lost focus.
    Blur(EndpointKind),
    /// The user edited an endpoint's text.
    Text(EndpointKind, String),
    /// A date was picked (e.g. keyboard shortcut or inline calendar).
    Picked(D),
}

/// A two-field date range input bound to a picker popup.
#[derive(Debug)]
pub struct DateRangeInput<D: 'static, A> {
    /// Generated fallback id.
    uid: String,
    id: String,
    adapter: A,
    config: RangeInputConfig,
    start: RangeEndpoint<D>,
    end: RangeEndpoint<D>,
    /// Current value. Always a range when present.
    value: Option<Selection<D>>,
    /// Aggregate of the two endpoint focus flags.
    focused: bool,
    described_by: Vec<String>,
    value_changes: Emitter<Option<Selection<D>>>,
    state_changes: StateChanges,
}

impl<D: 'static, A: DisplayAdapter<D>> DateRangeInput<D, A> {
    /// Create a control with the default configuration.
    #[must_use]
    pub fn new(adapter: A) -> Self {
        Self::with_config(adapter, RangeInputConfig::default())
    }

    /// Create a control from `config`.
    #[must_use]
    pub fn with_config(adapter: A, config: RangeInputConfig) -> Self {
        let n = NEXT_UNIQUE_ID.fetch_add(1, AtomicOrdering::Relaxed);
        let uid = format!("{}-{n}", config.id_prefix);
        let id = config
            .id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| uid.clone());
        let value = Some(Selection::range_with_policy(None, None, config.completion));
        Self {
            uid,
            id,
            adapter,
            config,
            start: RangeEndpoint::new(EndpointKind::Start),
            end: RangeEndpoint::new(EndpointKind::End),
            value,
            focused: false,
            described_by: Vec::new(),
            value_changes: Emitter::new(),
            state_changes: StateChanges::new(),
        }
    }

    // --- Accessors ---

    #[inline]
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    #[inline]
    pub fn config(&self) -> &RangeInputConfig {
        &self.config
    }

    #[inline]
    pub fn start(&self) -> &RangeEndpoint<D> {
        &self.start
    }

    #[inline]
    pub fn end(&self) -> &RangeEndpoint<D> {
        &self.end
    }

    pub fn endpoint(&self, kind: EndpointKind) -> &RangeEndpoint<D> {
        match kind {
            EndpointKind::Start => &self.start,
            EndpointKind::End => &self.end,
        }
    }

    /// Current value, `None` once cleared with `set_value(None)`.
    #[inline]
    pub fn value(&self) -> Option<&Selection<D>> {
        self.value.as_ref()
    }

    /// Phase of the current value.
    pub fn phase(&self) -> Option<SelectionPhase> {
        self.value.as_ref().and_then(Selection::phase)
    }

    /// Ids set through [`FormFieldControl::set_described_by_ids`].
    pub fn described_by_ids(&self) -> &[String] {
        &self.described_by
    }

    /// Id of the element the popup should anchor to.
    pub fn connected_overlay_origin(&self) -> &str {
        &self.id
    }

    // --- Settings ---

    /// Set the id. An empty id falls back to the generated one.
    pub fn set_id(&mut self, id: &str) {
        self.id = if id.is_empty() {
            self.uid.clone()
        } else {
            id.to_string()
        };
        self.state_changes.emit(&());
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.config.placeholder = placeholder.into();
        self.state_changes.emit(&());
    }

    pub fn set_required(&mut self, required: bool) {
        if self.config.required != required {
            self.config.required = required;
            self.state_changes.emit(&());
        }
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        if self.config.disabled != disabled {
            self.config.disabled = disabled;
            self.state_changes.emit(&());
        }
    }

    // --- Value ---

    /// Replace the value.
    ///
    /// A selection's endpoints are written into the two fields and the stored
    /// selection is rebuilt from what the fields accepted, so dates rejected
    /// as invalid are dropped and the phase matches the remaining endpoints.
    /// A single-date selection is stored as a range starting at that date.
    /// `None` clears the value but leaves the field text alone.
    pub fn set_value(&mut self, value: Option<Selection<D>>) {
        let previous = self.value.take();
        if let Some(sel) = value {
            let policy = if sel.is_range() {
                sel.policy()
            } else {
                self.config.completion
            };
            // Single selections carry no end, so this also converts them.
            let (start, end) = sel.into_parts();
            self.value = Some(Selection::range_with_policy(start, end, policy));
            self.write_fields();

            let start = self.start.value().map(|d| self.adapter.clone_date(d));
            let end = self.end.value().map(|d| self.adapter.clone_date(d));
            self.value = Some(Selection::range_with_policy(start, end, policy));
        }

        let changed = match (previous.as_ref(), self.value.as_ref()) {
            (None, None) => false,
            (a, b) => !Selection::is_same(&self.adapter, a, b),
        };
        if changed {
            self.value_changes.emit(&self.value);
        }
        self.state_changes.emit(&());
    }

    /// Subscribe to value changes.
    pub fn subscribe_value_changes(
        &self,
        callback: impl Fn(&Option<Selection<D>>) + 'static,
    ) -> Subscription {
        self.value_changes.subscribe(callback)
    }

    // --- Picker binding ---

    /// Register this control as the popup's input.
    pub fn attach_picker(&self, picker: &mut Datepicker<D>) -> Result<(), PickerError> {
        picker.register_input(&self.id)
    }

    /// Deliver every queued popup event to this control.
    ///
    /// Returns whether any event changed the value. Events from a popup bound
    /// to another input are left queued. A pick that completes the range
    /// closes the popup when its `close_on_complete` is set.
    pub fn sync_picker(&mut self, picker: &mut Datepicker<D>) -> bool {
        if picker.registered_input() != Some(self.id.as_str()) {
            tracing::warn!(
                target: "rangepick::range",
                id = %self.id,
                registered = ?picker.registered_input(),
                "picker not registered to this input"
            );
            return false;
        }
        let events: Vec<_> = picker.drain_events().collect();
        let mut changed = false;
        for event in events {
            let is_pick = matches!(event, PickerEvent::DatePicked(_));
            let applied = self.handle_picker_event(event);
            changed |= applied;
            if is_pick
                && applied
                && picker.close_on_complete()
                && self.value.as_ref().is_some_and(Selection::is_complete)
            {
                picker.close();
            }
        }
        changed
    }

    /// Apply one popup event.
    pub fn handle_picker_event(&mut self, event: PickerEvent<D>) -> bool {
        let _span = tracing::debug_span!(
            "range.picker_event",
            id = %self.id,
            event = picker_event_name(&event)
        )
        .entered();
        match event {
            PickerEvent::DatePicked(date) => self.pick(date),
            PickerEvent::SelectionPushed(selection) => {
                self.set_value(Some(selection));
                true
            }
            PickerEvent::Opened | PickerEvent::Closed => false,
        }
    }

    // --- Host events ---

    /// Apply one host UI event. Returns whether the control state changed.
    pub fn handle_event(&mut self, event: RangeInputEvent<D>) -> bool {
        match event {
            RangeInputEvent::Focus(kind) => self.set_endpoint_focus(kind, true),
            RangeInputEvent::Blur(kind) => self.set_endpoint_focus(kind, false),
            RangeInputEvent::Text(kind, text) => self.type_text(kind, &text),
            RangeInputEvent::Picked(date) => self.pick(date),
        }
    }

    fn pick(&mut self, date: D) -> bool {
        if self.config.disabled {
            return false;
        }
        if !(self.adapter.is_date_instance(Some(&date)) && self.adapter.is_valid(&date)) {
            tracing::warn!(target: "rangepick::range", id = %self.id, "ignoring invalid picked date");
            return false;
        }

        let policy = self.config.completion;
        let selection = self
            .value
            .get_or_insert_with(|| Selection::range_with_policy(None, None, policy));
        selection.set_next(date);
        tracing::debug!(
            target: "rangepick::range",
            id = %self.id,
            phase = ?selection.phase(),
            "date picked"
        );

        self.write_fields();
        self.value_changes.emit(&self.value);
        self.state_changes.emit(&());
        true
    }

    fn type_text(&mut self, kind: EndpointKind, text: &str) -> bool {
        if self.config.disabled {
            return false;
        }
        let pattern = self.config.display_pattern.as_str();
        let endpoint = match kind {
            EndpointKind::Start => &mut self.start,
            EndpointKind::End => &mut self.end,
        };
        if endpoint.set_text(&self.adapter, pattern, text) {
            let start = self.start.value().map(|d| self.adapter.clone_date(d));
            let end = self.end.value().map(|d| self.adapter.clone_date(d));
            self.value = Some(Selection::range_with_policy(
                start,
                end,
                self.config.completion,
            ));
            self.value_changes.emit(&self.value);
        }
        self.state_changes.emit(&());
        true
    }

    fn set_endpoint_focus(&mut self, kind: EndpointKind, focused: bool) -> bool {
        let pattern = self.config.display_pattern.as_str();
        let endpoint = match kind {
            EndpointKind::Start => &mut self.start,
            EndpointKind::End => &mut self.end,
        };
        if !endpoint.set_focused(focused) {
            return false;
        }
        if !focused {
            endpoint.reformat(&self.adapter, pattern);
        }

        let aggregate = self.start.focused() || self.end.focused();
        if aggregate != self.focused {
            self.focused = aggregate;
            self.state_changes.emit(&());
        }
        true
    }

    /// Rewrite both fields from the current value.
    fn write_fields(&mut self) -> bool {
        let Some(selection) = self.value.as_ref() else {
            return false;
        };
        let start = selection.start().map(|d| self.adapter.clone_date(d));
        let end = selection.end().map(|d| self.adapter.clone_date(d));
        let pattern = self.config.display_pattern.as_str();
        let start_changed = self.start.set_value(&self.adapter, pattern, start);
        let end_changed = self.end.set_value(&self.adapter, pattern, end);
        start_changed || end_changed
    }

    // --- Validation ---

    /// Everything currently wrong with the value, in a stable order.
    #[must_use]
    pub fn validate(&self) -> Vec<RangeValidationError> {
        let mut errors = Vec::new();
        for endpoint in [&self.start, &self.end] {
            if !endpoint.last_value_valid() {
                errors.push(RangeValidationError::InvalidDate(endpoint.kind()));
            }
        }
        if self.config.required && errors.is_empty() && self.is_empty() {
            errors.push(RangeValidationError::Required);
        }
        if let (Some(start), Some(end)) = (self.start.value(), self.end.value()) {
            if self.adapter.compare(end, start) == Ordering::Less {
                errors.push(RangeValidationError::EndBeforeStart);
            }
        }
        errors
    }

    /// Whether both endpoint fields are empty.
    pub fn is_empty(&self) -> bool {
        self.start.value().is_none() && self.end.value().is_none()
    }
}

fn picker_event_name<D>(event: &PickerEvent<D>) -> &'static str {
    match event {
        PickerEvent::DatePicked(_) => "date_picked",
        PickerEvent::SelectionPushed(_) => "selection_pushed",
        PickerEvent::Opened => "opened",
        PickerEvent::Closed => "closed",
    }
}

impl<D: 'static, A: DisplayAdapter<D>> FormFieldControl for DateRangeInput<D, A> {
    fn id(&self) -> &str {
        &self.id
    }

    fn placeholder(&self) -> &str {
        &self.config.placeholder
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn empty(&self) -> bool {
        self.is_empty()
    }

    fn required(&self) -> bool {
        self.config.required
    }

    fn disabled(&self) -> bool {
        self.config.disabled
    }

    fn error_state(&self) -> bool {
        (self.start.touched() || self.end.touched()) && !self.validate().is_empty()
    }

    fn control_type(&self) -> Option<&str> {
        self.config.control_type.as_deref()
    }

    fn set_described_by_ids(&mut self, ids: &[String]) {
        self.described_by = ids.to_vec();
    }

    fn on_container_click(&mut self) {
        if !self.focused && !self.config.disabled {
            self.set_endpoint_focus(EndpointKind::Start, true);
        }
    }

    fn subscribe_state_changes(&self, callback: Box<dyn Fn()>) -> Subscription {
        self.state_changes.subscribe(move |_| callback())
    }
}
