#![forbid(unsafe_code)]

//! Integration tests for the range input stack.
//!
//! These tests exercise the full flow: popup registration, pick delivery,
//! selection transitions, field write-back and form-field state, as a host
//! UI would drive them.
//!
//! # Invariants tested
//!
//! 1. Fields always mirror the selection after a popup pick.
//! 2. Events from a popup bound to another input are not consumed.
//! 3. Form-field state (`empty`, `should_label_float`, `error_state`) tracks
//!    focus and value.
//! 4. Picker events are traced under `range.picker_event`.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use rangepick_core::{ChronoAdapter, Selection, SelectionPhase};
use rangepick_widgets::{
    DateRangeInput, Datepicker, EndpointKind, FormFieldControl, PickerError, RangeInputConfig,
    RangeInputEvent, RangeValidationError,
};
use tracing_subscriber::layer::SubscriberExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn bound_pair() -> (DateRangeInput<NaiveDate, ChronoAdapter>, Datepicker<NaiveDate>) {
    let input = DateRangeInput::with_config(
        ChronoAdapter::new(),
        RangeInputConfig::default()
            .with_id("trip")
            .with_placeholder("Trip dates"),
    );
    let mut picker = Datepicker::new();
    input.attach_picker(&mut picker).unwrap();
    (input, picker)
}

// ===========================================================================
// Popup round trip
// ===========================================================================

#[test]
fn popup_picks_complete_a_range() {
    let (mut input, mut picker) = bound_pair();

    picker.open().unwrap();
    picker.select(ymd(2024, 1, 10));
    assert!(input.sync_picker(&mut picker));
    assert_eq!(input.phase(), Some(SelectionPhase::Open));
    assert_eq!(input.start().text(), "2024-01-10");
    assert_eq!(input.end().text(), "");

    picker.select(ymd(2024, 1, 20));
    assert!(input.sync_picker(&mut picker));
    assert_eq!(input.phase(), Some(SelectionPhase::Complete));
    assert_eq!(input.end().text(), "2024-01-20");
    assert!(!picker.is_open());
}

#[test]
fn popup_closes_when_pick_completes_typed_start() {
    let (mut input, mut picker) = bound_pair();
    input.handle_event(RangeInputEvent::Text(EndpointKind::Start, "2024-01-10".into()));
    assert_eq!(input.phase(), Some(SelectionPhase::Open));

    picker.open().unwrap();
    picker.select(ymd(2024, 1, 20));
    input.sync_picker(&mut picker);
    assert_eq!(input.phase(), Some(SelectionPhase::Complete));
    assert!(!picker.is_open());

    // Reopened, a restarting pick leaves the popup up for the end.
    picker.open().unwrap();
    picker.select(ymd(2024, 2, 1));
    input.sync_picker(&mut picker);
    assert_eq!(input.phase(), Some(SelectionPhase::Open));
    assert!(picker.is_open());
}

#[test]
fn popup_stays_open_without_close_on_complete() {
    let mut input = DateRangeInput::<NaiveDate, _>::new(ChronoAdapter::new());
    let mut picker = Datepicker::new().with_close_on_complete(false);
    input.attach_picker(&mut picker).unwrap();
    picker.open().unwrap();
    picker.select(ymd(2024, 1, 10));
    picker.select(ymd(2024, 1, 20));
    input.sync_picker(&mut picker);
    assert_eq!(input.phase(), Some(SelectionPhase::Complete));
    assert!(picker.is_open());
}

#[test]
fn ignored_pick_does_not_close_popup() {
    let (mut input, mut picker) = bound_pair();
    input.set_value(Some(Selection::range(Some(ymd(2024, 1, 1)), Some(ymd(2024, 1, 5)))));
    input.set_disabled(true);
    picker.open().unwrap();
    picker.select(ymd(2024, 1, 9));
    input.sync_picker(&mut picker);
    assert!(picker.is_open());
}

#[test]
fn popup_push_replaces_value() {
    let (mut input, mut picker) = bound_pair();
    picker.push_selection(Selection::range(Some(ymd(2024, 6, 1)), Some(ymd(2024, 6, 14))));
    assert!(input.sync_picker(&mut picker));

    let value = input.value().unwrap();
    assert_eq!(value.start(), Some(&ymd(2024, 6, 1)));
    assert_eq!(value.end(), Some(&ymd(2024, 6, 14)));
    assert_eq!(input.start().text(), "2024-06-01");
    assert_eq!(input.end().text(), "2024-06-14");

    // The next pick restarts the pushed (complete) range.
    picker.select(ymd(2024, 7, 1));
    input.sync_picker(&mut picker);
    assert_eq!(input.start().value(), Some(&ymd(2024, 7, 1)));
    assert_eq!(input.end().value(), None);
}

#[test]
fn foreign_popup_is_left_alone() {
    let (mut input, _) = bound_pair();
    let other = DateRangeInput::<NaiveDate, _>::new(ChronoAdapter::new());
    let mut foreign = Datepicker::new();
    other.attach_picker(&mut foreign).unwrap();
    foreign.select(ymd(2024, 1, 1));

    assert!(!input.sync_picker(&mut foreign));
    assert_eq!(foreign.pending(), 1);
    assert!(input.is_empty());
}

#[test]
fn second_input_cannot_steal_popup() {
    let (_input, mut picker) = bound_pair();
    let other = DateRangeInput::<NaiveDate, _>::new(ChronoAdapter::new());
    assert_eq!(
        other.attach_picker(&mut picker),
        Err(PickerError::AlreadyRegistered {
            current: "trip".into()
        })
    );
}

#[test]
fn overlay_origin_is_the_control() {
    let (input, picker) = bound_pair();
    assert_eq!(picker.registered_input(), Some(input.connected_overlay_origin()));
}

// ===========================================================================
// Form-field surface
// ===========================================================================

#[test]
fn form_field_sees_state_changes() {
    let (mut input, mut picker) = bound_pair();
    let notified = Rc::new(Cell::new(0u32));
    let n = Rc::clone(&notified);
    let _sub = input.subscribe_state_changes(Box::new(move || n.set(n.get() + 1)));

    assert_eq!(input.placeholder(), "Trip dates");
    assert!(input.empty());
    assert!(!input.should_label_float());

    input.on_container_click();
    assert!(input.focused());
    assert!(input.should_label_float());
    let after_focus = notified.get();
    assert!(after_focus >= 1);

    picker.select(ymd(2024, 2, 2));
    input.sync_picker(&mut picker);
    assert!(notified.get() > after_focus);
    assert!(!input.empty());

    input.handle_event(RangeInputEvent::Blur(EndpointKind::Start));
    assert!(!input.focused());
    assert!(input.should_label_float());
}

#[test]
fn required_control_reports_error_after_blur() {
    let mut input = DateRangeInput::<NaiveDate, _>::with_config(
        ChronoAdapter::new(),
        RangeInputConfig::default().with_required(true),
    );
    assert!(input.required());
    assert!(!input.error_state());

    input.handle_event(RangeInputEvent::Focus(EndpointKind::Start));
    input.handle_event(RangeInputEvent::Blur(EndpointKind::Start));
    assert!(input.error_state());
    assert_eq!(input.validate(), vec![RangeValidationError::Required]);

    input.handle_event(RangeInputEvent::Picked(ymd(2024, 1, 1)));
    assert!(!input.error_state());
}

#[test]
fn typing_then_picking_keeps_fields_consistent() {
    let (mut input, mut picker) = bound_pair();
    input.handle_event(RangeInputEvent::Text(EndpointKind::Start, "2024-03-01".into()));
    assert_eq!(input.phase(), Some(SelectionPhase::Open));

    picker.select(ymd(2024, 3, 5));
    input.sync_picker(&mut picker);
    assert_eq!(input.start().value(), Some(&ymd(2024, 3, 1)));
    assert_eq!(input.end().value(), Some(&ymd(2024, 3, 5)));
    assert_eq!(input.phase(), Some(SelectionPhase::Complete));
}

#[test]
fn disabling_mid_flow_freezes_value() {
    let (mut input, mut picker) = bound_pair();
    picker.select(ymd(2024, 1, 1));
    input.sync_picker(&mut picker);
    input.set_disabled(true);
    assert!(input.disabled());

    picker.select(ymd(2024, 1, 9));
    assert!(!input.sync_picker(&mut picker));
    assert_eq!(input.end().value(), None);
}

// ===========================================================================
// Tracing
// ===========================================================================

struct SpanNames(Arc<Mutex<Vec<String>>>);

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for SpanNames {
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        self.0.lock().unwrap().push(attrs.metadata().name().to_string());
    }
}

#[test]
fn picker_events_are_traced() {
    let names = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(SpanNames(names.clone()));

    tracing::subscriber::with_default(subscriber, || {
        let (mut input, mut picker) = bound_pair();
        picker.open().unwrap();
        picker.select(ymd(2024, 1, 10));
        input.sync_picker(&mut picker);
    });

    let names = names.lock().unwrap();
    let picker_spans = names.iter().filter(|n| *n == "range.picker_event").count();
    // Opened + DatePicked.
    assert_eq!(picker_spans, 2);
}
