//! Tracing output of selection transitions.
//!
//! Run:
//!   cargo test -p rangepick-core --features tracing --test selection_tracing

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use rangepick_core::Selection;
use tracing_subscriber::layer::SubscriberExt;

/// A captured event: target plus recorded fields.
#[derive(Debug, Clone)]
struct CapturedEvent {
    target: String,
    fields: Vec<(String, String)>,
}

struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCapture {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            target: event.metadata().target().to_string(),
            fields: visitor.0,
        });
    }
}

fn field<'a>(event: &'a CapturedEvent, name: &str) -> Option<&'a str> {
    event
        .fields
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

#[test]
fn set_next_emits_transition_events() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(EventCapture {
        events: events.clone(),
    });

    tracing::subscriber::with_default(subscriber, || {
        let mut sel = Selection::range(None, None);
        sel.set_next(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        sel.set_next(NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
        // Single-date picks have no phase and log nothing.
        let mut single = Selection::single(None);
        single.set_next(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    });

    let events = events.lock().unwrap();
    let transitions: Vec<_> = events
        .iter()
        .filter(|e| e.target == "rangepick::selection")
        .collect();
    assert_eq!(transitions.len(), 2);
    assert_eq!(field(transitions[0], "from"), Some("Empty"));
    assert_eq!(field(transitions[0], "to"), Some("Open"));
    assert_eq!(field(transitions[1], "from"), Some("Open"));
    assert_eq!(field(transitions[1], "to"), Some("Complete"));
}
