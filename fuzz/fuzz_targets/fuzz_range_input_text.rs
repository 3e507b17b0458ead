#![no_main]

use arbitrary::Arbitrary;
use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use rangepick_core::{ChronoAdapter, SelectionPhase};
use rangepick_widgets::{DateRangeInput, EndpointKind, RangeInputConfig, RangeInputEvent};

#[derive(Debug, Arbitrary)]
enum Step {
    Type { end: bool, text: String },
    Pick(i32),
    Focus(bool),
    Blur(bool),
}

#[derive(Debug, Arbitrary)]
struct Input {
    pattern_choice: u8,
    steps: Vec<Step>,
}

const PATTERNS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%d.%m.%Y", "%b %e %Y"];

fn kind(end: bool) -> EndpointKind {
    if end { EndpointKind::End } else { EndpointKind::Start }
}

fuzz_target!(|input: Input| {
    let pattern = PATTERNS[usize::from(input.pattern_choice) % PATTERNS.len()];
    let mut control = DateRangeInput::with_config(
        ChronoAdapter::new(),
        RangeInputConfig::default().with_display_pattern(pattern),
    );

    for step in input.steps {
        let event = match step {
            Step::Type { end, text } => RangeInputEvent::Text(kind(end), text),
            Step::Pick(days) => {
                let Some(date) = NaiveDate::from_num_days_from_ce_opt(days) else {
                    continue;
                };
                RangeInputEvent::Picked(date)
            }
            Step::Focus(end) => RangeInputEvent::Focus(kind(end)),
            Step::Blur(end) => RangeInputEvent::Blur(kind(end)),
        };
        control.handle_event(event);

        // Fields and selection never drift apart.
        let value = control.value().expect("range input always holds a value");
        assert_eq!(value.start(), control.start().value());
        assert_eq!(value.end(), control.end().value());
        if value.phase() == Some(SelectionPhase::Open) {
            assert!(value.start().is_some() && value.end().is_none());
        }
        let _ = control.validate();
    }
});
