#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rangepick_core::{CompletionPolicy, DateAdapter, Selection, SelectionPhase};

/// Integer days; negative values are invalid dates.
struct DayAdapter;

impl DateAdapter<i32> for DayAdapter {
    fn clone_date(&self, date: &i32) -> i32 {
        *date
    }

    fn is_valid(&self, date: &i32) -> bool {
        *date >= 0
    }

    fn same_date(&self, a: Option<&i32>, b: Option<&i32>) -> bool {
        a == b
    }
}

#[derive(Debug, Arbitrary)]
enum Op {
    Next(i32),
    SetStart(Option<i32>),
    SetEnd(Option<i32>),
    CloneWith,
}

#[derive(Debug, Arbitrary)]
struct Input {
    range: bool,
    end_supplied: bool,
    start: Option<i32>,
    end: Option<i32>,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let policy = if input.end_supplied {
        CompletionPolicy::EndSupplied
    } else {
        CompletionPolicy::EndPresent
    };
    let mut sel = if input.range {
        Selection::range_with_policy(input.start, input.end, policy)
    } else {
        Selection::single(input.start)
    };
    let mode = sel.mode();

    for op in input.ops {
        let before = sel.phase();
        match op {
            Op::Next(d) => {
                sel.set_next(d);
                if sel.is_range() {
                    // set_next always lands in Open (with a start) or Complete.
                    match sel.phase() {
                        Some(SelectionPhase::Open) => {
                            assert_eq!(sel.start(), Some(&d));
                            assert!(sel.end().is_none());
                        }
                        Some(SelectionPhase::Complete) => {
                            assert_eq!(before, Some(SelectionPhase::Open));
                            assert_eq!(sel.end(), Some(&d));
                        }
                        other => panic!("unexpected phase after set_next: {other:?}"),
                    }
                } else {
                    assert_eq!(sel.date(), Some(&d));
                }
            }
            Op::SetStart(d) => sel.set_start(d),
            Op::SetEnd(d) => sel.set_end(d),
            Op::CloneWith => {
                let copy = sel.clone_with(&DayAdapter);
                assert!(Selection::is_same(&DayAdapter, Some(&sel), Some(&copy)));
                sel = copy;
            }
        }

        // Mode never changes and single selections never gain an end.
        assert_eq!(sel.mode(), mode);
        if !sel.is_range() {
            assert!(sel.end().is_none());
            assert!(sel.phase().is_none());
        }
    }
});
