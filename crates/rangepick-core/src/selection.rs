#![forbid(unsafe_code)]

//! Date selection model.
//!
//! # Design
//!
//! A [`Selection<D>`] is either a single date or a start/end range. The mode
//! is chosen by constructor and never changes afterwards:
//!
//! | Constructor | Mode | Meaning |
//! |-------------|------|---------|
//! | [`Selection::single`] | `SingleDate` | one optional date |
//! | [`Selection::range`] | `Range` | start and end, either may be absent |
//!
//! Keeping the two constructors separate means "single date with no value"
//! and "range with nothing picked yet" can never collapse into one case.
//!
//! Range selections carry an explicit [`SelectionPhase`]. Picks are folded in
//! by [`Selection::set_next`]:
//!
//! | Phase | Pick `d` | New phase |
//! |-------|----------|-----------|
//! | `Empty` | `start = d` | `Open` |
//! | `Complete` | `start = d`, `end` cleared | `Open` |
//! | `Open` | `end = d` | `Complete` |
//!
//! So a range cycles: the first pick starts it, the second completes it and
//! the third starts a fresh range. No ordering between `start` and `end` is
//! enforced; a range whose end precedes its start is representable.
//!
//! # Failure Modes
//!
//! None. The model performs no I/O and never errors. Callers screen external
//! values with [`Selection::valid_or_none`] before trusting them.

use crate::adapter::DateAdapter;

/// Whether a selection holds one date or two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// A single date; `end` is never used.
    SingleDate,
    /// A start/end pair.
    Range,
}

/// Range-only progress through a pick cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionPhase {
    /// Nothing picked yet.
    #[default]
    Empty,
    /// Start picked, waiting for the end.
    Open,
    /// Both endpoints set, or completed at construction.
    Complete,
}

/// How [`Selection::range`] decides the initial phase.
///
/// The two policies only differ at construction time; transitions through
/// [`Selection::set_next`] are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CompletionPolicy {
    /// `Complete` iff an end date is present, else `Open` with a start, else
    /// `Empty`.
    ///
    /// An end without a start, as in `range(None, Some(d))`, is still
    /// `Complete`, so "complete implies a start" holds only for ranges
    /// completed by [`Selection::set_next`].
    #[default]
    EndPresent,
    /// Any range built with an explicit end argument is `Complete`, even when
    /// that argument is absent.
    EndSupplied,
}

/// Tagged construction input.
///
/// Useful when the shape of a selection travels as data (config, persisted
/// state) and must survive the trip without losing the single/range split.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SelectionInit<D> {
    /// Single date, possibly absent.
    Single(Option<D>),
    /// Range with explicit start and end, either possibly absent.
    Range(Option<D>, Option<D>),
}

/// A single date or a date range, plus the rule for folding in new picks.
///
/// # Invariants
///
/// 1. `mode` never changes after construction.
/// 2. In `SingleDate` mode `end` is always `None`.
/// 3. After `set_next` on a range: `Open` implies start present and end
///    absent; `Complete` implies start present.
///
/// Direct assignment through [`set_start`](Self::set_start) and
/// [`set_end`](Self::set_end) bypasses the phase so externally pushed values
/// can be stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<D> {
    mode: SelectionMode,
    start: Option<D>,
    end: Option<D>,
    phase: SelectionPhase,
    policy: CompletionPolicy,
}

impl<D> Selection<D> {
    /// Create a single-date selection.
    #[must_use]
    pub fn single(date: Option<D>) -> Self {
        Self {
            mode: SelectionMode::SingleDate,
            start: date,
            end: None,
            phase: SelectionPhase::Empty,
            policy: CompletionPolicy::default(),
        }
    }

    /// Create a range selection using [`CompletionPolicy::EndPresent`].
    #[must_use]
    pub fn range(start: Option<D>, end: Option<D>) -> Self {
        Self::range_with_policy(start, end, CompletionPolicy::default())
    }

    /// Create a range selection with an explicit completion policy.
    #[must_use]
    pub fn range_with_policy(start: Option<D>, end: Option<D>, policy: CompletionPolicy) -> Self {
        let phase = match policy {
            CompletionPolicy::EndSupplied => SelectionPhase::Complete,
            CompletionPolicy::EndPresent => match (&start, &end) {
                (_, Some(_)) => SelectionPhase::Complete,
                (Some(_), None) => SelectionPhase::Open,
                (None, None) => SelectionPhase::Empty,
            },
        };
        Self {
            mode: SelectionMode::Range,
            start,
            end,
            phase,
            policy,
        }
    }

    /// Build from a tagged [`SelectionInit`].
    #[must_use]
    pub fn from_init(init: SelectionInit<D>, policy: CompletionPolicy) -> Self {
        match init {
            SelectionInit::Single(date) => Self::single(date),
            SelectionInit::Range(start, end) => Self::range_with_policy(start, end, policy),
        }
    }

    #[inline]
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Current phase. `None` for single-date selections, which have no phase.
    #[inline]
    pub fn phase(&self) -> Option<SelectionPhase> {
        match self.mode {
            SelectionMode::SingleDate => None,
            SelectionMode::Range => Some(self.phase),
        }
    }

    #[inline]
    pub fn policy(&self) -> CompletionPolicy {
        self.policy
    }

    #[inline]
    pub fn is_date(&self) -> bool {
        self.mode == SelectionMode::SingleDate
    }

    #[inline]
    pub fn is_range(&self) -> bool {
        self.mode == SelectionMode::Range
    }

    /// A single date is complete once it has a value; a range once its phase
    /// is `Complete`.
    pub fn is_complete(&self) -> bool {
        match self.mode {
            SelectionMode::SingleDate => self.start.is_some(),
            SelectionMode::Range => self.phase == SelectionPhase::Complete,
        }
    }

    #[inline]
    pub fn start(&self) -> Option<&D> {
        self.start.as_ref()
    }

    #[inline]
    pub fn end(&self) -> Option<&D> {
        self.end.as_ref()
    }

    /// The value of a single-date selection.
    ///
    /// Alias for [`start`](Self::start). Only meaningful in `SingleDate`
    /// mode; on a range it simply returns the start.
    #[inline]
    pub fn date(&self) -> Option<&D> {
        self.start.as_ref()
    }

    /// Replace the value of a single-date selection. Alias for
    /// [`set_start`](Self::set_start).
    pub fn set_date(&mut self, date: Option<D>) {
        self.start = date;
    }

    /// Assign the start verbatim, leaving the phase untouched.
    pub fn set_start(&mut self, start: Option<D>) {
        self.start = start;
    }

    /// Assign the end verbatim, leaving the phase untouched. Ignored for
    /// single-date selections.
    pub fn set_end(&mut self, end: Option<D>) {
        if self.mode == SelectionMode::Range {
            self.end = end;
        }
    }

    /// Fold a newly picked date into the selection.
    ///
    /// Single dates are replaced. Ranges follow the phase table in the module
    /// docs. An `Open` range whose start was cleared by direct assignment is
    /// treated as `Empty`, so a completed range always has a start.
    pub fn set_next(&mut self, picked: D) {
        match self.mode {
            SelectionMode::SingleDate => {
                self.start = Some(picked);
            }
            SelectionMode::Range => {
                #[cfg(feature = "tracing")]
                let from = self.phase;
                match self.phase {
                    SelectionPhase::Open if self.start.is_some() => {
                        self.end = Some(picked);
                        self.phase = SelectionPhase::Complete;
                    }
                    SelectionPhase::Empty | SelectionPhase::Open | SelectionPhase::Complete => {
                        self.start = Some(picked);
                        self.end = None;
                        self.phase = SelectionPhase::Open;
                    }
                }
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    target: crate::logging::SELECTION_TARGET,
                    from = ?from,
                    to = ?self.phase,
                    "selection.set_next"
                );
            }
        }
    }

    /// Copy the selection, duplicating each date through `adapter`.
    ///
    /// The copy is rebuilt through the constructor with the same mode and
    /// policy, so its phase is recomputed from the copied endpoints.
    #[must_use]
    pub fn clone_with<A: DateAdapter<D> + ?Sized>(&self, adapter: &A) -> Self {
        let start = self.start.as_ref().map(|d| adapter.clone_date(d));
        let end = self.end.as_ref().map(|d| adapter.clone_date(d));
        match self.mode {
            SelectionMode::SingleDate => Self::single(start),
            SelectionMode::Range => Self::range_with_policy(start, end, self.policy),
        }
    }

    /// Whether two optional selections hold the same mode and dates.
    ///
    /// Returns `false` when either side is absent.
    pub fn is_same<A: DateAdapter<D> + ?Sized>(
        adapter: &A,
        a: Option<&Self>,
        b: Option<&Self>,
    ) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => {
                a.mode == b.mode
                    && adapter.same_date(a.start(), b.start())
                    && adapter.same_date(a.end(), b.end())
            }
            _ => false,
        }
    }

    /// Pass `value` through if its [`date`](Self::date) is a valid date
    /// instance, otherwise `None`.
    ///
    /// The returned reference is the input reference, not a copy.
    pub fn valid_or_none<'a, A: DateAdapter<D> + ?Sized>(
        adapter: &A,
        value: Option<&'a Self>,
    ) -> Option<&'a Self> {
        value.filter(|sel| sel.has_valid_date(adapter))
    }

    /// Owned counterpart of [`valid_or_none`](Self::valid_or_none).
    pub fn into_valid_or_none<A: DateAdapter<D> + ?Sized>(
        adapter: &A,
        value: Option<Self>,
    ) -> Option<Self> {
        value.filter(|sel| sel.has_valid_date(adapter))
    }

    fn has_valid_date<A: DateAdapter<D> + ?Sized>(&self, adapter: &A) -> bool {
        adapter.is_date_instance(self.date()) && self.date().is_some_and(|d| adapter.is_valid(d))
    }

    /// Consume the selection, returning `(start, end)`.
    pub fn into_parts(self) -> (Option<D>, Option<D>) {
        (self.start, self.end)
    }
}

impl<D> Default for Selection<D> {
    /// An empty range, the starting state of a range input.
    fn default() -> Self {
        Self::range(None, None)
    }
}

impl<D> From<SelectionInit<D>> for Selection<D> {
    fn from(init: SelectionInit<D>) -> Self {
        Self::from_init(init, CompletionPolicy::default())
    }
}
