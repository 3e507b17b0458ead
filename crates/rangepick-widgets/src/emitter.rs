#![forbid(unsafe_code)]

//! Change notification for controls and endpoint fields.
//!
//! # Design
//!
//! An [`Emitter<T>`] keeps its subscribers as weak references to
//! reference-counted callbacks. [`Emitter::subscribe`] hands the strong side
//! back to the caller inside a [`Subscription`] guard, so dropping the guard
//! is all it takes to unsubscribe.
//!
//! Everything runs on the UI thread: `emit` calls each live subscriber
//! synchronously, in registration order, before returning.
//!
//! # Failure Modes
//!
//! - **Re-entrant subscribe**: subscribing from inside a callback is allowed;
//!   the new subscriber is first called on the next `emit`.
//! - **Subscriber leak**: guards kept forever keep their callbacks alive. Dead
//!   entries are pruned lazily during `emit`.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type CallbackRc<T> = Rc<dyn Fn(&T)>;
type CallbackWeak<T> = Weak<dyn Fn(&T)>;

/// Synchronous, single-threaded event emitter.
///
/// # Invariants
///
/// 1. Subscribers are notified in registration order.
/// 2. A callback whose [`Subscription`] was dropped is never called again.
/// 3. `emit_count` increments by exactly 1 per `emit`, listeners or not.
pub struct Emitter<T> {
    subscribers: RefCell<Vec<CallbackWeak<T>>>,
    emitted: Cell<u64>,
}

impl<T> Default for Emitter<T> {
    fn default() -> Self {
        Self {
            subscribers: RefCell::new(Vec::new()),
            emitted: Cell::new(0),
        }
    }
}

impl<T> std::fmt::Debug for Emitter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("subscriber_count", &self.subscribers.borrow().len())
            .field("emitted", &self.emitted.get())
            .finish()
    }
}

impl<T: 'static> Emitter<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback`. It stays registered while the returned guard is
    /// alive.
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong: CallbackRc<T> = Rc::new(callback);
        self.subscribers.borrow_mut().push(Rc::downgrade(&strong));
        Subscription {
            _guard: Box::new(strong),
        }
    }

    /// Notify every live subscriber with `value`.
    pub fn emit(&self, value: &T) {
        self.emitted.set(self.emitted.get() + 1);
        // Collect first so callbacks may subscribe without a borrow conflict.
        let callbacks: Vec<CallbackRc<T>> = {
            let mut subs = self.subscribers.borrow_mut();
            subs.retain(|w| w.strong_count() > 0);
            subs.iter().filter_map(Weak::upgrade).collect()
        };
        for cb in &callbacks {
            cb(value);
        }
    }

    /// Registered subscribers, including dead ones not yet pruned.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Total number of `emit` calls so far.
    #[must_use]
    pub fn emit_count(&self) -> u64 {
        self.emitted.get()
    }
}

/// Emitter for payload-free "something changed, re-read me" signals.
pub type StateChanges = Emitter<()>;

/// RAII guard for a subscriber callback.
///
/// Dropping it drops the strong `Rc`, so the emitter's weak entry can no
/// longer be upgraded.
pub struct Subscription {
    _guard: Box<dyn std::any::Any>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
