#![forbid(unsafe_code)]

//! Form-field control contract.
//!
//! A host form field (label, hint, error line) drives any control that
//! implements [`FormFieldControl`]. The field reads the control's state
//! synchronously and re-reads it whenever the control emits a state change.

use crate::emitter::Subscription;

/// State a form-field wrapper needs from its control.
///
/// Required items describe the control's current state; the provided items
/// are optional capabilities with neutral defaults.
pub trait FormFieldControl {
    /// Unique element id.
    fn id(&self) -> &str;

    fn placeholder(&self) -> &str;

    /// Whether the control, or any part of it, has focus.
    fn focused(&self) -> bool;

    /// Whether the control holds no value.
    fn empty(&self) -> bool;

    /// Whether the label should float above the control.
    fn should_label_float(&self) -> bool {
        self.focused() || !self.empty()
    }

    fn required(&self) -> bool;

    fn disabled(&self) -> bool;

    /// Whether the field should render its error styling.
    fn error_state(&self) -> bool;

    /// Control type name, used by hosts to tag the field.
    fn control_type(&self) -> Option<&str> {
        None
    }

    /// Whether the browser or platform autofilled the control.
    fn autofilled(&self) -> bool {
        false
    }

    /// Ids of elements describing this control (hints, errors).
    fn set_described_by_ids(&mut self, ids: &[String]);

    /// Called when the user clicks the field container outside the control.
    fn on_container_click(&mut self);

    /// Subscribe to state changes that require the host to re-read.
    fn subscribe_state_changes(&self, callback: Box<dyn Fn()>) -> Subscription;
}
