//! Host capabilities the controller calls into.
//!
//! A host renders the form. The controller never touches rendering primitives;
//! it asks the host for each step's body once and reports lifecycle events
//! through the callbacks below, synchronously and in order.

use serde::{Deserialize, Serialize};

/// Callbacks a form host implements.
pub trait StepperHost {
    /// Opaque rendering of a step's body; stored by the controller, never
    /// inspected.
    type Content;

    /// Produces the body of content step `index`. Called once per
    /// caller-supplied step when the form is first initialized.
    fn create_step_content(&mut self, index: usize) -> Self::Content;

    /// Step `index` has just become the active step.
    fn on_step_opening(&mut self, index: usize);

    /// Step `index` has been marked completed.
    fn on_step_completed(&mut self, _index: usize) {}

    /// Step `index` has been marked uncompleted.
    fn on_step_uncompleted(&mut self, _index: usize) {}

    /// The form has been submitted.
    fn on_submit(&mut self);
}

/// A lifecycle event reported to a host.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", content = "step", rename_all = "snake_case")]
pub enum FormEvent {
    ContentCreated(usize),
    Opening(usize),
    Completed(usize),
    Uncompleted(usize),
    Submitted,
}

/// Host that records every callback in order.
///
/// Used by the session store to report what a command did, and by tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<FormEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[FormEvent] {
        &self.events
    }

    /// Removes and returns the recorded events.
    pub fn drain(&mut self) -> Vec<FormEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl StepperHost for EventLog {
    type Content = ();

    fn create_step_content(&mut self, index: usize) {
        self.events.push(FormEvent::ContentCreated(index));
    }

    fn on_step_opening(&mut self, index: usize) {
        self.events.push(FormEvent::Opening(index));
    }

    fn on_step_completed(&mut self, index: usize) {
        self.events.push(FormEvent::Completed(index));
    }

    fn on_step_uncompleted(&mut self, index: usize) {
        self.events.push(FormEvent::Uncompleted(index));
    }

    fn on_submit(&mut self) {
        self.events.push(FormEvent::Submitted);
    }
}
