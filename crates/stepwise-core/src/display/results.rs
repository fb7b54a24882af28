//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use serde::Serialize;

use super::{collections::EventLines, view::FormView};
use crate::{host::FormEvent, models::FormSummary};

/// Outcome of one operation applied to a stored form.
///
/// `applied` is false when the state machine refused the request (a locked
/// step, a disabled button); the form is then shown unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    /// Short description of the requested operation
    pub action: String,
    pub applied: bool,
    /// Host callbacks the operation triggered, in order
    pub events: Vec<FormEvent>,
    pub form: FormView,
}

impl StepOutcome {
    pub fn new(action: impl Into<String>, applied: bool, events: Vec<FormEvent>, form: FormView) -> Self {
        Self {
            action: action.into(),
            applied,
            events,
            form,
        }
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.applied {
            writeln!(f, "{}.", self.action)?;
        } else {
            writeln!(f, "{}: nothing changed.", self.action)?;
        }
        writeln!(f)?;

        if !self.events.is_empty() {
            write!(f, "{}", EventLines(self.events.clone()))?;
            writeln!(f)?;
        }

        write!(f, "{}", self.form)
    }
}

/// Confirmation of a deleted form.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<FormSummary> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted form '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}
