//! Display implementations for domain models.
//!
//! Kept apart from the model definitions; every implementation produces
//! markdown for the terminal renderer.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    controller::StepButton,
    host::FormEvent,
    models::{FormSummary, StepState},
};

impl fmt::Display for StepState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StepButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StepButton::Continue => "Continue",
            StepButton::Submit => "Submit",
            StepButton::Confirm => "Confirm",
        };
        write!(f, "{label}")
    }
}

impl fmt::Display for FormEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormEvent::ContentCreated(index) => write!(f, "created content of step {index}"),
            FormEvent::Opening(index) => write!(f, "opened step {index}"),
            FormEvent::Completed(index) => write!(f, "completed step {index}"),
            FormEvent::Uncompleted(index) => write!(f, "uncompleted step {index}"),
            FormEvent::Submitted => write!(f, "submitted the form"),
        }
    }
}

impl fmt::Display for FormSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) ({}/{})",
            self.name, self.id, self.completed_steps, self.total_steps
        )?;
        writeln!(f)?;

        let status = if self.submitted {
            "submitted"
        } else {
            "in progress"
        };
        writeln!(f, "- **Status**: {status}")?;
        if !self.submitted {
            writeln!(f, "- **Active step**: {}", self.active_step)?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- **Updated**: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)?;

        Ok(())
    }
}
