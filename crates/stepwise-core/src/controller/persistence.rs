//! Snapshot and restoration of an in-progress form.

use super::StepperController;
use crate::{
    error::{Result, StepwiseError},
    host::StepperHost,
    models::FormSnapshot,
};

impl<H: StepperHost> StepperController<H> {
    /// Captures the active step and every completion flag.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            active_step_index: self.active_step,
            completed_steps: self.step_set.completed_flags(),
        }
    }

    /// Rehydrates a snapshot onto this controller and reopens its active step.
    ///
    /// Use this when resuming an interrupted form. The active index is
    /// restored as saved even when that step has since become locked; in that
    /// case the reopening transition is refused and `Ok(false)` is returned.
    ///
    /// # Errors
    ///
    /// Returns `StepwiseError::InvalidConfiguration` when the snapshot has a
    /// different number of steps, and `StepwiseError::IndexOutOfRange` when its
    /// active index is outside the form.
    pub fn restore(&mut self, snapshot: &FormSnapshot) -> Result<bool> {
        self.rehydrate(snapshot)?;
        self.go_to_step(self.active_step, true)
    }

    /// Rehydrates the flags and active index of a snapshot without running
    /// any transition or callback.
    ///
    /// The state is taken exactly as saved: opening the confirmation step
    /// is not replayed, so a confirmation invalidated before the snapshot
    /// was taken stays uncompleted.
    ///
    /// # Errors
    ///
    /// Same as [`restore`](Self::restore).
    pub fn rehydrate(&mut self, snapshot: &FormSnapshot) -> Result<()> {
        if snapshot.completed_steps.len() != self.step_set.len() {
            return Err(StepwiseError::invalid_configuration(format!(
                "snapshot has {} steps but the form has {}",
                snapshot.completed_steps.len(),
                self.step_set.len()
            )));
        }
        self.check_index(snapshot.active_step_index)?;

        for (index, completed) in snapshot.completed_steps.iter().enumerate() {
            self.step_set.set_completed(index, *completed)?;
        }
        self.active_step = snapshot.active_step_index;
        Ok(())
    }

    /// Rehydrates the advisory error messages saved alongside a snapshot.
    pub fn restore_error_messages(&mut self, errors: &[Option<String>]) -> Result<()> {
        if errors.len() != self.step_set.len() {
            return Err(StepwiseError::invalid_configuration(format!(
                "{} error messages saved for a form with {} steps",
                errors.len(),
                self.step_set.len()
            )));
        }
        self.errors = errors.to_vec();
        Ok(())
    }

    /// Rehydrates the advisory error message of a single step. Blank
    /// messages clear it.
    pub fn restore_error_message(&mut self, index: usize, message: Option<&str>) -> Result<()> {
        self.check_index(index)?;
        self.errors[index] = message
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string);
        Ok(())
    }

    /// Records that the form was submitted in an earlier session.
    pub fn restore_submitted(&mut self) {
        self.submitted = true;
    }
}
