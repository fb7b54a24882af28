//! Completion bookkeeping and submission.

use log::debug;

use super::StepperController;
use crate::{error::Result, host::StepperHost};

impl<H: StepperHost> StepperController<H> {
    /// Marks step `index` completed and clears its error message.
    ///
    /// # Errors
    ///
    /// Returns `StepwiseError::IndexOutOfRange` for an unknown step.
    pub fn mark_completed(&mut self, index: usize) -> Result<()> {
        self.step_set.set_completed(index, true)?;
        self.errors[index] = None;
        self.host.on_step_completed(index);
        Ok(())
    }

    /// Marks step `index` uncompleted.
    ///
    /// When the form has a confirmation step and `index` precedes it, the
    /// confirmation step is uncompleted as well so a stale confirmation never
    /// survives an edit. A non-blank `error_message` is recorded for display.
    ///
    /// # Errors
    ///
    /// Returns `StepwiseError::IndexOutOfRange` for an unknown step.
    pub fn mark_uncompleted(&mut self, index: usize, error_message: Option<&str>) -> Result<()> {
        self.step_set.set_completed(index, false)?;

        if let Some(confirmation) = self.step_set.confirmation_index() {
            if index < confirmation {
                debug!("Step {index} uncompleted, invalidating confirmation step");
                self.mark_uncompleted(confirmation, None)?;
            }
        }

        if let Some(message) = error_message.filter(|m| !m.trim().is_empty()) {
            self.errors[index] = Some(message.to_string());
        }

        self.host.on_step_uncompleted(index);
        Ok(())
    }

    pub fn mark_active_step_completed(&mut self) -> Result<()> {
        self.mark_completed(self.active_step)
    }

    pub fn mark_active_step_uncompleted(&mut self, error_message: Option<&str>) -> Result<()> {
        self.mark_uncompleted(self.active_step, error_message)
    }

    /// True when the final step (confirmation step, or last step without one)
    /// is active, completed and the form has not been submitted yet.
    pub fn is_ready_to_submit(&self) -> bool {
        let last = self.step_set.last_index();
        !self.submitted && self.active_step == last && self.is_active_step_completed()
    }

    /// Submits the form. Content validation is the host's business; the
    /// controller only records the submission and notifies the host.
    pub fn submit(&mut self) {
        self.submitted = true;
        self.host.on_submit();
    }
}
