//! Navigation between steps.

use log::debug;
use serde::{Deserialize, Serialize};

use super::StepperController;
use crate::{error::Result, host::StepperHost};

/// Enabled state of the previous/next navigation bar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Navigation {
    /// Whether the bar is shown at all
    pub visible: bool,
    /// False only while the first step is active
    pub previous_enabled: bool,
    /// True while the active step is completed and is not the last step
    pub next_enabled: bool,
}

/// The inline button shown under an open step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepButton {
    /// Moves on to the following step
    Continue,
    /// Submits a form that has no confirmation step
    Submit,
    /// Submits from the confirmation step
    Confirm,
}

impl<H: StepperHost> StepperController<H> {
    /// Moves the active step to `target`.
    ///
    /// Returns `Ok(true)` when the step was opened and `Ok(false)` when the
    /// request was refused: `target` is locked, or it is the active step and
    /// not yet completed. A completed active step is reopened. Restoration
    /// calls always run the transition when `target` is reachable.
    ///
    /// # Errors
    ///
    /// Returns `StepwiseError::IndexOutOfRange` if `target` is not a step of
    /// this form.
    pub fn go_to_step(&mut self, target: usize, is_restoration: bool) -> Result<bool> {
        self.check_index(target)?;

        if target == self.active_step && !is_restoration {
            if self.step_set.is_completed(target)? {
                self.open_step(target)?;
                return Ok(true);
            }
            return Ok(false);
        }

        if target == 0 || self.step_set.all_prior_completed(target)? {
            self.open_step(target)?;
            Ok(true)
        } else {
            debug!("Refusing to open locked step {target}");
            Ok(false)
        }
    }

    /// Opens the step after the active one; a no-op on the last step.
    pub fn go_to_next_step(&mut self) -> Result<bool> {
        if self.active_step >= self.step_set.last_index() {
            return Ok(false);
        }
        self.go_to_step(self.active_step + 1, false)
    }

    /// Opens the step before the active one; a no-op on the first step.
    pub fn go_to_previous_step(&mut self) -> Result<bool> {
        match self.active_step.checked_sub(1) {
            Some(target) => self.go_to_step(target, false),
            None => Ok(false),
        }
    }

    /// Current state of the navigation bar.
    pub fn navigation(&self) -> Navigation {
        Navigation {
            visible: self.display_bottom_navigation,
            previous_enabled: self.active_step != 0,
            next_enabled: self.is_active_step_completed()
                && self.active_step < self.step_set.last_index(),
        }
    }

    /// The inline button of step `index`, if it has one.
    pub fn step_button(&self, index: usize) -> Result<Option<StepButton>> {
        self.check_index(index)?;

        if self.step_set.is_confirmation(index) {
            return Ok(Some(StepButton::Confirm));
        }

        let last_content = self.step_set.content_len() - 1;
        if index == last_content && !self.show_last_step_next_button {
            Ok(None)
        } else if index == last_content && !self.step_set.confirmation_enabled() {
            Ok(Some(StepButton::Submit))
        } else {
            Ok(Some(StepButton::Continue))
        }
    }

    /// Whether the inline button of step `index` can be pressed.
    pub fn step_button_enabled(&self, index: usize) -> Result<bool> {
        let Some(button) = self.step_button(index)? else {
            return Ok(false);
        };
        let completed = self.step_set.is_completed(index)?;
        Ok(match button {
            StepButton::Continue => completed,
            StepButton::Submit | StepButton::Confirm => completed && !self.submitted,
        })
    }

    /// Presses the inline button of step `index`.
    ///
    /// Only the active step's button can be pressed, and only while enabled;
    /// anything else is ignored and reported as `Ok(false)`.
    pub fn press_step_button(&mut self, index: usize) -> Result<bool> {
        let button = self.step_button(index)?;
        if index != self.active_step || !self.step_button_enabled(index)? {
            debug!("Ignoring press on inactive or disabled button of step {index}");
            return Ok(false);
        }

        match button {
            Some(StepButton::Continue) => self.go_to_step(index + 1, false),
            Some(StepButton::Submit | StepButton::Confirm) => {
                self.submit();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Makes `target` active and notifies the host. Opening the confirmation
    /// step marks it completed first.
    pub(crate) fn open_step(&mut self, target: usize) -> Result<()> {
        self.active_step = target;
        if self.step_set.is_confirmation(target) {
            self.mark_completed(target)?;
        }
        self.host.on_step_opening(target);
        Ok(())
    }
}
