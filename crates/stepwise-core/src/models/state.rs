//! Derived per-step visual state.

use serde::{Deserialize, Serialize};

/// Visual classification of a step, derived from the active index and the
/// completion flags. Exactly one step of a form is `Active` unless that step
/// has lost a predecessor's completion, in which case it reports `Locked`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    /// Some predecessor is not completed; the step cannot be opened
    Locked,

    /// The step currently presented for interaction
    Active,

    /// Reachable, collapsed and not completed
    CollapsedIncomplete,

    /// Reachable, collapsed and completed
    CollapsedComplete,
}

impl StepState {
    /// Classifies step `index` given the active step, its own completion flag
    /// and whether every predecessor is completed.
    pub fn classify(index: usize, active: usize, completed: bool, prior_completed: bool) -> Self {
        if !prior_completed {
            StepState::Locked
        } else if index == active {
            StepState::Active
        } else if completed {
            StepState::CollapsedComplete
        } else {
            StepState::CollapsedIncomplete
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StepState::Locked => "locked",
            StepState::Active => "active",
            StepState::CollapsedIncomplete => "pending",
            StepState::CollapsedComplete => "completed",
        }
    }

    /// Get the state with a consistent icon for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stepwise_core::models::StepState;
    ///
    /// assert_eq!(StepState::CollapsedComplete.with_icon(), "✓ Completed");
    /// assert_eq!(StepState::Active.with_icon(), "➤ Active");
    /// assert_eq!(StepState::CollapsedIncomplete.with_icon(), "○ Pending");
    /// assert_eq!(StepState::Locked.with_icon(), "✗ Locked");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepState::Locked => "✗ Locked",
            StepState::Active => "➤ Active",
            StepState::CollapsedIncomplete => "○ Pending",
            StepState::CollapsedComplete => "✓ Completed",
        }
    }
}
