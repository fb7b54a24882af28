//! Step model definition.

use serde::{Deserialize, Serialize};

/// A single page of a multi-step form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    /// Title shown in the step header (never blank)
    pub title: String,

    /// Optional line shown under the title while the step is collapsed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Whether the host has marked this step as completed
    #[serde(default)]
    pub completed: bool,

    /// True only for the synthetic confirmation step appended at the end
    #[serde(default)]
    pub is_confirmation: bool,
}

impl Step {
    /// Creates an incomplete content step.
    pub fn new(title: impl Into<String>, subtitle: Option<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.filter(|s| !s.trim().is_empty()),
            completed: false,
            is_confirmation: false,
        }
    }

    /// Creates the synthetic confirmation step.
    pub fn confirmation(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            completed: false,
            is_confirmation: true,
        }
    }
}
