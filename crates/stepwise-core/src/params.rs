//! Parameter structures for stepwise operations
//!
//! Interface-agnostic parameter types passed from front ends (the CLI today)
//! into the [`FormStore`](crate::FormStore). Front ends define their own
//! argument structs and convert them into these with `From` impls, so the core
//! stays free of clap attributes.

use serde::{Deserialize, Serialize};

use crate::config::FormConfig;

/// Generic parameters for operations requiring just a form ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the form to operate on
    pub id: u64,
}

/// Parameters for creating a new form session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateForm {
    /// Name of the form
    pub name: String,
    /// Steps and display options
    pub config: FormConfig,
}

/// Parameters for listing form sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListForms {
    /// Include submitted forms
    #[serde(default)]
    pub all: bool,
    /// Only forms whose name contains this text
    #[serde(default)]
    pub name_contains: Option<String>,
}

/// Parameters for opening a specific step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenStep {
    /// ID of the form
    pub id: u64,
    /// Index of the step to open (0-based)
    pub index: usize,
}

/// Parameters for operations on one step, defaulting to the active step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepTarget {
    /// ID of the form
    pub id: u64,
    /// Index of the step (0-based); the active step when absent
    #[serde(default)]
    pub index: Option<usize>,
}

/// Parameters for marking a step uncompleted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UncompleteStep {
    /// ID of the form
    pub id: u64,
    /// Index of the step (0-based); the active step when absent
    #[serde(default)]
    pub index: Option<usize>,
    /// Advisory message explaining what needs fixing
    #[serde(default)]
    pub message: Option<String>,
}

/// Parameters for replacing a step's title or subtitle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetStepText {
    /// ID of the form
    pub id: u64,
    /// Index of the step (0-based)
    pub index: usize,
    /// New text
    pub text: String,
}
