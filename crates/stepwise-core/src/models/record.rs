//! Stored form session records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::FormSnapshot;
use crate::config::FormConfig;

/// A form session as persisted by the session store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormRecord {
    /// Unique identifier for the session
    pub id: u64,

    /// Human readable name of the form
    pub name: String,

    /// Step titles and display options the form is rebuilt from
    pub config: FormConfig,

    /// Last saved navigation state
    pub snapshot: FormSnapshot,

    /// Advisory error message per step, if any
    #[serde(default)]
    pub errors: Vec<Option<String>>,

    /// Whether the form has been submitted
    #[serde(default)]
    pub submitted: bool,

    /// Timestamp when the session was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the session was last modified (UTC)
    pub updated_at: Timestamp,
}

/// Summary information about a stored form with progress statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSummary {
    /// Form ID
    pub id: u64,
    /// Name of the form
    pub name: String,
    /// Number of completed steps
    pub completed_steps: u32,
    /// Total number of steps, confirmation step included
    pub total_steps: u32,
    /// Index of the active step
    pub active_step: u32,
    /// Whether the form has been submitted
    pub submitted: bool,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
}

impl From<&FormRecord> for FormSummary {
    fn from(record: &FormRecord) -> Self {
        let total_steps = record.snapshot.completed_steps.len() as u32;
        let completed_steps = record.snapshot.completed_count() as u32;

        Self {
            id: record.id,
            name: record.name.clone(),
            completed_steps,
            total_steps,
            active_step: record.snapshot.active_step_index as u32,
            submitted: record.submitted,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
