//! Restorable form state.

use serde::{Deserialize, Serialize};

/// The minimal state needed to resume an interrupted form.
///
/// Titles and subtitles are not part of the snapshot; they are supplied again
/// when the step set is rebuilt.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormSnapshot {
    /// Index of the active step
    pub active_step_index: usize,

    /// Completion flag of every step, confirmation step included
    pub completed_steps: Vec<bool>,
}

impl FormSnapshot {
    /// Snapshot of a freshly initialized form with `len` steps.
    pub fn initial(len: usize) -> Self {
        Self {
            active_step_index: 0,
            completed_steps: vec![false; len],
        }
    }

    /// Number of completed steps recorded in the snapshot.
    pub fn completed_count(&self) -> usize {
        self.completed_steps.iter().filter(|done| **done).count()
    }
}
