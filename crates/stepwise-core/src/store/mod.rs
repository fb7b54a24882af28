//! Persistent form sessions.
//!
//! [`FormStore`] keeps form sessions in SQLite and drives them through the
//! [`StepperController`](crate::StepperController) one operation at a time.
//! Every operation opens the database on a blocking task, loads the session
//! into a live controller whose host is an [`EventLog`](crate::EventLog),
//! applies the request, persists what changed and returns a rendered
//! [`StepOutcome`](crate::display::StepOutcome).
//!
//! ## Submodules
//!
//! - [`builder`]: [`FormStoreBuilder`], database location and initialization
//! - [`form_ops`]: loading, applying and persisting a single session
//! - [`form_handlers`]: create, show, list, delete and submit
//! - [`step_handlers`]: navigation, completion and step text edits
//!
//! Submitted sessions are read-only; mutating one fails with
//! [`StepwiseError::SessionSubmitted`](crate::StepwiseError::SessionSubmitted).
//!
//! # Examples
//!
//! ```rust,no_run
//! use stepwise_core::{
//!     FormConfig, FormStoreBuilder,
//!     params::{CreateForm, StepTarget},
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = FormStoreBuilder::new()
//!     .with_database_path(Some("/tmp/stepwise.db"))
//!     .build()
//!     .await?;
//!
//! let created = store
//!     .create_form(&CreateForm {
//!         name: "Signup".to_string(),
//!         config: FormConfig::new(vec!["Name".into(), "Email".into()]),
//!     })
//!     .await?;
//!
//! let outcome = store
//!     .complete_step(&StepTarget { id: created.form.id, index: None })
//!     .await?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::error::{Result, StepwiseError};

pub mod builder;
pub mod form_handlers;
pub mod form_ops;
pub mod step_handlers;

#[cfg(test)]
mod tests;

pub use builder::FormStoreBuilder;

/// Handle to a database of form sessions.
#[derive(Debug, Clone)]
pub struct FormStore {
    pub(crate) db_path: PathBuf,
}

impl FormStore {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Location of the backing database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }
}

/// Runs database work on the blocking thread pool.
pub(crate) async fn run_blocking<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(work)
        .await
        .map_err(|e| StepwiseError::Configuration {
            message: format!("Task join error: {e}"),
        })?
}
