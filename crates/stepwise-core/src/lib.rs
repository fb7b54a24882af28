//! Core library for stepwise, a linear multi-step form engine.
//!
//! A form is an ordered sequence of steps. Each step opens only once every
//! step before it is completed, an optional confirmation step is appended
//! after the caller's steps, and the form ends with a submission. The crate is
//! split into:
//!
//! - **State machine** ([`StepSet`], [`StepperController`]): navigation and
//!   completion rules, independent of any user interface. Rendering is
//!   delegated to a [`StepperHost`].
//! - **Session store** ([`FormStore`], [`Database`]): SQLite persistence of
//!   form sessions, each operation replayed through the state machine.
//! - **Display** ([`display`]): markdown `Display` wrappers for terminal
//!   output.
//!
//! # Quick Start
//!
//! ```rust
//! use stepwise_core::{EventLog, FormConfig, StepperController};
//!
//! let config = FormConfig::new(vec!["Account".into(), "Profile".into()]);
//! let mut form = StepperController::from_config(&config, EventLog::new())?;
//! form.initialize();
//!
//! form.mark_active_step_completed()?;
//! assert!(form.go_to_next_step()?);
//! form.mark_active_step_completed()?;
//! assert!(form.go_to_next_step()?);
//!
//! // The confirmation step completes itself when opened
//! assert!(form.is_ready_to_submit());
//! form.submit();
//! assert_eq!(form.displayed_progress(), form.max_progress());
//! # Ok::<(), stepwise_core::StepwiseError>(())
//! ```

pub mod config;
pub mod controller;
pub mod db;
pub mod display;
pub mod error;
pub mod host;
pub mod models;
pub mod params;
pub mod step_set;
pub mod store;

// Re-export commonly used types
pub use config::{FormConfig, DEFAULT_CONFIRMATION_TITLE};
pub use controller::{Navigation, StepButton, StepperController};
pub use db::{Database, SessionUpdate};
pub use display::{DeleteResult, EventLines, FormSummaries, FormView, StepOutcome, StepView};
pub use error::{Result, StepwiseError};
pub use host::{EventLog, FormEvent, StepperHost};
pub use models::{FormFilter, FormRecord, FormSnapshot, FormSummary, Step, StepState};
pub use step_set::StepSet;
pub use store::{FormStore, FormStoreBuilder};
