//! Step navigation and completion state machine.
//!
//! [`StepperController`] owns a [`StepSet`], the active-step cursor and the
//! host that renders the form. Its own state is the pair
//! `(active_step, step_set)`; every step's [`StepState`] is a pure function of
//! that pair.
//!
//! ## Submodules
//!
//! - [`navigation`]: `go_to_step` and its sugar, derived navigation affordances
//! - [`completion`]: marking steps completed or uncompleted, submission
//! - [`persistence`]: snapshot and restore
//!
//! Index errors are programmer errors and surface as
//! [`StepwiseError::IndexOutOfRange`]; navigating to a locked step is a
//! policy decision and is silently refused.
//!
//! # Examples
//!
//! ```rust
//! use stepwise_core::{EventLog, FormEvent, StepSet, StepperController};
//!
//! let set = StepSet::new(vec!["Name".into(), "Email".into()], None, true)?;
//! let mut form = StepperController::new(set, EventLog::new());
//! form.initialize();
//!
//! // Step 1 stays locked until step 0 is completed
//! assert!(!form.go_to_step(1, false)?);
//! form.mark_completed(0)?;
//! assert!(form.go_to_step(1, false)?);
//! assert_eq!(form.active_step(), 1);
//! assert_eq!(form.host().events().last(), Some(&FormEvent::Opening(1)));
//! # Ok::<(), stepwise_core::StepwiseError>(())
//! ```

use crate::{
    config::{DEFAULT_CONFIRMATION_TITLE, FormConfig},
    error::{Result, StepwiseError},
    host::StepperHost,
    models::StepState,
    step_set::StepSet,
};

pub mod completion;
pub mod navigation;
pub mod persistence;


pub use navigation::{Navigation, StepButton};

/// Drives a form through its steps on behalf of a host.
pub struct StepperController<H: StepperHost> {
    pub(crate) step_set: StepSet,
    pub(crate) host: H,
    pub(crate) contents: Vec<H::Content>,
    pub(crate) errors: Vec<Option<String>>,
    pub(crate) active_step: usize,
    pub(crate) submitted: bool,
    pub(crate) display_bottom_navigation: bool,
    pub(crate) show_last_step_next_button: bool,
}

impl<H: StepperHost> StepperController<H> {
    /// Creates a controller with default display options. Call
    /// [`initialize`](Self::initialize) before driving it.
    pub fn new(step_set: StepSet, host: H) -> Self {
        let defaults = FormConfig::default();
        let len = step_set.len();
        Self {
            step_set,
            host,
            contents: Vec::new(),
            errors: vec![None; len],
            active_step: 0,
            submitted: false,
            display_bottom_navigation: defaults.display_bottom_navigation,
            show_last_step_next_button: defaults.show_last_step_next_button,
        }
    }

    /// Builds the step set described by `config` and a controller over it.
    ///
    /// # Errors
    ///
    /// Returns `StepwiseError::InvalidConfiguration` when the titles or
    /// subtitles are malformed.
    pub fn from_config(config: &FormConfig, host: H) -> Result<Self> {
        let step_set = StepSet::from_config(config)?;
        let mut controller = Self::new(step_set, host);
        controller.display_bottom_navigation = config.display_bottom_navigation;
        controller.show_last_step_next_button = config.show_last_step_next_button;
        Ok(controller)
    }

    /// Opens step 0.
    ///
    /// The first call also asks the host for the body of every
    /// caller-supplied step. Later calls only re-run the opening transition.
    pub fn initialize(&mut self) {
        if self.contents.is_empty() {
            self.contents = (0..self.step_set.content_len())
                .map(|index| self.host.create_step_content(index))
                .collect();
        }
        // Step 0 is always a caller-supplied step, never the confirmation step
        self.active_step = 0;
        self.host.on_step_opening(0);
    }

    pub fn active_step(&self) -> usize {
        self.active_step
    }

    pub fn step_set(&self) -> &StepSet {
        &self.step_set
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Total number of steps, confirmation step included.
    pub fn len(&self) -> usize {
        self.step_set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.step_set.is_empty()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn display_bottom_navigation(&self) -> bool {
        self.display_bottom_navigation
    }

    /// Configuration that rebuilds this form's steps and options, reflecting
    /// any title or subtitle changes made since construction.
    pub fn config(&self) -> FormConfig {
        let content_len = self.step_set.content_len();
        let subtitles = self.step_set.has_subtitles().then(|| {
            self.step_set
                .iter()
                .take(content_len)
                .map(|step| step.subtitle.clone().unwrap_or_default())
                .collect()
        });
        let confirmation_title = self
            .step_set
            .confirmation_index()
            .and_then(|index| self.step_set.title(index).ok())
            .unwrap_or(DEFAULT_CONFIRMATION_TITLE)
            .to_string();

        FormConfig {
            titles: self
                .step_set
                .iter()
                .take(content_len)
                .map(|step| step.title.clone())
                .collect(),
            subtitles,
            confirmation_enabled: self.step_set.confirmation_enabled(),
            confirmation_title,
            display_bottom_navigation: self.display_bottom_navigation,
            show_last_step_next_button: self.show_last_step_next_button,
        }
    }

    /// Host-supplied body of step `index`; `None` for the confirmation step or
    /// before initialization.
    pub fn content(&self, index: usize) -> Result<Option<&H::Content>> {
        self.check_index(index)?;
        Ok(self.contents.get(index))
    }

    /// Advisory error message recorded for step `index`.
    pub fn error_message(&self, index: usize) -> Result<Option<&str>> {
        self.check_index(index)?;
        Ok(self.errors[index].as_deref())
    }

    /// Advisory error messages of every step, in order.
    pub fn error_messages(&self) -> &[Option<String>] {
        &self.errors
    }

    pub fn is_active_step_completed(&self) -> bool {
        self.step_set
            .is_completed(self.active_step)
            .unwrap_or(false)
    }

    pub fn any_completed(&self) -> bool {
        self.step_set.any_completed()
    }

    /// Visual state of step `index`.
    pub fn step_state(&self, index: usize) -> Result<StepState> {
        let completed = self.step_set.is_completed(index)?;
        let prior_completed = self.step_set.all_prior_completed(index)?;
        Ok(StepState::classify(
            index,
            self.active_step,
            completed,
            prior_completed,
        ))
    }

    /// Visual state of every step, in order.
    pub fn step_states(&self) -> Vec<StepState> {
        let mut prior_completed = true;
        self.step_set
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let state =
                    StepState::classify(index, self.active_step, step.completed, prior_completed);
                prior_completed &= step.completed;
                state
            })
            .collect()
    }

    /// Number of completed steps, confirmation step included.
    pub fn progress(&self) -> usize {
        self.step_set.completed_count()
    }

    /// Upper bound of [`progress`](Self::progress).
    pub fn max_progress(&self) -> usize {
        self.step_set.len()
    }

    /// Value a progress indicator should show: the full bar once the form
    /// has been submitted, the completed count otherwise.
    pub fn displayed_progress(&self) -> usize {
        if self.submitted {
            self.max_progress()
        } else {
            self.progress()
        }
    }

    /// Replaces a step title; blank titles are ignored.
    pub fn set_step_title(&mut self, index: usize, title: &str) -> Result<bool> {
        self.step_set.set_title(index, title)
    }

    /// Replaces a step subtitle; see [`StepSet::set_subtitle`].
    pub fn set_step_subtitle(&mut self, index: usize, subtitle: &str) -> Result<bool> {
        self.step_set.set_subtitle(index, subtitle)
    }

    pub fn set_active_step_subtitle(&mut self, subtitle: &str) -> Result<bool> {
        self.set_step_subtitle(self.active_step, subtitle)
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if index < self.step_set.len() {
            Ok(())
        } else {
            Err(StepwiseError::index_out_of_range(index, self.step_set.len()))
        }
    }
}
