//! Rendered view of a live form.
//!
//! [`FormView`] captures everything a front end shows for a form session at
//! one moment: each step's derived state, its inline button, the navigation
//! bar and progress. It is built from a stored record and the controller that
//! record was loaded into, so it never disagrees with the state machine.

use std::fmt;

use jiff::Timestamp;
use serde::Serialize;

use super::datetime::LocalDateTime;
use crate::{
    controller::{Navigation, StepButton, StepperController},
    error::Result,
    host::StepperHost,
    models::{FormRecord, StepState},
};

const PROGRESS_BAR_WIDTH: usize = 20;

/// One step as presented to the user.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StepView {
    pub index: usize,
    pub title: String,
    pub subtitle: Option<String>,
    pub state: StepState,
    pub completed: bool,
    pub is_confirmation: bool,
    pub error: Option<String>,
    pub button: Option<StepButton>,
    pub button_enabled: bool,
}

/// A form session as presented to the user.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FormView {
    pub id: u64,
    pub name: String,
    pub steps: Vec<StepView>,
    pub active_step: usize,
    pub progress: usize,
    pub displayed_progress: usize,
    pub max_progress: usize,
    pub submitted: bool,
    pub ready_to_submit: bool,
    pub navigation: Navigation,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl FormView {
    /// Builds the view of `record` as currently held by `form`.
    pub fn new<H: StepperHost>(record: &FormRecord, form: &StepperController<H>) -> Result<Self> {
        let states = form.step_states();
        let mut steps = Vec::with_capacity(form.len());

        for (index, (step, state)) in form.step_set().iter().zip(states).enumerate() {
            steps.push(StepView {
                index,
                title: step.title.clone(),
                subtitle: step.subtitle.clone(),
                state,
                completed: step.completed,
                is_confirmation: step.is_confirmation,
                error: form.error_message(index)?.map(str::to_string),
                button: form.step_button(index)?,
                button_enabled: form.step_button_enabled(index)?,
            });
        }

        Ok(Self {
            id: record.id,
            name: record.name.clone(),
            steps,
            active_step: form.active_step(),
            progress: form.progress(),
            displayed_progress: form.displayed_progress(),
            max_progress: form.max_progress(),
            submitted: form.is_submitted(),
            ready_to_submit: form.is_ready_to_submit(),
            navigation: form.navigation(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }

    pub fn active(&self) -> Option<&StepView> {
        self.steps.get(self.active_step)
    }

    fn status(&self) -> &'static str {
        if self.submitted {
            "submitted"
        } else if self.ready_to_submit {
            "ready to submit"
        } else {
            "in progress"
        }
    }
}

/// Text progress bar such as `[██████░░░░] 3/5`.
fn progress_bar(done: usize, total: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        done.min(total) * PROGRESS_BAR_WIDTH / total
    };
    format!(
        "[{}{}] {done}/{total}",
        "█".repeat(filled),
        "░".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

impl fmt::Display for StepView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.index,
            self.title,
            self.state.with_icon()
        )?;
        writeln!(f)?;

        // Subtitles only show while the step is collapsed
        if let Some(subtitle) = self.subtitle.as_ref().filter(|_| self.state != StepState::Active) {
            writeln!(f, "*{subtitle}*")?;
            writeln!(f)?;
        }

        if let Some(error) = &self.error {
            writeln!(f, "> ⚠ {error}")?;
            writeln!(f)?;
        }

        if let Some(button) = self.button.filter(|_| self.state == StepState::Active) {
            let availability = if self.button_enabled {
                "enabled"
            } else {
                "disabled"
            };
            writeln!(f, "- **Button**: {button} ({availability})")?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status())?;
        writeln!(
            f,
            "- Progress: {}",
            progress_bar(self.displayed_progress, self.max_progress)
        )?;
        if let Some(active) = self.active() {
            writeln!(f, "- Active step: {}. {}", active.index, active.title)?;
        }
        if self.navigation.visible {
            let previous = if self.navigation.previous_enabled {
                "◀ previous"
            } else {
                "◁ previous"
            };
            let next = if self.navigation.next_enabled {
                "next ▶"
            } else {
                "next ▷"
            };
            writeln!(f, "- Navigation: {previous} | {next}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        writeln!(f, "\n## Steps")?;
        writeln!(f)?;
        for step in &self.steps {
            write!(f, "{step}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::FormConfig, host::EventLog, models::FormSnapshot};

    fn create_view(titles: &[&str], confirmation: bool, completed: &[usize]) -> FormView {
        let config = FormConfig {
            confirmation_enabled: confirmation,
            subtitles: Some(titles.iter().map(|t| format!("About {t}")).collect()),
            ..FormConfig::new(titles.iter().map(|t| t.to_string()).collect())
        };
        let mut form = StepperController::from_config(&config, EventLog::new()).unwrap();
        form.initialize();
        for index in completed {
            form.mark_completed(*index).unwrap();
        }

        let now = Timestamp::from_second(1640995200).unwrap();
        let record = FormRecord {
            id: 1,
            name: "Signup".to_string(),
            config,
            snapshot: FormSnapshot::initial(form.len()),
            errors: vec![],
            submitted: false,
            created_at: now,
            updated_at: now,
        };
        FormView::new(&record, &form).unwrap()
    }

    #[test]
    fn test_view_reflects_controller() {
        let view = create_view(&["Name", "Email"], true, &[0]);

        assert_eq!(view.steps.len(), 3);
        assert_eq!(view.steps[0].state, StepState::Active);
        assert_eq!(view.steps[1].state, StepState::CollapsedIncomplete);
        assert_eq!(view.steps[2].state, StepState::Locked);
        assert!(view.steps[2].is_confirmation);
        assert_eq!(view.steps[0].button, Some(StepButton::Continue));
        assert!(view.steps[0].button_enabled);
        assert_eq!(view.progress, 1);
        assert_eq!(view.max_progress, 3);
        assert!(view.navigation.next_enabled);
        assert!(!view.ready_to_submit);
    }

    #[test]
    fn test_view_markdown() {
        let view = create_view(&["Name", "Email"], false, &[0]);
        let output = view.to_string();

        assert!(output.contains("# 1. Signup"));
        assert!(output.contains("- Status: in progress"));
        assert!(output.contains("- Active step: 0. Name"));
        assert!(output.contains("### 0. Name (➤ Active)"));
        assert!(output.contains("### 1. Email (○ Pending)"));
        assert!(output.contains("- **Button**: Continue (enabled)"));
        assert!(output.contains("*About Email*"));
        // The active step's subtitle is hidden
        assert!(!output.contains("*About Name*"));
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 4), format!("[{}] 0/4", "░".repeat(20)));
        assert_eq!(
            progress_bar(2, 4),
            format!("[{}{}] 2/4", "█".repeat(10), "░".repeat(10))
        );
        assert_eq!(progress_bar(4, 4), format!("[{}] 4/4", "█".repeat(20)));
    }
}
