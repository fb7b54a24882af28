//! Step-level operations on stored form sessions.
//!
//! Each handler maps one request onto the state machine. Requests the state
//! machine refuses (a locked step, a disabled button) are not errors; the
//! returned [`StepOutcome`] reports `applied: false` and the unchanged form.

use super::FormStore;
use crate::{
    display::StepOutcome,
    error::Result,
    params::{Id, OpenStep, SetStepText, StepTarget, UncompleteStep},
};

impl FormStore {
    /// Opens step `index` if it is reachable.
    pub async fn open_step(&self, params: &OpenStep) -> Result<StepOutcome> {
        let index = params.index;
        self.apply(params.id, format!("Open step {index}"), move |form| {
            form.go_to_step(index, false)
        })
        .await
    }

    /// Opens the step after the active one.
    pub async fn next_step(&self, params: &Id) -> Result<StepOutcome> {
        self.apply(params.id, "Go to next step".to_string(), |form| {
            form.go_to_next_step()
        })
        .await
    }

    /// Opens the step before the active one.
    pub async fn previous_step(&self, params: &Id) -> Result<StepOutcome> {
        self.apply(params.id, "Go to previous step".to_string(), |form| {
            form.go_to_previous_step()
        })
        .await
    }

    /// Marks a step completed, the active step when no index is given.
    pub async fn complete_step(&self, params: &StepTarget) -> Result<StepOutcome> {
        let index = params.index;
        self.apply(params.id, "Complete step".to_string(), move |form| {
            let index = index.unwrap_or_else(|| form.active_step());
            form.mark_completed(index)?;
            Ok(true)
        })
        .await
    }

    /// Marks a step uncompleted with an optional advisory message.
    pub async fn uncomplete_step(&self, params: &UncompleteStep) -> Result<StepOutcome> {
        let index = params.index;
        let message = params.message.clone();
        self.apply(params.id, "Uncomplete step".to_string(), move |form| {
            let index = index.unwrap_or_else(|| form.active_step());
            form.mark_uncompleted(index, message.as_deref())?;
            Ok(true)
        })
        .await
    }

    /// Presses the inline button of the active step.
    pub async fn press_button(&self, params: &Id) -> Result<StepOutcome> {
        self.apply(params.id, "Press step button".to_string(), |form| {
            let active = form.active_step();
            form.press_step_button(active)
        })
        .await
    }

    /// Replaces a step title. Blank titles are ignored.
    pub async fn set_title(&self, params: &SetStepText) -> Result<StepOutcome> {
        let index = params.index;
        let text = params.text.clone();
        self.apply(params.id, format!("Set title of step {index}"), move |form| {
            form.set_step_title(index, &text)
        })
        .await
    }

    /// Replaces a step subtitle. Forms created without subtitles ignore it.
    pub async fn set_subtitle(&self, params: &SetStepText) -> Result<StepOutcome> {
        let index = params.index;
        let text = params.text.clone();
        self.apply(
            params.id,
            format!("Set subtitle of step {index}"),
            move |form| form.set_step_subtitle(index, &text),
        )
        .await
    }
}
