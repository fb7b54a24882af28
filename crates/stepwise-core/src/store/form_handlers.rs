//! Form-level operations returning display wrapper types.

use log::info;

use super::FormStore;
use crate::{
    display::{DeleteResult, FormSummaries, FormView, StepOutcome},
    error::{Result, StepwiseError},
    models::{FormFilter, FormSummary},
    params::{CreateForm, Id, ListForms},
};

impl FormStore {
    /// Creates a form session and opens its first step.
    ///
    /// # Errors
    ///
    /// Returns `StepwiseError::InvalidConfiguration` for an empty name, no
    /// titles, a blank title or a subtitle count that does not match.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use stepwise_core::{FormConfig, FormStoreBuilder, params::CreateForm};
    /// # async {
    /// let store = FormStoreBuilder::new().build().await?;
    /// let outcome = store
    ///     .create_form(&CreateForm {
    ///         name: "Signup".to_string(),
    ///         config: FormConfig::new(vec!["Name".into(), "Email".into()]),
    ///     })
    ///     .await?;
    /// assert_eq!(outcome.form.active_step, 0);
    /// # Result::<(), stepwise_core::StepwiseError>::Ok(())
    /// # };
    /// ```
    pub async fn create_form(&self, params: &CreateForm) -> Result<StepOutcome> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(StepwiseError::invalid_configuration("a form needs a name"));
        }

        let outcome = self
            .insert_form(name.to_string(), params.config.clone())
            .await?;
        info!(
            "Created form {} '{}' with {} steps",
            outcome.form.id,
            outcome.form.name,
            outcome.form.steps.len()
        );
        Ok(outcome)
    }

    /// Shows a form session, submitted or not.
    pub async fn show_form(&self, params: &Id) -> Result<FormView> {
        self.view_form(params.id).await
    }

    /// Lists form sessions as summaries; submitted forms only when asked.
    pub async fn list_forms(&self, params: &ListForms) -> Result<FormSummaries> {
        let filter = FormFilter {
            include_submitted: params.all,
            name_contains: params.name_contains.clone(),
        };
        let records = self.list_records(filter).await?;
        Ok(FormSummaries(records.iter().map(FormSummary::from).collect()))
    }

    /// Deletes a form session.
    pub async fn delete_form(&self, params: &Id) -> Result<DeleteResult<FormSummary>> {
        let record = self.remove_form(params.id).await?;
        info!("Deleted form {} '{}'", record.id, record.name);
        Ok(DeleteResult::new(FormSummary::from(&record)))
    }

    /// Submits a form whose final step is active and completed.
    ///
    /// # Errors
    ///
    /// Returns `StepwiseError::NotReadyToSubmit` while the final step is not
    /// both active and completed, and `StepwiseError::SessionSubmitted` when
    /// the form was already submitted.
    pub async fn submit_form(&self, params: &Id) -> Result<StepOutcome> {
        let id = params.id;
        let outcome = self
            .apply(id, format!("Submitted form {id}"), move |form| {
                if !form.is_ready_to_submit() {
                    return Err(StepwiseError::NotReadyToSubmit { id });
                }
                form.submit();
                Ok(true)
            })
            .await?;
        info!("Submitted form {id}");
        Ok(outcome)
    }
}
