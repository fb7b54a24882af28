//! Loading, applying and persisting a single form session.

use log::debug;

use super::{run_blocking, FormStore};
use crate::{
    config::FormConfig,
    controller::StepperController,
    db::{Database, SessionUpdate},
    display::{FormView, StepOutcome},
    error::{Result, StepwiseError},
    host::EventLog,
    models::{FormFilter, FormRecord},
};

/// Rebuilds the live controller of a stored session.
///
/// The stored snapshot already reflects every opening transition, so it is
/// rehydrated as is rather than resumed. The returned controller's event log
/// is empty and only records what the next operation triggers.
pub fn load_controller(record: &FormRecord) -> Result<StepperController<EventLog>> {
    let mut form = StepperController::from_config(&record.config, EventLog::new())?;
    form.initialize();
    form.rehydrate(&record.snapshot)?;
    form.restore_error_messages(&record.errors)?;
    if record.submitted {
        form.restore_submitted();
    }
    form.host_mut().clear();
    Ok(form)
}

fn fetch_record(db: &Database, id: u64) -> Result<FormRecord> {
    db.get_form(id)?.ok_or(StepwiseError::SessionNotFound { id })
}

impl FormStore {
    /// Retrieves a stored session by ID.
    pub async fn get_form(&self, id: u64) -> Result<Option<FormRecord>> {
        let db_path = self.db_path.clone();

        run_blocking(move || Database::new(&db_path)?.get_form(id)).await
    }

    /// Lists stored sessions matching `filter`, most recently updated first.
    pub async fn list_records(&self, filter: FormFilter) -> Result<Vec<FormRecord>> {
        let db_path = self.db_path.clone();

        run_blocking(move || Database::new(&db_path)?.list_forms(&filter)).await
    }

    /// Deletes a stored session, returning the record that was removed.
    ///
    /// # Errors
    ///
    /// Returns `StepwiseError::SessionNotFound` if no session has this ID.
    pub async fn remove_form(&self, id: u64) -> Result<FormRecord> {
        let db_path = self.db_path.clone();

        run_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let record = fetch_record(&db, id)?;
            if !db.delete_form(id)? {
                return Err(StepwiseError::SessionNotFound { id });
            }
            Ok(record)
        })
        .await
    }

    /// Loads session `id`, runs `op` against its controller and persists the
    /// result.
    ///
    /// `op` reports whether the state machine accepted the request. Changed
    /// step text, changed state and a completed submission are written in one
    /// transaction; nothing is written when nothing changed.
    ///
    /// # Errors
    ///
    /// Returns `StepwiseError::SessionNotFound` for an unknown ID,
    /// `StepwiseError::SessionSubmitted` for a submitted session, and any
    /// error `op` returns. Nothing is persisted when `op` fails.
    pub async fn apply<F>(&self, id: u64, action: String, op: F) -> Result<StepOutcome>
    where
        F: FnOnce(&mut StepperController<EventLog>) -> Result<bool> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        run_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let record = fetch_record(&db, id)?;
            if record.submitted {
                return Err(StepwiseError::SessionSubmitted { id });
            }

            let mut form = load_controller(&record)?;
            let applied = op(&mut form)?;
            let events = form.host_mut().drain();
            debug!("{action} on form {id}: applied={applied}, {} events", events.len());

            let config = form.config();
            let snapshot = form.snapshot();
            let errors = form.error_messages();
            let state_changed = snapshot != record.snapshot || errors != record.errors.as_slice();
            db.update_session(
                id,
                &SessionUpdate {
                    config: (config != record.config).then_some(&config),
                    state: state_changed.then_some((&snapshot, errors)),
                    submitted: form.is_submitted().then_some(&snapshot),
                },
            )?;

            let record = fetch_record(&db, id)?;
            let view = FormView::new(&record, &form)?;
            Ok(StepOutcome::new(action, applied, events, view))
        })
        .await
    }

    /// Renders session `id` without changing it.
    pub async fn view_form(&self, id: u64) -> Result<FormView> {
        let db_path = self.db_path.clone();

        run_blocking(move || {
            let db = Database::new(&db_path)?;
            let record = fetch_record(&db, id)?;
            let form = load_controller(&record)?;
            FormView::new(&record, &form)
        })
        .await
    }

    /// Builds, initializes and stores a new session.
    pub(crate) async fn insert_form(&self, name: String, config: FormConfig) -> Result<StepOutcome> {
        let db_path = self.db_path.clone();

        run_blocking(move || {
            let mut form = StepperController::from_config(&config, EventLog::new())?;
            form.initialize();
            let events = form.host_mut().drain();

            let mut db = Database::new(&db_path)?;
            let record = db.create_form(&name, &form.config(), &form.snapshot())?;
            let view = FormView::new(&record, &form)?;
            Ok(StepOutcome::new(
                format!("Created form '{name}' with ID {}", record.id),
                true,
                events,
                view,
            ))
        })
        .await
    }
}
