//! Form session CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::utils::{row_to_record, FORM_COLUMNS};
use crate::{
    config::FormConfig,
    error::{DatabaseResultExt, Result, StepwiseError},
    models::{FormFilter, FormRecord, FormSnapshot},
};

const INSERT_FORM_SQL: &str = "INSERT INTO forms (name, config, snapshot, errors, submitted, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, 0, ?5, ?6)";
const UPDATE_STATE_SQL: &str =
    "UPDATE forms SET snapshot = ?1, errors = ?2, updated_at = ?3 WHERE id = ?4";
const UPDATE_CONFIG_SQL: &str = "UPDATE forms SET config = ?1, updated_at = ?2 WHERE id = ?3";
const UPDATE_SUBMITTED_SQL: &str =
    "UPDATE forms SET submitted = 1, snapshot = ?1, updated_at = ?2 WHERE id = ?3 AND submitted = 0";
const DELETE_FORM_SQL: &str = "DELETE FROM forms WHERE id = ?1";

/// The changes one operation made to a stored session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionUpdate<'a> {
    /// Replacement configuration, when step text changed
    pub config: Option<&'a FormConfig>,
    /// New navigation state and per-step error messages
    pub state: Option<(&'a FormSnapshot, &'a [Option<String>])>,
    /// Final snapshot, when the operation submitted the form
    pub submitted: Option<&'a FormSnapshot>,
}

impl SessionUpdate<'_> {
    pub fn is_empty(&self) -> bool {
        self.config.is_none() && self.state.is_none() && self.submitted.is_none()
    }
}

impl super::Database {
    /// Stores a new form session and returns its record.
    pub fn create_form(
        &mut self,
        name: &str,
        config: &FormConfig,
        snapshot: &FormSnapshot,
    ) -> Result<FormRecord> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();
        let errors: Vec<Option<String>> = vec![None; snapshot.completed_steps.len()];

        tx.execute(
            INSERT_FORM_SQL,
            params![
                name,
                serde_json::to_string(config)?,
                serde_json::to_string(snapshot)?,
                serde_json::to_string(&errors)?,
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert form")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(FormRecord {
            id,
            name: name.to_string(),
            config: config.clone(),
            snapshot: snapshot.clone(),
            errors,
            submitted: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a form session by its ID.
    pub fn get_form(&self, id: u64) -> Result<Option<FormRecord>> {
        let sql = format!("SELECT {FORM_COLUMNS} FROM forms WHERE id = ?1");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id as i64], row_to_record)
            .optional()
            .db_context("Failed to query form")
    }

    /// Lists form sessions, most recently updated first.
    pub fn list_forms(&self, filter: &FormFilter) -> Result<Vec<FormRecord>> {
        let mut query = format!("SELECT {FORM_COLUMNS} FROM forms");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if !filter.include_submitted {
            conditions.push("submitted = 0");
        }
        if let Some(ref name) = filter.name_contains {
            conditions.push("name LIKE ?");
            params_vec.push(Box::new(format!("%{name}%")));
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY updated_at DESC, id DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let param_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|p| p.as_ref()).collect();
        let forms = stmt
            .query_map(param_refs.as_slice(), row_to_record)
            .db_context("Failed to query forms")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read form rows")?;

        Ok(forms)
    }

    /// Writes every change of one operation in a single transaction.
    ///
    /// Nothing is written unless all parts succeed.
    ///
    /// # Errors
    ///
    /// Returns `StepwiseError::SessionNotFound` if no session has this ID and
    /// `StepwiseError::SessionSubmitted` when submitting a session that was
    /// already submitted.
    pub fn update_session(&mut self, id: u64, update: &SessionUpdate<'_>) -> Result<()> {
        if update.is_empty() {
            return Ok(());
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        let now_str = Timestamp::now().to_string();

        if let Some(config) = update.config {
            let changed = tx
                .execute(
                    UPDATE_CONFIG_SQL,
                    params![serde_json::to_string(config)?, &now_str, id as i64],
                )
                .db_context("Failed to update form configuration")?;
            if changed == 0 {
                return Err(StepwiseError::SessionNotFound { id });
            }
        }

        if let Some((snapshot, errors)) = update.state {
            let changed = tx
                .execute(
                    UPDATE_STATE_SQL,
                    params![
                        serde_json::to_string(snapshot)?,
                        serde_json::to_string(errors)?,
                        &now_str,
                        id as i64
                    ],
                )
                .db_context("Failed to save form state")?;
            if changed == 0 {
                return Err(StepwiseError::SessionNotFound { id });
            }
        }

        if let Some(snapshot) = update.submitted {
            let changed = tx
                .execute(
                    UPDATE_SUBMITTED_SQL,
                    params![serde_json::to_string(snapshot)?, &now_str, id as i64],
                )
                .db_context("Failed to mark form submitted")?;
            if changed == 0 {
                return Err(StepwiseError::SessionSubmitted { id });
            }
        }

        tx.commit().db_context("Failed to commit transaction")
    }

    /// Deletes a form session. Returns `false` if it did not exist.
    pub fn delete_form(&mut self, id: u64) -> Result<bool> {
        let changed = self
            .connection
            .execute(DELETE_FORM_SQL, params![id as i64])
            .db_context("Failed to delete form")?;

        Ok(changed > 0)
    }
}
