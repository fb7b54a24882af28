//! Locating and preparing the session database.

use std::path::{Path, PathBuf};

use log::debug;

use super::{run_blocking, FormStore};
use crate::{
    db::Database,
    error::{Result, StepwiseError},
};

const DATA_PREFIX: &str = "stepwise";
const DATABASE_FILE: &str = "stepwise.db";

/// Configures where a [`FormStore`] keeps its sessions.
#[derive(Debug, Clone, Default)]
pub struct FormStoreBuilder {
    database_path: Option<PathBuf>,
}

impl FormStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `path` as the database file when given.
    ///
    /// Without one the store lives at `$XDG_DATA_HOME/stepwise/stepwise.db`,
    /// usually `~/.local/share/stepwise/stepwise.db`.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Opens the store, creating its directory and schema on first use.
    ///
    /// # Errors
    ///
    /// Returns `StepwiseError::XdgDirectory` if no default location can be
    /// found, `StepwiseError::FileSystem` if the directory cannot be created
    /// and `StepwiseError::Database` if the schema cannot be set up.
    pub async fn build(self) -> Result<FormStore> {
        let db_path = match self.database_path {
            Some(path) => {
                ensure_parent_dir(&path)?;
                path
            }
            // place_data_file creates the directory itself
            None => xdg::BaseDirectories::with_prefix(DATA_PREFIX)
                .place_data_file(DATABASE_FILE)
                .map_err(|e| StepwiseError::XdgDirectory(e.to_string()))?,
        };

        debug!("Opening form database at {}", db_path.display());
        let schema_path = db_path.clone();
        run_blocking(move || Database::new(&schema_path).map(drop)).await?;

        Ok(FormStore::new(db_path))
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| StepwiseError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })
        }
        _ => Ok(()),
    }
}
