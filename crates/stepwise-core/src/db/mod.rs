//! Database operations and SQLite management for form sessions.
//!
//! This module handles the SQLite connection, schema management and the
//! queries behind the session store. Each form is one row holding its
//! configuration, last snapshot and error messages as JSON.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod form_queries;
pub mod migrations;
pub mod utils;

pub use form_queries::SessionUpdate;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
