//! Row mapping helpers shared by the form queries.

use jiff::Timestamp;
use rusqlite::{types::Type, Row};
use serde::de::DeserializeOwned;

use crate::models::FormRecord;

/// Columns selected by every form query, in the order [`row_to_record`]
/// expects them.
pub(crate) const FORM_COLUMNS: &str =
    "id, name, config, snapshot, errors, submitted, created_at, updated_at";

/// Parses a JSON text column, reporting failures as conversion errors.
fn json_column<T: DeserializeOwned>(row: &Row<'_>, index: usize) -> rusqlite::Result<T> {
    let text: String = row.get(index)?;
    serde_json::from_str(&text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

/// Parses an RFC 3339 timestamp column.
fn timestamp_column(row: &Row<'_>, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

/// Maps a row selected with [`FORM_COLUMNS`] to a record.
pub(crate) fn row_to_record(row: &Row<'_>) -> rusqlite::Result<FormRecord> {
    Ok(FormRecord {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        config: json_column(row, 2)?,
        snapshot: json_column(row, 3)?,
        errors: json_column(row, 4)?,
        submitted: row.get(5)?,
        created_at: timestamp_column(row, 6)?,
        updated_at: timestamp_column(row, 7)?,
    })
}
