//! CSV loading for the enum table.
//!
//! The table is loaded once per run. Header validation happens before any
//! row is deserialized: a missing required column is a hard validation error
//! reported up front, not a per-row failure halfway through the file.

use std::path::Path;

use tracing::info;

use crate::core::errors::{EnumdefError, Result};
use crate::core::table::{EnumRow, EnumTable};

/// Columns every input table must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = ["type_name", "enum", "enum_definition", "source", "term_id"];

/// Load the enum table from a CSV file.
///
/// Validates that all required columns are present in the header before
/// deserializing rows. Row order is preserved.
pub fn load_enum_table(path: impl AsRef<Path>) -> Result<EnumTable> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|err| EnumdefError::Input {
        message: format!("Failed to open enum CSV: {}", path.display()),
        source: Some(Box::new(err)),
    })?;

    validate_columns(reader.headers()?)?;

    let rows = reader
        .deserialize()
        .collect::<std::result::Result<Vec<EnumRow>, csv::Error>>()?;

    info!("loaded {} rows from {}", rows.len(), path.display());
    Ok(EnumTable::from_rows(rows))
}

/// Check that the header record contains every required column.
fn validate_columns(headers: &csv::StringRecord) -> Result<()> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .copied()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(EnumdefError::validation_field(
            format!("CSV missing required columns: {}", missing.join(", ")),
            missing.join(", "),
        ))
    }
}
