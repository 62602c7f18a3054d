//! The in-memory enum table and its extraction operations.
//!
//! An [`EnumTable`] is the ordered, read-only collection of rows loaded once
//! per run. The extraction operations defined here are the data-access leaf
//! of the pipeline: filter rows by enum type, list terms in row order, and
//! look up per-term metadata fields by first match.

use serde::Deserialize;
use tracing::debug;

use crate::core::errors::{EnumdefError, Result};

/// One record of the input table: a single term within an enum type.
///
/// Rows are immutable input; many rows share a `type_name`. The optional
/// metadata fields carry whatever the upstream spreadsheet exported and are
/// only filtered through nullness classification at entry-building time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnumRow {
    /// Enum-type key this row belongs to (e.g. "Color")
    pub type_name: String,
    /// The term literal (e.g. "RED")
    #[serde(rename = "enum")]
    pub term: String,
    /// Free-text definition of the term, if the table carries one
    #[serde(rename = "enum_definition")]
    pub definition: Option<String>,
    /// Ontology or vocabulary the term was sourced from
    pub source: Option<String>,
    /// External term identifier (e.g. an ontology ID)
    pub term_id: Option<String>,
}

/// Metadata fields an [`EnumRow`] can carry beyond the term itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumField {
    /// The `enum_definition` column
    Definition,
    /// The `source` column
    Source,
    /// The `term_id` column
    TermId,
}

impl EnumField {
    /// Output key this field is serialized under in a term record.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Definition => "definition",
            Self::Source => "source",
            Self::TermId => "term_id",
        }
    }
}

/// Ordered collection of enum rows, loaded once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumTable {
    rows: Vec<EnumRow>,
}

impl EnumTable {
    /// Wrap an ordered row collection.
    pub fn from_rows(rows: Vec<EnumRow>) -> Self {
        Self { rows }
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over rows in load order.
    pub fn iter(&self) -> impl Iterator<Item = &EnumRow> {
        self.rows.iter()
    }

    /// All rows belonging to the given enum type, in row order.
    ///
    /// Fails with a not-found error when zero rows match.
    pub fn rows_for_type(&self, type_name: &str) -> Result<Vec<&EnumRow>> {
        let matched: Vec<&EnumRow> = self
            .rows
            .iter()
            .filter(|row| row.type_name == type_name)
            .collect();

        if matched.is_empty() {
            return Err(EnumdefError::type_not_found(type_name));
        }

        debug!("pulled {} rows for enum type '{type_name}'", matched.len());
        Ok(matched)
    }

    /// The term of every row for the given type, in row order.
    ///
    /// Not de-duplicated and not sorted; duplicates are preserved.
    pub fn term_list(&self, type_name: &str) -> Result<Vec<String>> {
        Ok(self
            .rows_for_type(type_name)?
            .into_iter()
            .map(|row| row.term.clone())
            .collect())
    }

    /// Metadata field of the first row matching (type, term).
    ///
    /// Returns `Ok(None)` when the row exists but the field is absent, and a
    /// not-found error when no row matches. Lookup is by first match only;
    /// later duplicate (type, term) rows are never visible.
    pub fn field_for_term(
        &self,
        type_name: &str,
        term: &str,
        field: EnumField,
    ) -> Result<Option<&str>> {
        let row = self
            .rows_for_type(type_name)?
            .into_iter()
            .find(|row| row.term == term)
            .ok_or_else(|| EnumdefError::term_not_found(term))?;

        let value = match field {
            EnumField::Definition => row.definition.as_deref(),
            EnumField::Source => row.source.as_deref(),
            EnumField::TermId => row.term_id.as_deref(),
        };
        Ok(value)
    }

    /// Distinct `type_name` values present in the table, first-seen order.
    pub fn type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for row in &self.rows {
            if !names.iter().any(|name| name == &row.type_name) {
                names.push(row.type_name.clone());
            }
        }
        names
    }
}
