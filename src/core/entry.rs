//! Synthesized definition entries for enum types.
//!
//! This module assembles the structured entry that lands in the definitions
//! document for one enum type: the ordered term list plus an index-aligned
//! list of per-term metadata records. Metadata fields that classify as null
//! are omitted from the record entirely; absence, not a serialized null, is
//! the encoding for missing metadata.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::errors::Result;
use crate::core::nullness::is_null_str;
use crate::core::table::{EnumField, EnumTable};

/// Per-term metadata record, index-aligned with the entry's term list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRecord {
    /// The term string; always present
    pub enumeration: String,
    /// Free-text definition, omitted when null-classified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    /// Source vocabulary, omitted when null-classified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// External term identifier, omitted when null-classified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_id: Option<String>,
}

impl TermRecord {
    /// A record carrying only the mandatory term string.
    pub fn new(enumeration: impl Into<String>) -> Self {
        Self {
            enumeration: enumeration.into(),
            definition: None,
            source: None,
            term_id: None,
        }
    }
}

/// The synthesized definitions-document entry for one enum type.
///
/// `terms` and `records` always have equal length and index-aligned
/// correspondence: the term at index `i` of `terms` matches the
/// `enumeration` at index `i` of `records`, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumTypeEntry {
    /// Optional human description; serialized as an explicit null when
    /// absent, matching the document shape schema consumers expect
    pub description: Option<String>,
    /// Ordered term list, duplicates preserved, first-seen row order
    #[serde(rename = "enum")]
    pub terms: Vec<String>,
    /// Per-term metadata, same order as `terms`
    #[serde(rename = "enumDef")]
    pub records: Vec<TermRecord>,
}

/// Fetch one optional metadata field for a term, treating lookup failures
/// and null-classified values both as absence.
fn optional_field(
    table: &EnumTable,
    type_name: &str,
    term: &str,
    field: EnumField,
) -> Option<String> {
    match table.field_for_term(type_name, term, field) {
        Ok(Some(value)) if !is_null_str(value) => Some(value.to_string()),
        Ok(_) => None,
        Err(err) => {
            warn!("could not get {} for term '{term}': {err}", field.key());
            None
        }
    }
}

/// Build the definition entry for one enum type.
///
/// The term list is computed once; each term yields a [`TermRecord`] whose
/// optional fields are included only when the table holds a value the
/// nullness classifier accepts. An unknown `type_name` is a hard error;
/// per-field lookup failures are logged and swallowed.
pub fn build_entry(
    table: &EnumTable,
    type_name: &str,
    description: Option<&str>,
) -> Result<EnumTypeEntry> {
    let terms = table.term_list(type_name)?;
    debug!(
        "constructing enum definitions for '{type_name}' with {} terms",
        terms.len()
    );

    let records = terms
        .iter()
        .map(|term| TermRecord {
            enumeration: term.clone(),
            definition: optional_field(table, type_name, term, EnumField::Definition),
            source: optional_field(table, type_name, term, EnumField::Source),
            term_id: optional_field(table, type_name, term, EnumField::TermId),
        })
        .collect();

    Ok(EnumTypeEntry {
        description: description.map(str::to_string),
        terms,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::EnumRow;

    fn color_table() -> EnumTable {
        EnumTable::from_rows(vec![
            EnumRow {
                type_name: "Color".to_string(),
                term: "RED".to_string(),
                definition: Some("red color".to_string()),
                source: Some("".to_string()),
                term_id: Some("T1".to_string()),
            },
            EnumRow {
                type_name: "Color".to_string(),
                term: "BLUE".to_string(),
                definition: None,
                source: Some("src2".to_string()),
                term_id: Some("".to_string()),
            },
        ])
    }

    #[test]
    fn builds_color_entry_with_null_fields_suppressed() {
        let entry = build_entry(&color_table(), "Color", None).unwrap();

        assert_eq!(entry.description, None);
        assert_eq!(entry.terms, ["RED", "BLUE"]);
        assert_eq!(entry.records.len(), 2);

        let red = &entry.records[0];
        assert_eq!(red.enumeration, "RED");
        assert_eq!(red.definition.as_deref(), Some("red color"));
        assert_eq!(red.source, None, "empty source must be suppressed");
        assert_eq!(red.term_id.as_deref(), Some("T1"));

        let blue = &entry.records[1];
        assert_eq!(blue.enumeration, "BLUE");
        assert_eq!(blue.definition, None);
        assert_eq!(blue.source.as_deref(), Some("src2"));
        assert_eq!(blue.term_id, None, "empty term_id must be suppressed");
    }

    #[test]
    fn terms_and_records_stay_index_aligned_with_duplicates() {
        let mut rows: Vec<EnumRow> = Vec::new();
        for term in ["RED", "BLUE", "RED"] {
            rows.push(EnumRow {
                type_name: "Color".to_string(),
                term: term.to_string(),
                definition: None,
                source: None,
                term_id: None,
            });
        }
        let entry = build_entry(&EnumTable::from_rows(rows), "Color", None).unwrap();

        assert_eq!(entry.terms.len(), entry.records.len());
        for (term, record) in entry.terms.iter().zip(&entry.records) {
            assert_eq!(term, &record.enumeration);
        }
    }

    #[test]
    fn description_is_carried_through() {
        let entry = build_entry(&color_table(), "Color", Some("Palette colors")).unwrap();
        assert_eq!(entry.description.as_deref(), Some("Palette colors"));
    }

    #[test]
    fn unknown_type_is_a_hard_error() {
        let err = build_entry(&color_table(), "Size", None).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn null_vocabulary_values_never_reach_the_record() {
        let table = EnumTable::from_rows(vec![EnumRow {
            type_name: "Status".to_string(),
            term: "OPEN".to_string(),
            definition: Some("N/A".to_string()),
            source: Some("  null ".to_string()),
            term_id: Some("missing".to_string()),
        }]);

        let entry = build_entry(&table, "Status", None).unwrap();
        let record = &entry.records[0];
        assert_eq!(record.definition, None);
        assert_eq!(record.source, None);
        assert_eq!(record.term_id, None);
    }

    #[test]
    fn serialized_record_omits_absent_fields() {
        let entry = build_entry(&color_table(), "Color", None).unwrap();
        let yaml = serde_yaml::to_string(&entry).unwrap();

        assert!(yaml.contains("description: null"));
        assert!(yaml.contains("definition: red color"));
        assert!(!yaml.contains("source: null"));
        assert!(!yaml.contains("term_id: null"));
    }
}
