//! Non-destructive merging of synthesized entries into the definitions
//! document.
//!
//! The merger discovers the distinct enum types present in the input table,
//! builds an entry per type, and assigns each entry into the document under
//! its type name, overwriting any prior value at that key. Keys that do not
//! correspond to a processed enum type are left untouched; the document's
//! key order is preserved by the underlying [`IndexMap`].

use indexmap::IndexMap;
use tracing::{error, info};

use crate::core::config::EnumdefConfig;
use crate::core::entry::build_entry;
use crate::core::errors::Result;
use crate::core::table::EnumTable;

/// The external key-value definitions document, order-preserving.
pub type DefinitionsDocument = IndexMap<String, serde_yaml::Value>;

/// Merges synthesized enum entries into an existing definitions document.
#[derive(Debug, Clone, Default)]
pub struct DefinitionsMerger {
    config: EnumdefConfig,
}

impl DefinitionsMerger {
    /// A merger with no description overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// A merger applying per-type descriptions from the run configuration.
    pub fn with_config(config: EnumdefConfig) -> Self {
        Self { config }
    }

    /// Build an entry per distinct enum type in `table` and assign it into
    /// `document` under the type name, overwriting prior values in place.
    ///
    /// Returns the number of entries merged. The first hard error (e.g. a
    /// type yielding zero rows) aborts the merge; earlier entries remain
    /// applied in the in-memory document, and persistence is the caller's
    /// responsibility and must not occur on failure.
    pub fn merge_all(&self, table: &EnumTable, document: &mut DefinitionsDocument) -> Result<usize> {
        let type_names = table.type_names();
        info!(
            "found {} unique enum types: {:?}",
            type_names.len(),
            type_names
        );

        for type_name in &type_names {
            let description = self.config.description_for(type_name);
            let entry = build_entry(table, type_name, description).map_err(|err| {
                error!("failed to process enum type '{type_name}': {err}");
                err
            })?;
            document.insert(type_name.clone(), serde_yaml::to_value(&entry)?);
            info!("merged enum type '{type_name}'");
        }

        Ok(type_names.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::EnumRow;

    fn row(type_name: &str, term: &str) -> EnumRow {
        EnumRow {
            type_name: type_name.to_string(),
            term: term.to_string(),
            definition: None,
            source: None,
            term_id: None,
        }
    }

    fn two_type_table() -> EnumTable {
        EnumTable::from_rows(vec![
            row("Color", "RED"),
            row("Color", "BLUE"),
            row("Shape", "SQUARE"),
        ])
    }

    #[test]
    fn merge_inserts_one_entry_per_distinct_type() {
        let mut doc = DefinitionsDocument::new();
        let merged = DefinitionsMerger::new()
            .merge_all(&two_type_table(), &mut doc)
            .unwrap();

        assert_eq!(merged, 2);
        assert!(doc.contains_key("Color"));
        assert!(doc.contains_key("Shape"));
    }

    #[test]
    fn merge_leaves_unrelated_keys_untouched() {
        let mut doc = DefinitionsDocument::new();
        let unrelated: serde_yaml::Value =
            serde_yaml::from_str("type: string\npattern: '^[A-Z]+$'").unwrap();
        doc.insert("Y".to_string(), unrelated.clone());

        DefinitionsMerger::new()
            .merge_all(&two_type_table(), &mut doc)
            .unwrap();

        assert_eq!(doc.get("Y"), Some(&unrelated));
    }

    #[test]
    fn merge_overwrites_existing_entry_deterministically() {
        let table = two_type_table();
        let mut doc = DefinitionsDocument::new();
        doc.insert("Color".to_string(), serde_yaml::Value::from("stale"));

        DefinitionsMerger::new().merge_all(&table, &mut doc).unwrap();
        let first = doc.get("Color").cloned().unwrap();
        assert_ne!(first, serde_yaml::Value::from("stale"));

        DefinitionsMerger::new().merge_all(&table, &mut doc).unwrap();
        assert_eq!(doc.get("Color"), Some(&first));
    }

    #[test]
    fn merge_preserves_document_key_order() {
        let mut doc = DefinitionsDocument::new();
        doc.insert("first".to_string(), serde_yaml::Value::from(1));
        doc.insert("Color".to_string(), serde_yaml::Value::from("stale"));
        doc.insert("last".to_string(), serde_yaml::Value::from(3));

        DefinitionsMerger::new()
            .merge_all(&two_type_table(), &mut doc)
            .unwrap();

        let keys: Vec<&str> = doc.keys().map(String::as_str).collect();
        assert_eq!(keys, ["first", "Color", "last", "Shape"]);
    }

    #[test]
    fn config_descriptions_flow_into_entries() {
        let yaml = "descriptions:\n  Color: Palette colors\n";
        let config: EnumdefConfig = serde_yaml::from_str(yaml).unwrap();

        let mut doc = DefinitionsDocument::new();
        DefinitionsMerger::with_config(config)
            .merge_all(&two_type_table(), &mut doc)
            .unwrap();

        let color = doc.get("Color").unwrap();
        assert_eq!(
            color.get("description"),
            Some(&serde_yaml::Value::from("Palette colors"))
        );
        let shape = doc.get("Shape").unwrap();
        assert_eq!(shape.get("description"), Some(&serde_yaml::Value::Null));
    }

    #[test]
    fn empty_table_merges_nothing() {
        let mut doc = DefinitionsDocument::new();
        doc.insert("existing".to_string(), serde_yaml::Value::from(true));

        let merged = DefinitionsMerger::new()
            .merge_all(&EnumTable::default(), &mut doc)
            .unwrap();

        assert_eq!(merged, 0);
        assert_eq!(doc.len(), 1);
    }
}
