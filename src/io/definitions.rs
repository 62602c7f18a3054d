//! YAML persistence for the definitions document.
//!
//! The document is a string-keyed mapping of arbitrary structured values.
//! It is loaded once at run start and written once at run end; key order is
//! preserved across the round trip so unrelated entries stay where the
//! dictionary authors put them.

use std::path::Path;

use tracing::info;

use crate::core::errors::{EnumdefError, Result};
use crate::core::merge::DefinitionsDocument;

/// Load the definitions document from a YAML file.
///
/// An empty file yields an empty document. A root that is anything other
/// than a mapping with string keys is a validation error.
pub fn load_definitions(path: impl AsRef<Path>) -> Result<DefinitionsDocument> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|err| {
        EnumdefError::io(
            format!("Failed to read definitions: {}", path.display()),
            err,
        )
    })?;

    let root: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|err| EnumdefError::Input {
            message: format!("Failed to parse definitions YAML: {err}"),
            source: Some(Box::new(err)),
        })?;

    let document = match root {
        serde_yaml::Value::Null => DefinitionsDocument::new(),
        serde_yaml::Value::Mapping(mapping) => {
            let mut document = DefinitionsDocument::with_capacity(mapping.len());
            for (key, value) in mapping {
                match key {
                    serde_yaml::Value::String(key) => {
                        document.insert(key, value);
                    }
                    other => {
                        return Err(EnumdefError::validation(format!(
                            "definitions document has a non-string key: {other:?}"
                        )));
                    }
                }
            }
            document
        }
        _ => {
            return Err(EnumdefError::validation(
                "definitions document root must be a mapping",
            ));
        }
    };

    info!(
        "loaded definitions with {} existing entries from {}",
        document.len(),
        path.display()
    );
    Ok(document)
}

/// Write the definitions document to a YAML file, replacing its contents.
pub fn write_definitions(path: impl AsRef<Path>, document: &DefinitionsDocument) -> Result<()> {
    let path = path.as_ref();
    let content = to_yaml_string(document)?;
    std::fs::write(path, content).map_err(|err| {
        EnumdefError::io(
            format!("Failed to write definitions: {}", path.display()),
            err,
        )
    })?;

    info!(
        "wrote definitions with {} entries to {}",
        document.len(),
        path.display()
    );
    Ok(())
}

/// Serialize the document to YAML text, keys in document order.
pub fn to_yaml_string(document: &DefinitionsDocument) -> Result<String> {
    Ok(serde_yaml::to_string(document)?)
}
