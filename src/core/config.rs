//! Run configuration for the merge pipeline.
//!
//! The configuration is optional: a run without one merges every discovered
//! enum type with an absent description. A YAML config can supply per-type
//! description overrides, which flow into the synthesized entries.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::errors::{EnumdefError, Result};

/// Top-level enumdef configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumdefConfig {
    /// Per-type description overrides keyed by `type_name`. Types without an
    /// override get an absent description in their entry.
    pub descriptions: IndexMap<String, String>,
}

impl EnumdefConfig {
    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|err| {
            EnumdefError::io(format!("Failed to read config: {}", path.display()), err)
        })?;
        serde_yaml::from_str(&content)
            .map_err(|err| EnumdefError::config(format!("Invalid config YAML: {err}")))
    }

    /// Description override for the given enum type, if configured.
    pub fn description_for(&self, type_name: &str) -> Option<&str> {
        self.descriptions.get(type_name).map(String::as_str)
    }
}
