//! # Enumdef-RS: Enum Definition Synthesis for Schema Dictionaries
//!
//! This library ingests tabular enumeration records (one CSV row per enum
//! term, grouped by enum type name) and synthesizes a structured definition
//! entry per enum type, merging the result into an existing YAML definitions
//! document used as a schema reference. It provides:
//!
//! - **Nullness Classification**: broadened "semantically absent" detection
//!   for field values (null markers, NaN, empty collections)
//! - **Tabular Extraction**: ordered per-type term lists and first-match
//!   metadata lookups over the enum table
//! - **Entry Synthesis**: per-type entries with index-aligned term metadata,
//!   suppressing absent fields instead of serializing nulls
//! - **Non-destructive Merging**: inserts or overwrites only keys that match
//!   an enum type present in the input, leaving unrelated keys untouched
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use enumdef_rs::core::merge::DefinitionsMerger;
//! use enumdef_rs::io::{definitions, tabular};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = tabular::load_enum_table("enums.csv")?;
//!     let mut doc = definitions::load_definitions("_definitions.yaml")?;
//!
//!     let merged = DefinitionsMerger::new().merge_all(&table, &mut doc)?;
//!     definitions::write_definitions("_definitions.yaml", &doc)?;
//!
//!     println!("merged {merged} enum types");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]

// Core synthesis pipeline modules
pub mod core {
    //! Core extraction-and-synthesis pipeline.

    pub mod config;
    pub mod entry;
    pub mod errors;
    pub mod merge;
    pub mod nullness;
    pub mod table;
}

// I/O boundary: CSV table loading and YAML document persistence
pub mod io {
    //! Load and persist boundaries for the pipeline.

    pub mod definitions;
    pub mod tabular;
}

// Re-export primary types for convenience
pub use crate::core::entry::{EnumTypeEntry, TermRecord};
pub use crate::core::errors::{EnumdefError, Result};
pub use crate::core::merge::{DefinitionsDocument, DefinitionsMerger};
pub use crate::core::table::{EnumRow, EnumTable};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
