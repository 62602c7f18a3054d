//! CLI Argument Structures
//!
//! This module contains all CLI argument definitions and command structures
//! used by the enumdef CLI binary.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Enum Definition Generator for Schema Dictionaries
#[derive(Parser)]
#[command(name = "enumdef")]
#[command(version = VERSION)]
#[command(about = "Merge CSV enum definitions into a YAML schema dictionary")]
#[command(long_about = "
Reads enum term metadata from a CSV file (required columns: type_name, enum,
enum_definition, source, term_id) and merges one synthesized definition entry
per enum type into a YAML definitions file. Keys unrelated to the enum types
in the CSV are left untouched.

Common Usage:

  # Merge enums into a definitions file in place
  enumdef merge -e enums.csv -d _definitions.yaml

  # Write the merged document somewhere else
  enumdef merge -e enums.csv -d _definitions.yaml --out merged.yaml

  # Preview the merged document without writing
  enumdef merge -e enums.csv -d _definitions.yaml --dry-run

  # Check a CSV for required columns and show per-type term counts
  enumdef validate -e enums.csv
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (DEBUG level) logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge enum definitions from a CSV into a YAML definitions file
    Merge(MergeArgs),

    /// Validate an enum CSV without writing anything
    Validate(ValidateArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Initialize a configuration file with defaults
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),
}

#[derive(Args)]
pub struct MergeArgs {
    /// Path to the CSV file containing enum definitions (required columns:
    /// type_name, enum, enum_definition, source, term_id)
    #[arg(short = 'e', long)]
    pub enum_csv: PathBuf,

    /// Path to the YAML definitions file to update
    #[arg(short = 'd', long)]
    pub definitions_yaml: PathBuf,

    /// Write the merged document to this path instead of updating in place
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print the merged document to stdout without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Configuration file with per-type description overrides
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the CSV file to validate
    #[arg(short = 'e', long)]
    pub enum_csv: PathBuf,
}

#[derive(Args)]
pub struct InitConfigArgs {
    /// Output configuration file name
    #[arg(short, long, default_value = ".enumdef.yml")]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(short, long)]
    pub force: bool,
}
