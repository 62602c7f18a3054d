//! CLI Command Implementations
//!
//! This module contains all command implementations for the enumdef CLI:
//! - merge: the full load → synthesize → merge → persist pipeline
//! - validate: CSV column and row checks without writes
//! - config: configuration scaffolding commands

use std::path::Path;

use anyhow::Context;
use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};
use tracing::info;

use crate::cli::args::{InitConfigArgs, MergeArgs, ValidateArgs};
use enumdef_rs::core::config::EnumdefConfig;
use enumdef_rs::core::merge::DefinitionsMerger;
use enumdef_rs::io::{definitions, tabular};

/// Fail early with a readable error when an input file is missing.
fn require_file(path: &Path, description: &str) -> anyhow::Result<()> {
    if !path.is_file() {
        anyhow::bail!("{description} not found: {}", path.display());
    }
    Ok(())
}

/// Merge enum definitions from a CSV into a YAML definitions file
pub async fn merge_command(args: MergeArgs) -> anyhow::Result<()> {
    require_file(&args.enum_csv, "Enum CSV file")?;
    require_file(&args.definitions_yaml, "Definitions YAML file")?;

    let config = match &args.config {
        Some(path) => EnumdefConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => EnumdefConfig::default(),
    };

    info!("loading enum CSV from: {}", args.enum_csv.display());
    let table = tabular::load_enum_table(&args.enum_csv)?;

    info!(
        "loading definitions YAML from: {}",
        args.definitions_yaml.display()
    );
    let mut document = definitions::load_definitions(&args.definitions_yaml)?;

    let merged = DefinitionsMerger::with_config(config).merge_all(&table, &mut document)?;

    if args.dry_run {
        println!("{}", definitions::to_yaml_string(&document)?);
        println!(
            "{} {}",
            "🔍 Dry run:".bright_blue().bold(),
            format!("{merged} enum types merged, nothing written").dimmed()
        );
        return Ok(());
    }

    let target = args.out.as_deref().unwrap_or(&args.definitions_yaml);
    definitions::write_definitions(target, &document)?;

    println!(
        "{} {} {}",
        "✅ Merged".bright_green().bold(),
        format!("{merged} enum types into").bright_green(),
        target.display().to_string().cyan()
    );

    Ok(())
}

/// Validate an enum CSV: required columns plus a per-type term count summary
pub async fn validate_command(args: ValidateArgs) -> anyhow::Result<()> {
    require_file(&args.enum_csv, "Enum CSV file")?;

    let table = tabular::load_enum_table(&args.enum_csv)?;

    println!(
        "{} {}",
        "✅ Valid enum CSV:".bright_green().bold(),
        args.enum_csv.display().to_string().cyan()
    );
    println!();

    /// Row type for the per-type summary table.
    #[derive(Tabled)]
    struct TypeRow {
        #[tabled(rename = "enum type")]
        type_name: String,
        #[tabled(rename = "terms")]
        terms: usize,
    }

    let rows: Vec<TypeRow> = table
        .type_names()
        .into_iter()
        .map(|type_name| {
            let terms = table
                .term_list(&type_name)
                .map(|terms| terms.len())
                .unwrap_or(0);
            TypeRow { type_name, terms }
        })
        .collect();

    if rows.is_empty() {
        println!("{}", "⚠️  CSV contains no enum rows".yellow());
        return Ok(());
    }

    let mut summary = Table::new(rows);
    summary.with(TableStyle::rounded());
    println!("{summary}");

    Ok(())
}

/// Print default configuration in YAML format
pub async fn print_default_config() -> anyhow::Result<()> {
    println!("{}", "# Default enumdef configuration".dimmed());
    println!(
        "{}",
        "# Map enum type names to descriptions under 'descriptions'".dimmed()
    );
    println!(
        "{}",
        "# Usage: enumdef merge --config your-config.yml ...".dimmed()
    );
    println!();

    let config = EnumdefConfig::default();
    let yaml_output = serde_yaml::to_string(&config)?;
    println!("{yaml_output}");

    Ok(())
}

/// Initialize a configuration file with defaults
pub async fn init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    // Check if file exists and force not specified
    if args.output.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Configuration file already exists: {}. Use --force to overwrite or choose a different name with --output",
            args.output.display()
        ));
    }

    let config = EnumdefConfig::default();
    let yaml_content = serde_yaml::to_string(&config)?;
    tokio::fs::write(&args.output, yaml_content).await?;

    println!(
        "{} {}",
        "✅ Configuration saved to:".bright_green().bold(),
        args.output.display().to_string().cyan()
    );
    println!();
    println!("{}", "📝 Next steps:".bright_blue().bold());
    println!("   1. Add per-type descriptions under the 'descriptions' key");
    println!(
        "   2. Run a merge with: {}",
        format!(
            "enumdef merge --config {} -e enums.csv -d _definitions.yaml",
            args.output.display()
        )
        .cyan()
    );

    Ok(())
}
