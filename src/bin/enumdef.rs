#!/usr/bin/env rust
//! Enumdef CLI - Enum Definition Generator for Schema Dictionaries
//!
//! Reads a CSV file containing enum term metadata and merges synthesized
//! definition entries into a YAML definitions file for schema reference.

use clap::Parser;

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute command
    match cli.command {
        Commands::Merge(args) => {
            cli::merge_command(args).await?;
        }
        Commands::Validate(args) => {
            cli::validate_command(args).await?;
        }
        Commands::PrintDefaultConfig => {
            cli::print_default_config().await?;
        }
        Commands::InitConfig(args) => {
            cli::init_config(args).await?;
        }
    }

    Ok(())
}
