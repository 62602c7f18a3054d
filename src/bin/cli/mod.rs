//! CLI Module Organization
//!
//! This module organizes the CLI functionality into cohesive sub-modules:
//! - args: CLI argument structures and command definitions
//! - commands: Main command execution logic

pub mod args;
pub mod commands;

// Re-export commonly used items for convenience
pub use args::*;
pub use commands::*;
