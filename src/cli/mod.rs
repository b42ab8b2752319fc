//! CLI layer for access-agents.
//!
//! Provides the command-line interface using clap, with commands for
//! listing agents and processing single texts or batches of files.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
