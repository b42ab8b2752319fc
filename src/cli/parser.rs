//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::core::ProcessingOptions;
use crate::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// access-agents: accessibility rewrites for text.
///
/// Runs one of five rule-based agents over a text, adapting it for readers
/// with ADHD, deaf readers, dyslexic readers, autistic readers, or for
/// audio narration.
#[derive(Parser, Debug)]
#[command(name = "access-agents")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (debug logging on stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// Content context (general, academic, corporate, educational,
    /// journalistic, literary).
    #[arg(long, env = "ACCESS_AGENTS_CONTEXT", global = true)]
    pub context: Option<String>,

    /// Target medium (web, mobile, print, presentation, social, email).
    #[arg(long, env = "ACCESS_AGENTS_MEDIUM", global = true)]
    pub medium: Option<String>,

    /// Do not ask agents to keep the original formatting.
    #[arg(long, global = true)]
    pub no_keep_formatting: bool,

    /// Path to a JSON file with processing options.
    ///
    /// Flags given on the command line override values from the file.
    #[arg(long, env = "ACCESS_AGENTS_OPTIONS", global = true)]
    pub options: Option<PathBuf>,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Resolves the processing options from the options file and flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the options file cannot be read or parsed, or if
    /// a context or medium name is unknown.
    pub fn processing_options(&self) -> Result<ProcessingOptions> {
        let mut options = match &self.options {
            Some(path) => ProcessingOptions::from_json(&crate::io::read_file(path)?)?,
            None => ProcessingOptions::default(),
        };

        if let Some(context) = &self.context {
            options.context = context.parse()?;
        }
        if let Some(medium) = &self.medium {
            options.medium = medium.parse()?;
        }
        if self.no_keep_formatting {
            options.keep_formatting = false;
        }

        Ok(options)
    }
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available agents.
    #[command(name = "agents", alias = "ls")]
    Agents,

    /// Process a single text with one agent.
    Process {
        /// Agent slug (attention, visual, readability, literal, narration)
        /// or identity (e.g. "Agente TEA").
        agent: String,

        /// Text to process (reads from --file or stdin if not provided).
        text: Option<String>,

        /// Read the text from a file.
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Strip narration tags so the result can be spoken.
        #[arg(long)]
        speech: bool,
    },

    /// Process many files with one agent, in parallel.
    Batch {
        /// Agent slug or identity.
        agent: String,

        /// Input files.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Write each result to `<stem>.<agent>.txt` in this directory.
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ContentContext, Medium};
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_process() {
        let cli = Cli::try_parse_from(["access-agents", "process", "literal", "Hi."]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Process { ref agent, ref text, file: None, speech: false }
                if agent == "literal" && text.as_deref() == Some("Hi.")
        ));
    }

    #[test]
    fn test_ls_alias() {
        let cli = Cli::try_parse_from(["access-agents", "ls"]).unwrap();
        assert!(matches!(cli.command, Commands::Agents));
    }

    #[test]
    fn test_batch_requires_files() {
        assert!(Cli::try_parse_from(["access-agents", "batch", "visual"]).is_err());
    }

    #[test]
    fn test_flags_override_options_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("options.json");
        std::fs::write(
            &path,
            r#"{"context": "academic", "medium": "print", "keepFormatting": true}"#,
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "access-agents",
            "--options",
            path.to_str().unwrap(),
            "--medium",
            "mobile",
            "--no-keep-formatting",
            "agents",
        ])
        .unwrap();

        let options = cli.processing_options().unwrap();
        assert_eq!(options.context, ContentContext::Academic);
        assert_eq!(options.medium, Medium::Mobile);
        assert!(!options.keep_formatting);
    }

    #[test]
    fn test_unknown_context_rejected() {
        let cli =
            Cli::try_parse_from(["access-agents", "--context", "legal", "agents"]).unwrap();
        assert!(cli.processing_options().is_err());
    }
}
