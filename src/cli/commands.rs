//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::cli::output::{
    OutputFormat, Processed, format_agents, format_batch, format_processed,
};
use crate::cli::parser::{Cli, Commands};
use crate::core::{Agent, ProcessingOptions};
use crate::dispatch::process_with;
use crate::error::{CommandError, Result};
use crate::io::{output_file_name, read_file, read_stdin, write_file};
use crate::speech::strip_speech_tags;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Agents => Ok(format_agents(&Agent::ALL, format)),
        Commands::Process {
            agent,
            text,
            file,
            speech,
        } => cmd_process(
            agent,
            text.as_deref(),
            file.as_deref(),
            *speech,
            &cli.processing_options()?,
            format,
        ),
        Commands::Batch {
            agent,
            files,
            out_dir,
        } => cmd_batch(
            agent,
            files,
            out_dir.as_deref(),
            &cli.processing_options()?,
            format,
        ),
    }
}

fn cmd_process(
    agent_name: &str,
    text: Option<&str>,
    file: Option<&Path>,
    speech: bool,
    options: &ProcessingOptions,
    format: OutputFormat,
) -> Result<String> {
    let agent: Agent = agent_name.parse()?;

    if speech && agent != Agent::Narration {
        return Err(CommandError::InvalidArgument(format!(
            "--speech only applies to the narration agent, not {}",
            agent.slug()
        ))
        .into());
    }

    let input = match (text, file) {
        (Some(t), _) => t.to_string(),
        (None, Some(path)) => read_file(path)?,
        (None, None) => read_stdin()?,
    };

    if input.trim().is_empty() {
        return Err(CommandError::MissingArgument("text".to_string()).into());
    }

    let mut output = process_with(agent, &input, options);
    if speech {
        output = strip_speech_tags(&output);
    }

    Ok(format_processed(&Processed::new(agent, &input, output), format))
}

fn cmd_batch(
    agent_name: &str,
    files: &[PathBuf],
    out_dir: Option<&Path>,
    options: &ProcessingOptions,
    format: OutputFormat,
) -> Result<String> {
    let agent: Agent = agent_name.parse()?;

    if files.is_empty() {
        return Err(CommandError::MissingArgument("files".to_string()).into());
    }

    info!(agent = agent.slug(), files = files.len(), "processing batch");

    let results = files
        .par_iter()
        .map(|path| process_file(agent, path, out_dir, options))
        .collect::<Result<Vec<_>>>()?;

    Ok(format_batch(&results, format))
}

/// Processes one input file, writing the result into `out_dir` when given.
fn process_file(
    agent: Agent,
    path: &Path,
    out_dir: Option<&Path>,
    options: &ProcessingOptions,
) -> Result<Processed> {
    let input = read_file(path)?;
    let output = process_with(agent, &input, options);
    debug!(path = %path.display(), bytes = input.len(), "processed file");

    let mut processed = Processed::new(agent, &input, output);
    processed.source = Some(path.to_path_buf());

    if let Some(dir) = out_dir {
        let dest = dir.join(output_file_name(path, agent.slug()));
        write_file(&dest, &processed.output)?;
        processed.written_to = Some(dest);
    }

    Ok(processed)
}
