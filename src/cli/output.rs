//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::Agent;
use crate::error::Error;
use crate::text::TextStats;
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// One processed text, as reported by `process` and `batch`.
#[derive(Debug, Clone, Serialize)]
pub struct Processed {
    /// Agent slug.
    pub agent: &'static str,
    /// Agent identity.
    pub identity: &'static str,
    /// Input file, when the text came from one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    /// Output file, when the result was written to disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written_to: Option<PathBuf>,
    /// Measurements of the input.
    pub input_stats: TextStats,
    /// Measurements of the output.
    pub output_stats: TextStats,
    /// The processed text.
    pub output: String,
}

impl Processed {
    /// Builds a report for `input` rewritten into `output` by `agent`.
    #[must_use]
    pub fn new(agent: Agent, input: &str, output: String) -> Self {
        Self {
            agent: agent.slug(),
            identity: agent.identity(),
            source: None,
            written_to: None,
            input_stats: TextStats::of(input),
            output_stats: TextStats::of(&output),
            output,
        }
    }
}

/// Formats the agent list.
#[must_use]
pub fn format_agents(agents: &[Agent], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_agents_text(agents),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct AgentInfo {
                slug: &'static str,
                identity: &'static str,
                description: &'static str,
            }
            let infos: Vec<AgentInfo> = agents
                .iter()
                .map(|a| AgentInfo {
                    slug: a.slug(),
                    identity: a.identity(),
                    description: a.description(),
                })
                .collect();
            format_json(&infos)
        }
    }
}

fn format_agents_text(agents: &[Agent]) -> String {
    let mut output = String::new();
    output.push_str("Agents:\n");
    let _ = writeln!(output, "{:<12} {:<16} Description", "Slug", "Identity");
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for agent in agents {
        let _ = writeln!(
            output,
            "{:<12} {:<16} {}",
            agent.slug(),
            agent.identity(),
            agent.description()
        );
    }

    output
}

/// Formats a single processed text.
///
/// Text mode prints only the result, so it can be piped.
#[must_use]
pub fn format_processed(processed: &Processed, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            if processed.output.is_empty() {
                String::new()
            } else {
                format!("{}\n", processed.output)
            }
        }
        OutputFormat::Json => format_json(processed),
    }
}

/// Formats the results of a batch run.
#[must_use]
pub fn format_batch(results: &[Processed], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_batch_text(results),
        OutputFormat::Json => format_json(&results),
    }
}

fn format_batch_text(results: &[Processed]) -> String {
    let mut output = String::new();

    for result in results {
        let source = result
            .source
            .as_ref()
            .map_or_else(|| "-".to_string(), |p| p.display().to_string());

        if let Some(dest) = &result.written_to {
            let _ = writeln!(
                output,
                "{source} -> {} ({} -> {} words)",
                dest.display(),
                result.input_stats.words,
                result.output_stats.words
            );
        } else {
            let _ = writeln!(output, "==> {source} <==");
            let _ = writeln!(output, "{}\n", result.output);
        }
    }

    let _ = writeln!(
        output,
        "Processed {} file{}",
        results.len(),
        if results.len() == 1 { "" } else { "s" }
    );
    output
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => format_json(&serde_json::json!({
            "error": error.to_string(),
        })),
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("unknown"), OutputFormat::Text);
    }

    #[test]
    fn test_format_agents() {
        let text = format_agents(&Agent::ALL, OutputFormat::Text);
        assert!(text.contains("Agente TDAH"));
        assert!(text.contains("narration"));

        let json = format_agents(&Agent::ALL, OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn test_format_processed_json_fields() {
        let processed = Processed::new(
            Agent::Literal,
            "It is kind of cold.",
            "It is a little cold.".into(),
        );
        let json = format_processed(&processed, OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["agent"], "literal");
        assert_eq!(parsed["identity"], "Agente TEA");
        assert_eq!(parsed["output"], "It is a little cold.");
        assert_eq!(parsed["input_stats"]["words"], 5);
        assert!(parsed.get("source").is_none());
    }

    #[test]
    fn test_format_processed_text_empty() {
        let processed = Processed::new(Agent::Attention, "...", String::new());
        assert_eq!(format_processed(&processed, OutputFormat::Text), "");
    }

    #[test]
    fn test_format_batch_text() {
        let mut processed = Processed::new(Agent::Visual, "Hear it.", "See it.".into());
        processed.source = Some(PathBuf::from("in.txt"));
        processed.written_to = Some(PathBuf::from("out/in.visual.txt"));

        let text = format_batch(&[processed], OutputFormat::Text);
        assert!(text.contains("in.txt -> out/in.visual.txt"));
        assert!(text.contains("Processed 1 file\n"));
    }

    #[test]
    fn test_format_error_json() {
        let err: Error = CommandError::MissingArgument("text".into()).into();
        let json = format_error(&err, OutputFormat::Json);
        assert!(json.contains("missing required argument: text"));
    }
}
