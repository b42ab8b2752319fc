//! Transformer trait definition.
//!
//! Defines the interface shared by the five agent strategies.

use crate::core::{Agent, ProcessingOptions};

/// A rewrite strategy.
///
/// Implementations are pure: the same text and options always produce the
/// same output, and nothing is shared between calls except read-only rule
/// tables. They must be `Send + Sync` so batch processing can fan out
/// across threads.
///
/// # Examples
///
/// ```
/// use access_agents::agents::{Transformer, VisualStructurer};
/// use access_agents::core::ProcessingOptions;
///
/// let out = VisualStructurer::new().transform("Call me. Bye.", &ProcessingOptions::default());
/// assert_eq!(out, "message/video me.\n\nBye.");
/// ```
pub trait Transformer: Send + Sync {
    /// Rewrites non-blank text.
    ///
    /// Callers go through [`Transformer::transform`], which handles blank
    /// input before this is reached.
    fn rewrite(&self, text: &str, options: &ProcessingOptions) -> String;

    /// Returns the agent this strategy implements.
    fn agent(&self) -> Agent;

    /// Returns the short strategy name.
    fn name(&self) -> &'static str {
        self.agent().slug()
    }

    /// Returns a description of the strategy.
    fn description(&self) -> &'static str {
        self.agent().description()
    }

    /// Transforms `text`.
    ///
    /// Empty or whitespace-only input yields an empty string for every
    /// agent.
    fn transform(&self, text: &str, options: &ProcessingOptions) -> String {
        if text.trim().is_empty() {
            return String::new();
        }
        self.rewrite(text, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A strategy that relies on every provided method.
    struct Echo;

    impl Transformer for Echo {
        fn rewrite(&self, text: &str, _options: &ProcessingOptions) -> String {
            text.to_uppercase()
        }

        fn agent(&self) -> Agent {
            Agent::Literal
        }
    }

    #[test]
    fn test_blank_input_short_circuits() {
        let options = ProcessingOptions::default();
        assert_eq!(Echo.transform("", &options), "");
        assert_eq!(Echo.transform(" \n\t", &options), "");
    }

    #[test]
    fn test_non_blank_reaches_rewrite() {
        assert_eq!(Echo.transform("abc", &ProcessingOptions::default()), "ABC");
    }

    #[test]
    fn test_default_name_and_description() {
        assert_eq!(Echo.name(), "literal");
        assert_eq!(Echo.description(), Agent::Literal.description());
    }
}
