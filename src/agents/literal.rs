//! Literalizer ("Agente TEA").
//!
//! Replaces idioms and informal intensifiers with literal wording, strips
//! hedges, and lays longer texts out as a summary followed by numbered
//! topics.
//!
//! Frequency hedges ("usually", "normally", "typically") become "always".
//! This can invert the meaning of a sentence.

use crate::agents::traits::Transformer;
use crate::core::{Agent, ProcessingOptions};
use crate::text::{PARAGRAPH_BREAK, RuleSet, segments};
use std::sync::OnceLock;

/// Texts with more segments than this get the summary/topic layout.
pub const MAX_UNSTRUCTURED_SEGMENTS: usize = 2;

/// Label on the first segment of a structured text.
pub const SUMMARY_LABEL: &str = "SUMMARY:";

/// Idioms and intensifiers, matched as substrings.
pub const IDIOMS: &[(&str, &str)] = &[
    ("do the trick", "work"),
    ("give a hand", "help"),
    ("lend a hand", "help"),
    ("in the ballpark of", "approximately"),
    ("more or less", "approximately"),
    ("once in a while", "sometimes"),
    ("a ton of", "many"),
    ("kind of", "a little"),
    ("super", "very"),
    ("mega", "very"),
    ("hyper", "very"),
];

/// Hedging adverbs, removed together with the spacing after them.
pub const HEDGES: &[(&str, &str)] = &[(r"(?i)\b(?:maybe|possibly|probably)\b[ \t]*", "")];

/// Frequency hedges turned into certainties.
pub const FREQUENCY_HEDGES: &[(&str, &str)] = &[
    ("usually", "always"),
    ("normally", "always"),
    ("typically", "always"),
];

fn rules() -> &'static RuleSet {
    static RULES: OnceLock<RuleSet> = OnceLock::new();
    RULES.get_or_init(|| {
        RuleSet::substrings("literal", IDIOMS)
            .then(RuleSet::patterns("literal", HEDGES))
            .then(RuleSet::words("literal", FREQUENCY_HEDGES))
    })
}

/// Literalizer strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Literalizer;

impl Literalizer {
    /// Creates the strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Transformer for Literalizer {
    fn rewrite(&self, text: &str, _options: &ProcessingOptions) -> String {
        let literal = rules().apply(text);

        let topics: Vec<&str> = segments(&literal).collect();
        if topics.len() <= MAX_UNSTRUCTURED_SEGMENTS {
            return literal;
        }

        topics
            .iter()
            .enumerate()
            .map(|(i, topic)| {
                if i == 0 {
                    format!("{SUMMARY_LABEL} {topic}.")
                } else {
                    format!("{i}. {topic}.")
                }
            })
            .collect::<Vec<_>>()
            .join(PARAGRAPH_BREAK)
    }

    fn agent(&self) -> Agent {
        Agent::Literal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> String {
        Literalizer::new().transform(text, &ProcessingOptions::default())
    }

    #[test]
    fn test_rule_tables_compile() {
        assert_eq!(
            rules().len(),
            IDIOMS.len() + HEDGES.len() + FREQUENCY_HEDGES.len()
        );
    }

    #[test]
    fn test_four_sentences_structured() {
        assert_eq!(
            run("It will maybe rain today. Take a coat. Wear boots. Stay dry."),
            "SUMMARY: It will rain today.\n\n1. Take a coat.\n\n2. Wear boots.\n\n3. Stay dry."
        );
    }

    #[test]
    fn test_two_sentences_not_structured() {
        assert_eq!(
            run("It is kind of cold. Usually it snows."),
            "It is a little cold. always it snows."
        );
    }

    #[test]
    fn test_idioms_are_substrings() {
        assert_eq!(run("A superb, mega deal"), "A veryb, very deal");
        assert_eq!(run("More or less ten"), "approximately ten");
    }

    #[test]
    fn test_hedges_removed() {
        assert_eq!(run("Maybe we go"), "we go");
        assert_eq!(run("It is possibly true"), "It is true");
        assert_eq!(run("Probable cause"), "Probable cause");
    }

    #[test]
    fn test_frequency_hedges_become_always() {
        assert_eq!(run("We normally eat at noon"), "We always eat at noon");
    }

    #[test]
    fn test_punctuation_only_returned_as_is() {
        assert_eq!(run("?!..."), "?!...");
    }

    #[test]
    fn test_three_sentences_without_rules_still_structured() {
        assert_eq!(run("A. B. C"), "SUMMARY: A.\n\n1. B.\n\n2. C.");
    }
}
