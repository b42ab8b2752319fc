//! Visual structurer ("Agente Surdo").
//!
//! Breaks text into one paragraph per sentence and replaces sound-centred
//! vocabulary with visual equivalents.

use crate::agents::traits::Transformer;
use crate::core::{Agent, ProcessingOptions};
use crate::text::{PARAGRAPH_BREAK, RuleSet};
use std::sync::OnceLock;

/// Auditory vocabulary and its visual replacement.
pub const VOCABULARY: &[(&str, &str)] = &[
    ("hear", "see/follow"),
    ("listen", "see/follow"),
    ("sound", "visual content"),
    ("audio", "visual content"),
    ("music", "visual content"),
    ("speak", "communicate"),
    ("say", "communicate"),
    ("phone", "message/video"),
    ("call", "message/video"),
];

fn rules() -> &'static RuleSet {
    static RULES: OnceLock<RuleSet> = OnceLock::new();
    RULES.get_or_init(|| RuleSet::words("visual", VOCABULARY))
}

/// Visual structurer strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisualStructurer;

impl VisualStructurer {
    /// Creates the strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Transformer for VisualStructurer {
    fn rewrite(&self, text: &str, _options: &ProcessingOptions) -> String {
        let spaced = text.replace(". ", ".\n\n");
        let visual = rules().apply(&spaced);

        visual
            .split(PARAGRAPH_BREAK)
            .filter(|paragraph| !paragraph.trim().is_empty())
            .collect::<Vec<_>>()
            .join(PARAGRAPH_BREAK)
    }

    fn agent(&self) -> Agent {
        Agent::Visual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> String {
        VisualStructurer::new().transform(text, &ProcessingOptions::default())
    }

    #[test]
    fn test_rule_table_compiles() {
        assert_eq!(rules().len(), VOCABULARY.len());
    }

    #[test]
    fn test_sentences_become_paragraphs() {
        assert_eq!(
            run("A cat can hear well. It likes sound."),
            "A cat can see/follow well.\n\nIt likes visual content."
        );
    }

    #[test]
    fn test_vocabulary_is_whole_word() {
        assert_eq!(run("Soundness of the recall"), "Soundness of the recall");
        assert_eq!(run("Please call. Say hi"), "Please message/video.\n\ncommunicate hi");
    }

    #[test]
    fn test_empty_paragraphs_dropped() {
        assert_eq!(run("One.  \n\nTwo."), "One.\n\nTwo.");
    }

    #[test]
    fn test_text_without_period_space_is_one_paragraph() {
        assert_eq!(run("Listen to music"), "see/follow to visual content");
    }
}
