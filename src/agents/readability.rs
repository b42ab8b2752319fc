//! Readability optimizer ("Agente Dislexia").
//!
//! Long sentences are cut in half, every sentence gets its own paragraph,
//! and complex verbs are swapped for short everyday ones.

use crate::agents::traits::Transformer;
use crate::core::{Agent, ProcessingOptions};
use crate::text::{RuleSet, segments};
use std::sync::OnceLock;

/// Sentences with more words than this are split in two.
pub const MAX_SENTENCE_WORDS: usize = 15;

/// Complex words and their simple synonyms.
pub const VOCABULARY: &[(&str, &str)] = &[
    ("utilize", "use"),
    ("implement", "do"),
    ("develop", "create"),
    ("establish", "create"),
    ("demonstrate", "show"),
    ("perform", "do"),
    ("execute", "do"),
    ("provide", "give"),
    ("enable", "allow"),
    ("verify", "check"),
    ("identify", "find"),
];

fn rules() -> &'static RuleSet {
    static RULES: OnceLock<RuleSet> = OnceLock::new();
    RULES.get_or_init(|| RuleSet::words("readability", VOCABULARY))
}

/// Splits a sentence longer than [`MAX_SENTENCE_WORDS`] at its midpoint.
///
/// The first half takes the extra word when the count is odd. The halves
/// come back as two sentences joined by `". "`.
///
/// # Examples
///
/// ```
/// use access_agents::agents::readability::shorten;
///
/// assert_eq!(shorten("short and sweet"), "short and sweet");
/// let long = "a b c d e f g h i j k l m n o p q";
/// assert_eq!(shorten(long), "a b c d e f g h i. j k l m n o p q");
/// ```
#[must_use]
pub fn shorten(sentence: &str) -> String {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    if words.len() <= MAX_SENTENCE_WORDS {
        return sentence.trim().to_string();
    }

    let mid = words.len().div_ceil(2);
    format!("{}. {}", words[..mid].join(" "), words[mid..].join(" "))
}

/// Readability optimizer strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadabilityOptimizer;

impl ReadabilityOptimizer {
    /// Creates the strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Transformer for ReadabilityOptimizer {
    fn rewrite(&self, text: &str, _options: &ProcessingOptions) -> String {
        let joined = segments(text)
            .map(shorten)
            .collect::<Vec<_>>()
            .join(". ");

        // Also catches the ". " that `shorten` puts between halves.
        let spaced = joined.replace(". ", ".\n\n");

        rules().apply(&spaced)
    }

    fn agent(&self) -> Agent {
        Agent::Readability
    }
}
