//! Attention simplifier ("Agente TDAH").
//!
//! Shortens and declutters text so it can be scanned quickly: filler words
//! go, wordy connectives shrink, and the first few sentences become a
//! bullet list.

use crate::agents::traits::Transformer;
use crate::core::{Agent, ProcessingOptions};
use crate::text::{PARAGRAPH_BREAK, RuleSet, collapse_whitespace, segments};
use std::sync::OnceLock;

/// Maximum number of sentences kept. The rest is dropped.
///
/// A kept sentence that simplifies to nothing still counts towards the
/// limit but is not rendered.
pub const MAX_POINTS: usize = 5;

/// Marker prefixed to each point when more than one is kept.
pub const BULLET: &str = "•";

/// Filler words and intensifiers, removed outright.
pub const FILLER_WORDS: &[(&str, &str)] = &[
    ("that", ""),
    ("very", ""),
    ("quite", ""),
    ("extremely", ""),
    ("really", ""),
    ("practically", ""),
];

/// Verbose connectives and their short forms.
///
/// Runs after [`FILLER_WORDS`], so "due to the fact that" reaches this table
/// as "due to the fact".
pub const CONNECTIVES: &[(&str, &str)] = &[
    ("due to the fact", "because"),
    ("owing to the fact", "because"),
    ("by virtue of", "because"),
    ("in order to", "to"),
    ("with the aim of", "to"),
    ("with the goal of", "to"),
    ("however", "but"),
    ("nevertheless", "but"),
    ("nonetheless", "but"),
];

fn rules() -> &'static RuleSet {
    static RULES: OnceLock<RuleSet> = OnceLock::new();
    RULES.get_or_init(|| {
        RuleSet::words("attention", FILLER_WORDS).then(RuleSet::words("attention", CONNECTIVES))
    })
}

/// Simplifies a single sentence.
///
/// # Examples
///
/// ```
/// use access_agents::agents::attention::simplify;
///
/// assert_eq!(
///     simplify("It is really late due to the fact that the bus broke"),
///     "It is late because the bus broke"
/// );
/// ```
#[must_use]
pub fn simplify(sentence: &str) -> String {
    collapse_whitespace(&rules().apply(sentence))
}

/// Attention simplifier strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttentionSimplifier;

impl AttentionSimplifier {
    /// Creates the strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Transformer for AttentionSimplifier {
    fn rewrite(&self, text: &str, _options: &ProcessingOptions) -> String {
        let points: Vec<String> = segments(text)
            .take(MAX_POINTS)
            .map(simplify)
            .filter(|point| !point.is_empty())
            .collect();

        match points.as_slice() {
            [] => String::new(),
            [only] => format!("{only}."),
            _ => points
                .iter()
                .map(|point| format!("{BULLET} {point}."))
                .collect::<Vec<_>>()
                .join(PARAGRAPH_BREAK),
        }
    }

    fn agent(&self) -> Agent {
        Agent::Attention
    }
}
