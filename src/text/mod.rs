//! Text primitives shared by the agents.
//!
//! - **Segmentation**: splitting text into sentence-like segments
//! - **Rules**: ordered pattern → replacement tables
//! - **Stats**: character, word and segment counts

pub mod rules;
pub mod segment;
pub mod stats;

pub use rules::{MatchKind, Rule, RuleSet};
pub use segment::{Segments, segments};
pub use stats::TextStats;

/// Collapses every whitespace run to a single space and trims the ends.
///
/// # Examples
///
/// ```
/// use access_agents::text::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  a \n\t b  "), "a b");
/// ```
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Paragraph separator used by every agent that restructures text.
pub const PARAGRAPH_BREAK: &str = "\n\n";
