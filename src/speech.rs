//! Speech cleanup for narration output.
//!
//! The narration agent leaves its cues in the text as bracketed tags. A
//! caller that feeds the result to a speech synthesizer removes them first:
//! pauses turn into a space, every other tag disappears.

use crate::text::RuleSet;
use std::sync::OnceLock;

/// Tag patterns and what each becomes before speaking.
pub const SPEECH_TAGS: &[(&str, &str)] = &[
    (r"\[(?:short |medium )?pause\]", " "),
    (r"\[(?:end )?emphasis\]", ""),
    (r"\[(?:end )?highlight\]", ""),
    (r"\[list\]", ""),
    (r"\[numbered item\]", ""),
    (r"[ \t]{2,}", " "),
    (r"(?m)^[ \t]+|[ \t]+$", ""),
];

fn rules() -> &'static RuleSet {
    static RULES: OnceLock<RuleSet> = OnceLock::new();
    RULES.get_or_init(|| RuleSet::patterns("speech", SPEECH_TAGS))
}

/// Removes narration tags so the text can be spoken.
///
/// # Examples
///
/// ```
/// use access_agents::speech::strip_speech_tags;
///
/// assert_eq!(
///     strip_speech_tags("Hi, [short pause] there. [pause]"),
///     "Hi, there."
/// );
/// ```
#[must_use]
pub fn strip_speech_tags(text: &str) -> String {
    rules().apply(text)
}
