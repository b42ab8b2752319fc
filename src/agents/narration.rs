//! Narration annotator ("Narrador").
//!
//! Marks up text for speech synthesis: pauses after punctuation, spelled-out
//! abbreviations, list cues and emphasis cues. The markup is plain bracketed
//! text; [`crate::speech::strip_speech_tags`] removes it again before the
//! text is handed to a synthesizer.

use crate::agents::traits::Transformer;
use crate::core::{Agent, ProcessingOptions};
use crate::text::RuleSet;
use std::sync::OnceLock;

/// Pause after a comma or semicolon.
pub const SHORT_PAUSE: &str = "[short pause]";
/// Pause after a sentence.
pub const PAUSE: &str = "[pause]";
/// Pause after a colon.
pub const MEDIUM_PAUSE: &str = "[medium pause]";
/// Start of a bulleted list item.
pub const LIST_ITEM: &str = "[list]";
/// Start of a numbered list item.
pub const NUMBERED_ITEM: &str = "[numbered item]";
/// Opening and closing emphasis cues (`**text**`).
pub const EMPHASIS: (&str, &str) = ("[emphasis]", "[end emphasis]");
/// Opening and closing highlight cues (`*text*`).
pub const HIGHLIGHT: (&str, &str) = ("[highlight]", "[end highlight]");

/// Punctuation pauses. Every sentence terminal becomes a period.
pub const PAUSES: &[(&str, &str)] = &[
    (r"[,;]", "$0 [short pause]"),
    (r"[.!?]", ". [pause]"),
    (r":", ": [medium pause]"),
];

/// Abbreviations and how they are read aloud.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("etc", "and others"),
    ("ex", "example"),
    ("p/", "for"),
    ("w/", "with"),
    ("Prof", "Professor"),
    ("Dr", "Doctor"),
    ("Mr", "Mister"),
    ("Mrs", "Missus"),
    ("Sr", "Senior"),
    ("Jr", "Junior"),
    ("R$", "reais"),
];

/// Line-start list markers.
pub const LIST_MARKERS: &[(&str, &str)] = &[
    (r"(?m)^[-•][ \t]*", "[list] "),
    (r"(?m)^\d+\.[ \t]*", "[numbered item] "),
];

/// Emphasis markers. Double asterisks first so they are not read as two
/// single-asterisk spans.
pub const EMPHASIS_MARKERS: &[(&str, &str)] = &[
    (r"\*\*(.*?)\*\*", "[emphasis] $1 [end emphasis]"),
    (r"\*(.*?)\*", "[highlight] $1 [end highlight]"),
];

fn rules() -> &'static RuleSet {
    static RULES: OnceLock<RuleSet> = OnceLock::new();
    RULES.get_or_init(|| {
        RuleSet::patterns("narration", PAUSES)
            .then(RuleSet::abbreviations("narration", ABBREVIATIONS))
            .then(RuleSet::patterns("narration", LIST_MARKERS))
            .then(RuleSet::patterns("narration", EMPHASIS_MARKERS))
    })
}

/// Narration annotator strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct NarrationAnnotator;

impl NarrationAnnotator {
    /// Creates the strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Transformer for NarrationAnnotator {
    fn rewrite(&self, text: &str, _options: &ProcessingOptions) -> String {
        rules().apply(text)
    }

    fn agent(&self) -> Agent {
        Agent::Narration
    }
}
