//! Text statistics reported alongside processed output.

use super::segment::segments;
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// Size measurements of a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    /// User-perceived characters (grapheme clusters).
    pub characters: usize,
    /// Unicode words.
    pub words: usize,
    /// Sentence-like segments.
    pub segments: usize,
}

impl TextStats {
    /// Measures `text`.
    ///
    /// # Examples
    ///
    /// ```
    /// use access_agents::text::TextStats;
    ///
    /// let stats = TextStats::of("Olá, mundo! Bye.");
    /// assert_eq!(stats.characters, 16);
    /// assert_eq!(stats.words, 3);
    /// assert_eq!(stats.segments, 2);
    /// ```
    #[must_use]
    pub fn of(text: &str) -> Self {
        Self {
            characters: text.graphemes(true).count(),
            words: text.unicode_words().count(),
            segments: segments(text).count(),
        }
    }
}
