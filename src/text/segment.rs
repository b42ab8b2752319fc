//! Sentence segmentation.
//!
//! Splits text into sentence-like segments on terminal punctuation. This is
//! a punctuation heuristic, not linguistic analysis: abbreviations and
//! decimal numbers split like any other period.

use std::iter::FusedIterator;

/// Characters that end a segment. A run of them counts as one boundary.
pub const TERMINALS: [char; 3] = ['.', '!', '?'];

fn is_terminal(c: char) -> bool {
    TERMINALS.contains(&c)
}

/// Lazy iterator over the segments of a text.
///
/// Cloning the iterator restarts from the clone point without rescanning
/// what came before.
///
/// # Examples
///
/// ```
/// use access_agents::text::segments;
///
/// let parts: Vec<_> = segments("Hi there!! How are you?  Fine.").collect();
/// assert_eq!(parts, vec!["Hi there", "How are you", "Fine"]);
/// ```
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

/// Returns the segments of `text`.
///
/// Segments are trimmed and never empty; terminal punctuation is dropped.
/// Text without any terminal yields a single segment (the trimmed text),
/// and blank text yields none.
#[must_use]
pub const fn segments(text: &str) -> Segments<'_> {
    Segments { rest: text }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.rest.is_empty() {
            let (piece, rest) = match self.rest.find(is_terminal) {
                // Terminals are ASCII, so `i + 1` is a char boundary.
                Some(i) => (&self.rest[..i], &self.rest[i + 1..]),
                None => (self.rest, ""),
            };
            self.rest = rest;

            let trimmed = piece.trim();
            if !trimmed.is_empty() {
                return Some(trimmed);
            }
        }
        None
    }
}

impl FusedIterator for Segments<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let parts: Vec<_> = segments("Hello world. How are you? I am fine!").collect();
        assert_eq!(parts, vec!["Hello world", "How are you", "I am fine"]);
    }

    #[test]
    fn test_runs_count_as_one_boundary() {
        let parts: Vec<_> = segments("Wait... what?!").collect();
        assert_eq!(parts, vec!["Wait", "what"]);
    }

    #[test]
    fn test_no_boundary() {
        let parts: Vec<_> = segments("  no punctuation here  ").collect();
        assert_eq!(parts, vec!["no punctuation here"]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(segments("").count(), 0);
        assert_eq!(segments("   \n\t ").count(), 0);
        assert_eq!(segments("...!?").count(), 0);
    }

    #[test]
    fn test_unicode_content() {
        let parts: Vec<_> = segments("Café é bom. 世界!").collect();
        assert_eq!(parts, vec!["Café é bom", "世界"]);
    }

    #[test]
    fn test_clone_restarts_from_current_position() {
        let mut iter = segments("One. Two. Three.");
        assert_eq!(iter.next(), Some("One"));
        let saved = iter.clone();
        assert_eq!(iter.collect::<Vec<_>>(), vec!["Two", "Three"]);
        assert_eq!(saved.collect::<Vec<_>>(), vec!["Two", "Three"]);
    }

    #[test]
    fn test_fused() {
        let mut iter = segments("Only.");
        assert_eq!(iter.next(), Some("Only"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
