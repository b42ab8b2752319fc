//! Ordered pattern rule sets.
//!
//! A [`RuleSet`] is a list of pattern → replacement rules applied strictly
//! in the order they were declared. Later rules see the output of earlier
//! ones, so table order is part of each agent's behaviour.
//!
//! Agents declare their tables as plain `(pattern, replacement)` slices and
//! compile them once into a process-wide static.

use regex::{NoExpand, Regex, RegexBuilder};
use std::borrow::Cow;

/// How a table key is turned into a regex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Whole word or phrase, case-insensitive. Words inside a phrase may be
    /// separated by any run of whitespace.
    Word,
    /// Whole word, case-insensitive, also consuming one trailing period.
    Abbreviation,
    /// Literal substring, case-insensitive.
    Substring,
    /// The key is already a regex. The replacement may use `$1` style
    /// capture references.
    Pattern,
}

/// A single compiled rule.
#[derive(Debug, Clone)]
pub struct Rule {
    regex: Regex,
    replacement: &'static str,
    kind: MatchKind,
}

impl Rule {
    /// Compiles a rule from a table entry.
    pub fn new(
        key: &str,
        replacement: &'static str,
        kind: MatchKind,
    ) -> Result<Self, regex::Error> {
        let (pattern, case_insensitive) = match kind {
            MatchKind::Word => (word_pattern(key), true),
            MatchKind::Abbreviation => (format!(r"{}\.?", word_pattern(key)), true),
            MatchKind::Substring => (regex::escape(key), true),
            MatchKind::Pattern => (key.to_string(), false),
        };
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(case_insensitive)
            .build()?;
        Ok(Self {
            regex,
            replacement,
            kind,
        })
    }

    /// Returns the compiled pattern source.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Applies the rule to `text`. No match leaves the text untouched.
    ///
    /// Every match becomes the replacement exactly as written in the table,
    /// whatever the case of the matched text.
    #[must_use]
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.kind {
            MatchKind::Pattern => self.regex.replace_all(text, self.replacement),
            MatchKind::Word | MatchKind::Abbreviation | MatchKind::Substring => {
                self.regex.replace_all(text, NoExpand(self.replacement))
            }
        }
    }
}

/// An ordered, compiled rule table.
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: &'static str,
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compiles a table of whole-word rules.
    #[must_use]
    pub fn words(name: &'static str, table: &[(&str, &'static str)]) -> Self {
        Self::compile(name, table, MatchKind::Word)
    }

    /// Compiles a table of abbreviation rules.
    #[must_use]
    pub fn abbreviations(name: &'static str, table: &[(&str, &'static str)]) -> Self {
        Self::compile(name, table, MatchKind::Abbreviation)
    }

    /// Compiles a table of substring rules.
    #[must_use]
    pub fn substrings(name: &'static str, table: &[(&str, &'static str)]) -> Self {
        Self::compile(name, table, MatchKind::Substring)
    }

    /// Compiles a table of raw regex rules.
    #[must_use]
    pub fn patterns(name: &'static str, table: &[(&str, &'static str)]) -> Self {
        Self::compile(name, table, MatchKind::Pattern)
    }

    /// Compiles a table. Entries that fail to compile are logged and left
    /// out so a bad entry can never abort a transformation.
    #[must_use]
    pub fn compile(name: &'static str, table: &[(&str, &'static str)], kind: MatchKind) -> Self {
        let rules = table
            .iter()
            .filter_map(|&(key, replacement)| match Rule::new(key, replacement, kind) {
                Ok(rule) => Some(rule),
                Err(e) => {
                    tracing::warn!(rule_set = name, key, error = %e, "skipping invalid rule");
                    None
                }
            })
            .collect();
        Self { name, rules }
    }

    /// Concatenates two rule sets, keeping order: `self` first.
    #[must_use]
    pub fn then(mut self, other: Self) -> Self {
        self.rules.extend(other.rules);
        self
    }

    /// Returns the rule set name (used in logs).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Number of compiled rules.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.rules.len()
    }

    /// Applies every rule in order.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in &self.rules {
            let replaced = match rule.apply(&out) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(replaced) => replaced,
            };
            tracing::trace!(rule_set = self.name, pattern = rule.pattern(), "rule matched");
            out = replaced;
        }
        out
    }
}

/// Builds a whole-word regex for a table key.
///
/// Word boundaries are only asserted on sides where the key starts or ends
/// with a word character, so keys such as `p/` or `R$` still match.
/// Internal spaces match any whitespace run.
#[must_use]
pub fn word_pattern(key: &str) -> String {
    let body = key
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");

    let starts_word = key.chars().next().is_some_and(is_word_char);
    let ends_word = key.chars().last().is_some_and(is_word_char);

    format!(
        "{}{body}{}",
        if starts_word { r"\b" } else { "" },
        if ends_word { r"\b" } else { "" }
    )
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_rule_respects_boundaries() {
        let set = RuleSet::words("test", &[("cat", "dog")]);
        assert_eq!(set.apply("cat concatenate cat."), "dog concatenate dog.");
    }

    #[test]
    fn test_word_rule_case_insensitive_fixed_replacement() {
        let set = RuleSet::words("test", &[("utilize", "use")]);
        assert_eq!(set.apply("Utilize it. UTILIZE it."), "use it. use it.");
    }

    #[test]
    fn test_phrase_matches_flexible_whitespace() {
        let set = RuleSet::words("test", &[("in order to", "to")]);
        assert_eq!(set.apply("in  order\nto win"), "to win");
    }

    #[test]
    fn test_abbreviation_consumes_period() {
        let set = RuleSet::abbreviations("test", &[("Dr", "Doctor"), ("etc", "and others")]);
        assert_eq!(set.apply("Dr. Who, etc."), "Doctor Who, and others");
        assert_eq!(set.apply("Drive"), "Drive");
    }

    #[test]
    fn test_replacement_is_not_recased() {
        let set = RuleSet::abbreviations("test", &[("R$", "reais")]);
        assert_eq!(set.apply("R$ 5"), "reais 5");
    }

    #[test]
    fn test_substring_rule_ignores_boundaries() {
        let set = RuleSet::substrings("test", &[("super", "very")]);
        assert_eq!(set.apply("Superb super"), "veryb very");
    }

    #[test]
    fn test_pattern_rule_expands_captures() {
        let set = RuleSet::patterns("test", &[(r"\*(.*?)\*", "<$1>")]);
        assert_eq!(set.apply("a *b* c"), "a <b> c");
    }

    #[test]
    fn test_rules_apply_in_order() {
        let set = RuleSet::words("test", &[("a", "b"), ("b", "c")]);
        assert_eq!(set.apply("a"), "c");

        let reversed = RuleSet::words("test", &[("b", "c"), ("a", "b")]);
        assert_eq!(reversed.apply("a"), "b");
    }

    #[test]
    fn test_empty_replacement_strips() {
        let set = RuleSet::words("test", &[("very", "")]);
        assert_eq!(set.apply("Very very good"), "  good");
    }

    #[test]
    fn test_no_match_is_noop() {
        let set = RuleSet::words("test", &[("absent", "present")]);
        assert_eq!(set.apply("nothing here"), "nothing here");
        assert_eq!(set.apply(""), "");
    }

    #[test]
    fn test_invalid_pattern_is_skipped() {
        let set = RuleSet::patterns("test", &[("[unclosed", "x"), ("a", "b")]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.apply("a"), "b");
    }

    #[test]
    fn test_then_keeps_order() {
        let set =
            RuleSet::words("first", &[("a", "b")]).then(RuleSet::words("second", &[("b", "c")]));
        assert_eq!(set.len(), 2);
        assert_eq!(set.name(), "first");
        assert_eq!(set.apply("a"), "c");
    }

    #[test]
    fn test_word_pattern_non_word_edges() {
        assert_eq!(word_pattern("Dr"), r"\bDr\b");
        assert_eq!(word_pattern("p/"), r"\bp/");
        assert_eq!(word_pattern("R$"), r"\bR\$");
        assert_eq!(word_pattern("kind of"), r"\bkind\s+of\b");
    }
}
