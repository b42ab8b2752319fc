//! Agent identities.
//!
//! Each agent is a fixed rewrite strategy aimed at one accessibility need.
//! Callers address agents by their identity string (the names the agents
//! were published under) or, on the command line, by a short slug.

use crate::error::OptionsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five accessibility agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Agent {
    /// Shortens and declutters text for readers with ADHD.
    Attention,
    /// Turns text into visual, non-auditory language for deaf readers.
    Visual,
    /// Splits long sentences and simplifies vocabulary for dyslexic readers.
    Readability,
    /// Removes idiom and hedging for autistic readers.
    Literal,
    /// Annotates text with pause and emphasis cues for speech synthesis.
    Narration,
}

impl Agent {
    /// All agents, in display order.
    pub const ALL: [Self; 5] = [
        Self::Attention,
        Self::Visual,
        Self::Readability,
        Self::Literal,
        Self::Narration,
    ];

    /// Returns the identity string callers dispatch on.
    #[must_use]
    pub const fn identity(self) -> &'static str {
        match self {
            Self::Attention => "Agente TDAH",
            Self::Visual => "Agente Surdo",
            Self::Readability => "Agente Dislexia",
            Self::Literal => "Agente TEA",
            Self::Narration => "Narrador",
        }
    }

    /// Returns the short name used on the command line and in file names.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Attention => "attention",
            Self::Visual => "visual",
            Self::Readability => "readability",
            Self::Literal => "literal",
            Self::Narration => "narration",
        }
    }

    /// Returns a one-line description of what the agent does.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Attention => {
                "Simplifies long, complex text into short bullet points that are easier to focus on (ADHD)."
            }
            Self::Visual => {
                "Replaces sound-centred vocabulary with visual language and splits text into clear paragraphs (deaf readers)."
            }
            Self::Readability => {
                "Breaks long sentences apart, spaces paragraphs and swaps complex words for simple ones (dyslexia)."
            }
            Self::Literal => {
                "Rewrites idioms and hedges into literal, objective language organised as numbered topics (autism spectrum)."
            }
            Self::Narration => {
                "Annotates text with pause, list and emphasis cues for natural-sounding audio narration (low vision)."
            }
        }
    }

    /// Resolves an exact identity string.
    ///
    /// Returns `None` for anything that is not one of the five identities;
    /// the dispatcher turns that into a passthrough.
    #[must_use]
    pub fn from_identity(identity: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.identity() == identity)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identity())
    }
}

/// Parses a slug (case-insensitive) or an exact identity.
impl FromStr for Agent {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(agent) = Self::from_identity(trimmed) {
            return Ok(agent);
        }
        let lower = trimmed.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.slug() == lower)
            .ok_or_else(|| OptionsError::UnknownAgent {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identities_are_distinct() {
        for (i, a) in Agent::ALL.iter().enumerate() {
            for b in &Agent::ALL[i + 1..] {
                assert_ne!(a.identity(), b.identity());
                assert_ne!(a.slug(), b.slug());
            }
        }
    }

    #[test]
    fn test_from_identity() {
        assert_eq!(Agent::from_identity("Agente TDAH"), Some(Agent::Attention));
        assert_eq!(Agent::from_identity("Narrador"), Some(Agent::Narration));
        assert_eq!(Agent::from_identity("narrador"), None);
        assert_eq!(Agent::from_identity("Agente X"), None);
    }

    #[test]
    fn test_from_str_accepts_slug_and_identity() {
        assert_eq!("literal".parse::<Agent>().unwrap(), Agent::Literal);
        assert_eq!("READABILITY".parse::<Agent>().unwrap(), Agent::Readability);
        assert_eq!("Agente Surdo".parse::<Agent>().unwrap(), Agent::Visual);
        assert!("robot".parse::<Agent>().is_err());
    }

    #[test]
    fn test_descriptions_present() {
        for agent in Agent::ALL {
            assert!(!agent.description().is_empty());
        }
    }
}
