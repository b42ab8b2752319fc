//! Processing options passed alongside every transformation.
//!
//! Options describe where the adapted text will be read (its content
//! context and publishing medium) and whether the caller wants its
//! formatting kept. No transformer reads them yet; they are part of the
//! call contract so rule variation by context or medium can be added
//! without changing any signature.

use crate::error::OptionsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Domain the text belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentContext {
    /// Everyday text with no particular register.
    #[default]
    General,
    /// Papers, theses, lecture notes.
    Academic,
    /// Business communication.
    Corporate,
    /// Teaching material.
    Educational,
    /// News and reporting.
    Journalistic,
    /// Fiction and essays.
    Literary,
}

impl ContentContext {
    /// All contexts, in display order.
    pub const ALL: [Self; 6] = [
        Self::General,
        Self::Academic,
        Self::Corporate,
        Self::Educational,
        Self::Journalistic,
        Self::Literary,
    ];

    /// Returns the lowercase name used in option files and on the CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Academic => "academic",
            Self::Corporate => "corporate",
            Self::Educational => "educational",
            Self::Journalistic => "journalistic",
            Self::Literary => "literary",
        }
    }
}

impl fmt::Display for ContentContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentContext {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| OptionsError::UnknownContext {
                name: s.to_string(),
            })
    }
}

/// Medium the adapted text will be published on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medium {
    /// Web pages.
    #[default]
    Web,
    /// Mobile apps.
    Mobile,
    /// Printed material.
    Print,
    /// Slides.
    Presentation,
    /// Social networks.
    Social,
    /// E-mail.
    Email,
}

impl Medium {
    /// All media, in display order.
    pub const ALL: [Self; 6] = [
        Self::Web,
        Self::Mobile,
        Self::Print,
        Self::Presentation,
        Self::Social,
        Self::Email,
    ];

    /// Returns the lowercase name used in option files and on the CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Print => "print",
            Self::Presentation => "presentation",
            Self::Social => "social",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Medium {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == lower)
            .ok_or_else(|| OptionsError::UnknownMedium {
                name: s.to_string(),
            })
    }
}

/// Options accepted by every transformer.
///
/// # Examples
///
/// ```
/// use access_agents::core::{ContentContext, Medium, ProcessingOptions};
///
/// let options = ProcessingOptions::default();
/// assert_eq!(options.context, ContentContext::General);
/// assert_eq!(options.medium, Medium::Web);
/// assert!(options.keep_formatting);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessingOptions {
    /// Content domain.
    pub context: ContentContext,
    /// Publishing medium.
    pub medium: Medium,
    /// Whether the caller wants the original formatting kept.
    pub keep_formatting: bool,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            context: ContentContext::General,
            medium: Medium::Web,
            keep_formatting: true,
        }
    }
}

impl ProcessingOptions {
    /// Creates options with the given context and medium, keeping formatting.
    #[must_use]
    pub const fn new(context: ContentContext, medium: Medium) -> Self {
        Self {
            context,
            medium,
            keep_formatting: true,
        }
    }

    /// Sets whether formatting should be kept.
    #[must_use]
    pub const fn keep_formatting(mut self, keep: bool) -> Self {
        self.keep_formatting = keep;
        self
    }

    /// Parses options from a JSON document.
    ///
    /// Missing fields take their defaults; unknown enum values are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::Parse`] if the document is not valid JSON or
    /// names an unknown context or medium.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }
}
