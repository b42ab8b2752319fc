//! Accessibility agents.
//!
//! Each agent is a rule-based rewrite strategy behind the [`Transformer`]
//! trait:
//!
//! - **Attention**: filler removal, short connectives, bullet points
//! - **Visual**: visual vocabulary, one paragraph per sentence
//! - **Readability**: sentence splitting, simple vocabulary
//! - **Literal**: literal wording, no hedges, summary + numbered topics
//! - **Narration**: pause, list and emphasis cues for speech synthesis

pub mod attention;
pub mod literal;
pub mod narration;
pub mod readability;
pub mod traits;
pub mod visual;

pub use attention::AttentionSimplifier;
pub use literal::Literalizer;
pub use narration::NarrationAnnotator;
pub use readability::ReadabilityOptimizer;
pub use traits::Transformer;
pub use visual::VisualStructurer;

use crate::core::Agent;

static ATTENTION: AttentionSimplifier = AttentionSimplifier::new();
static VISUAL: VisualStructurer = VisualStructurer::new();
static READABILITY: ReadabilityOptimizer = ReadabilityOptimizer::new();
static LITERAL: Literalizer = Literalizer::new();
static NARRATION: NarrationAnnotator = NarrationAnnotator::new();

/// Returns the strategy for an agent.
#[must_use]
pub fn transformer_for(agent: Agent) -> &'static dyn Transformer {
    match agent {
        Agent::Attention => &ATTENTION,
        Agent::Visual => &VISUAL,
        Agent::Readability => &READABILITY,
        Agent::Literal => &LITERAL,
        Agent::Narration => &NARRATION,
    }
}

/// Creates a transformer by slug or identity.
///
/// # Errors
///
/// Returns [`crate::error::OptionsError::UnknownAgent`] if the name is not
/// recognized.
pub fn create_transformer(name: &str) -> crate::error::Result<Box<dyn Transformer>> {
    let agent: Agent = name.parse()?;
    Ok(match agent {
        Agent::Attention => Box::new(AttentionSimplifier::new()),
        Agent::Visual => Box::new(VisualStructurer::new()),
        Agent::Readability => Box::new(ReadabilityOptimizer::new()),
        Agent::Literal => Box::new(Literalizer::new()),
        Agent::Narration => Box::new(NarrationAnnotator::new()),
    })
}

/// Lists available agent slugs.
#[must_use]
pub fn available_agents() -> Vec<&'static str> {
    Agent::ALL.iter().map(|agent| agent.slug()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transformer_for_matches_agent() {
        for agent in Agent::ALL {
            assert_eq!(transformer_for(agent).agent(), agent);
        }
    }

    #[test]
    fn test_create_transformer_by_slug() {
        let transformer = create_transformer("narration").unwrap();
        assert_eq!(transformer.name(), "narration");
    }

    #[test]
    fn test_create_transformer_by_identity() {
        let transformer = create_transformer("Agente Dislexia").unwrap();
        assert_eq!(transformer.agent(), Agent::Readability);
    }

    #[test]
    fn test_create_transformer_case_insensitive() {
        let transformer = create_transformer("VISUAL").unwrap();
        assert_eq!(transformer.name(), "visual");
    }

    #[test]
    fn test_create_transformer_unknown() {
        assert!(create_transformer("unknown").is_err());
    }

    #[test]
    fn test_available_agents() {
        let agents = available_agents();
        assert_eq!(agents.len(), 5);
        assert!(agents.contains(&"attention"));
        assert!(agents.contains(&"literal"));
        assert!(agents.contains(&"narration"));
    }
}
