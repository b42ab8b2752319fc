//! Agent dispatch.
//!
//! The single entry point callers use: pick an agent by identity, run its
//! strategy, get text back. Identities that name no agent pass the text
//! through unchanged.

use crate::agents::transformer_for;
use crate::core::{Agent, ProcessingOptions};

/// Processes `text` with the agent named by `identity`.
///
/// Unknown identities return `text` unchanged. Never fails.
///
/// # Examples
///
/// ```
/// use access_agents::{ProcessingOptions, process};
///
/// let options = ProcessingOptions::default();
/// assert_eq!(process("Agente TDAH", "It is very late.", &options), "It is late.");
/// assert_eq!(process("Nobody", "as is", &options), "as is");
/// ```
#[must_use]
pub fn process(identity: &str, text: &str, options: &ProcessingOptions) -> String {
    match Agent::from_identity(identity) {
        Some(agent) => process_with(agent, text, options),
        None => {
            tracing::debug!(identity, "unknown agent identity, passing text through");
            text.to_string()
        }
    }
}

/// Processes `text` with a resolved agent.
#[must_use]
pub fn process_with(agent: Agent, text: &str, options: &ProcessingOptions) -> String {
    tracing::debug!(
        agent = agent.slug(),
        input_len = text.len(),
        context = %options.context,
        medium = %options.medium,
        keep_formatting = options.keep_formatting,
        "processing text"
    );
    let output = transformer_for(agent).transform(text, options);
    tracing::debug!(agent = agent.slug(), output_len = output.len(), "processed text");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_identities_dispatch() {
        let options = ProcessingOptions::default();
        assert_eq!(
            process("Agente Surdo", "I hear. You see.", &options),
            "I see/follow.\n\nYou see."
        );
        assert_eq!(
            process("Agente Dislexia", "Utilize it.", &options),
            "use it"
        );
        assert_eq!(
            process("Narrador", "Hi, there.", &options),
            "Hi, [short pause] there. [pause]"
        );
    }

    #[test]
    fn test_unknown_identity_passthrough() {
        let options = ProcessingOptions::default();
        assert_eq!(process("attention", "Very. Very.", &options), "Very. Very.");
        assert_eq!(process("", "text", &options), "text");
        assert_eq!(process("Agente tdah", "", &options), "");
    }

    #[test]
    fn test_empty_input_for_every_agent() {
        let options = ProcessingOptions::default();
        for agent in Agent::ALL {
            assert_eq!(process(agent.identity(), "", &options), "");
            assert_eq!(process_with(agent, "   \n", &options), "");
        }
    }
}
