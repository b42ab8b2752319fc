//! # access-agents
//!
//! Rule-based accessibility agents for text.
//!
//! Five agents each rewrite text for a different reader: someone with
//! ADHD, a deaf reader, a dyslexic reader, an autistic reader, and a
//! listener relying on audio narration. The rewrites are pattern-based
//! heuristics (substitution tables, sentence segmentation, re-formatting),
//! not language understanding.
//!
//! ## Features
//!
//! - **Dispatch**: [`process`] picks an agent by identity, passing unknown
//!   identities through untouched
//! - **Rule tables**: ordered, auditable pattern → replacement tables per agent
//! - **Pure**: deterministic, no I/O, safe to call from many threads
//! - **CLI**: `access-agents` binary for single texts and parallel batches
//!
//! ```
//! use access_agents::{ProcessingOptions, process};
//!
//! let out = process("Agente TEA", "It is kind of cold.", &ProcessingOptions::default());
//! assert_eq!(out, "It is a little cold.");
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]

pub mod agents;
pub mod cli;
pub mod core;
pub mod dispatch;
pub mod error;
pub mod io;
pub mod speech;
pub mod text;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{Agent, ContentContext, Medium, ProcessingOptions};

// Re-export dispatch entry points
pub use dispatch::{process, process_with};

// Re-export agent types
pub use agents::{Transformer, available_agents, create_transformer, transformer_for};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
