//! Core domain types.
//!
//! Agent identities and the options record that travels with every
//! transformation. These are plain values with no I/O.

pub mod agent;
pub mod options;

pub use agent::Agent;
pub use options::{ContentContext, Medium, ProcessingOptions};
