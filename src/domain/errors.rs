//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Malformed or missing input file. Fatal; no partial output is written.
    #[error("Input error: {0}")]
    Input(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Artifact write failure.
    #[error("Report sink error: {0}")]
    Sink(String),
}
