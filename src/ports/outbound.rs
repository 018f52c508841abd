//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{ChatSession, ChatStats, DomainError};
use std::path::Path;

/// Word segmentation capability. The pipeline treats this as optional: the
/// null-object implementation returns no tokens, and word-frequency features
/// degrade to empty results instead of erroring.
pub trait Tokenizer: Send + Sync {
    /// Split free text into candidate words. Token order is the segmenter's
    /// internal order; downstream tie-breaks rely on it being stable per run.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// False for the null-object fallback. Checked once at startup for a
    /// one-time warning, never mid-pipeline.
    fn is_available(&self) -> bool {
        true
    }
}

/// Transcript source. Loads the exported chat session from disk.
#[async_trait::async_trait]
pub trait SessionSource: Send + Sync {
    /// Parse failures and unreadable files are fatal input errors;
    /// the core never runs on partial data.
    async fn load(&self, path: &Path) -> Result<ChatSession, DomainError>;
}

/// Artifact sink. Writes the two output files.
#[async_trait::async_trait]
pub trait ReportSink: Send + Sync {
    async fn write_stats(&self, path: &Path, stats: &ChatStats) -> Result<(), DomainError>;

    async fn write_text(&self, path: &Path, text: &str) -> Result<(), DomainError>;
}
