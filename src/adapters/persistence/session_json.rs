//! Implements SessionSource. Loads the exported transcript from a JSON file.

use crate::domain::{ChatSession, DomainError};
use crate::ports::SessionSource;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// JSON file transcript loader.
pub struct JsonSessionSource;

#[async_trait::async_trait]
impl SessionSource for JsonSessionSource {
    async fn load(&self, path: &Path) -> Result<ChatSession, DomainError> {
        let raw = fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::Input(format!("read {}: {}", path.display(), e)))?;
        let session: ChatSession = serde_json::from_str(&raw)
            .map_err(|e| DomainError::Input(format!("parse {}: {}", path.display(), e)))?;
        info!(
            path = %path.display(),
            messages = session.messages.len(),
            members = session.members.len(),
            "loaded transcript"
        );
        Ok(session)
    }
}
