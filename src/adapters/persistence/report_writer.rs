//! Implements ReportSink. Writes the two artifacts as UTF-8 files.

use crate::domain::{ChatStats, DomainError};
use crate::ports::ReportSink;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Filesystem artifact writer. Creates parent directories as needed.
pub struct FsReportSink;

impl FsReportSink {
    async fn ensure_parent(path: &Path) -> Result<(), DomainError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::Sink(format!("create {}: {}", parent.display(), e)))?;
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ReportSink for FsReportSink {
    async fn write_stats(&self, path: &Path, stats: &ChatStats) -> Result<(), DomainError> {
        let json = serde_json::to_string_pretty(stats)
            .map_err(|e| DomainError::Serialize(e.to_string()))?;
        Self::ensure_parent(path).await?;
        fs::write(path, json)
            .await
            .map_err(|e| DomainError::Sink(format!("write {}: {}", path.display(), e)))?;
        info!(path = %path.display(), "stats artifact written");
        Ok(())
    }

    async fn write_text(&self, path: &Path, text: &str) -> Result<(), DomainError> {
        Self::ensure_parent(path).await?;
        fs::write(path, text)
            .await
            .map_err(|e| DomainError::Sink(format!("write {}: {}", path.display(), e)))?;
        info!(path = %path.display(), "simplified text written");
        Ok(())
    }
}
