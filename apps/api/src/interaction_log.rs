//! Append-only interaction log: a best-effort, write-only record of each
//! turn. The sink is pluggable behind a trait held in `AppState`, and all
//! appends are dispatched fire-and-forget so a slow or unavailable sink can
//! never add latency or failure risk to the matching path.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// One logged turn.
#[derive(Debug, Clone, Serialize)]
pub struct InteractionEntry {
    /// UTC ISO-8601 timestamp.
    pub timestamp: String,
    /// The raw user message, untouched.
    pub message: String,
    /// Comma-joined matched job titles, or the literal "No matches".
    pub matched_titles: String,
}

impl InteractionEntry {
    pub fn new(message: &str, matched_titles: &[String]) -> Self {
        let matched = if matched_titles.is_empty() {
            "No matches".to_string()
        } else {
            matched_titles.join(", ")
        };
        InteractionEntry {
            timestamp: Utc::now().to_rfc3339(),
            message: message.to_string(),
            matched_titles: matched,
        }
    }
}

/// The interaction sink. Implementations must be safe to call concurrently.
#[async_trait]
pub trait InteractionLogger: Send + Sync {
    async fn append(&self, entry: InteractionEntry) -> Result<()>;
}

/// Appends entries as CSV rows to a local file, creating it on first write.
pub struct CsvFileLogger {
    path: PathBuf,
}

impl CsvFileLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvFileLogger { path: path.into() }
    }
}

#[async_trait]
impl InteractionLogger for CsvFileLogger {
    async fn append(&self, entry: InteractionEntry) -> Result<()> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open interaction log at {}", path.display()))?;
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(file);
            writer
                .serialize(&entry)
                .context("failed to serialize interaction entry")?;
            writer.flush().context("failed to flush interaction log")?;
            Ok(())
        })
        .await
        .context("interaction log task panicked")?
    }
}

/// Discards every entry. Used in tests.
pub struct NoopLogger;

#[async_trait]
impl InteractionLogger for NoopLogger {
    async fn append(&self, _entry: InteractionEntry) -> Result<()> {
        Ok(())
    }
}

/// Detaches the append from the request path. Errors are reported to the
/// diagnostic stream and swallowed; the turn's response is never affected.
pub fn dispatch(logger: Arc<dyn InteractionLogger>, entry: InteractionEntry) {
    tokio::spawn(async move {
        if let Err(error) = logger.append(entry).await {
            warn!("interaction log append failed: {error:#}");
        }
    });
}
