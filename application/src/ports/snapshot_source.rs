//! Snapshot source port
//!
//! Defines how the application layer obtains the materialized inputs for a
//! ranking run. Adapters (JSON files, databases, HTTP) live in the
//! infrastructure layer.

use crate::snapshot::GroupSnapshot;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while loading a snapshot
#[derive(Error, Debug)]
pub enum SnapshotSourceError {
    #[error("Snapshot not found: {0}")]
    NotFound(String),

    #[error("Failed to read snapshot: {0}")]
    Io(String),

    #[error("Malformed snapshot: {0}")]
    Malformed(String),
}

/// Source of group snapshots
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Load the current snapshot
    async fn load(&self) -> Result<GroupSnapshot, SnapshotSourceError>;

    /// Human-readable description of where snapshots come from
    fn describe(&self) -> String;
}

/// In-memory source, for tests and embedding callers that already hold the data
pub struct StaticSnapshotSource {
    snapshot: GroupSnapshot,
}

impl StaticSnapshotSource {
    pub fn new(snapshot: GroupSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl SnapshotSource for StaticSnapshotSource {
    async fn load(&self) -> Result<GroupSnapshot, SnapshotSourceError> {
        Ok(self.snapshot.clone())
    }

    fn describe(&self) -> String {
        "in-memory snapshot".to_string()
    }
}
