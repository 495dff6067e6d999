//! JSON file snapshot source
//!
//! Reads a [`GroupSnapshot`] from a JSON document on disk. The file is read
//! on every `load`, so a long-lived source always sees the latest export.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tablevote_application::{GroupSnapshot, SnapshotSource, SnapshotSourceError};
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading a snapshot file
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Snapshot file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<SnapshotError> for SnapshotSourceError {
    fn from(err: SnapshotError) -> Self {
        match &err {
            SnapshotError::NotFound(path) => Self::NotFound(path.display().to_string()),
            SnapshotError::Io { .. } => Self::Io(err.to_string()),
            SnapshotError::Parse { .. } => Self::Malformed(err.to_string()),
        }
    }
}

/// Snapshot source backed by a JSON file
pub struct JsonFileSnapshotSource {
    path: PathBuf,
}

impl JsonFileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the snapshot file
    pub async fn read(&self) -> Result<GroupSnapshot, SnapshotError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => SnapshotError::NotFound(self.path.clone()),
                _ => SnapshotError::Io {
                    path: self.path.clone(),
                    source,
                },
            })?;

        let snapshot: GroupSnapshot =
            serde_json::from_str(&content).map_err(|source| SnapshotError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            "Loaded snapshot {}: {} candidates, {} votes, {} members",
            self.path.display(),
            snapshot.candidates.len(),
            snapshot.votes.len(),
            snapshot.members.len()
        );
        Ok(snapshot)
    }
}

#[async_trait]
impl SnapshotSource for JsonFileSnapshotSource {
    async fn load(&self) -> Result<GroupSnapshot, SnapshotSourceError> {
        Ok(self.read().await?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
