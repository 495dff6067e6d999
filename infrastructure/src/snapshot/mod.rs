//! Snapshot adapters
//!
//! Implementations of the [`SnapshotSource`](tablevote_application::SnapshotSource)
//! port.

mod json_file;

pub use json_file::{JsonFileSnapshotSource, SnapshotError};
