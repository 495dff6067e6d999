//! Application layer for tablevote
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod snapshot;
pub mod use_cases;

// Re-export commonly used types
pub use config::RankingDefaults;
pub use ports::{
    audit_log::{AuditEvent, NoAuditLog, RankingAuditLog},
    clock::{Clock, FixedClock},
    snapshot_source::{SnapshotSource, SnapshotSourceError, StaticSnapshotSource},
};
pub use snapshot::GroupSnapshot;
pub use use_cases::rank_group::{RankGroupError, RankGroupInput, RankGroupOutput, RankGroupUseCase};
