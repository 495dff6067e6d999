//! Infrastructure layer for tablevote
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod clock;
pub mod config;
pub mod logging;
pub mod snapshot;

// Re-export commonly used types
pub use clock::SystemClock;
pub use config::{
    ConfigLoader, FileConfig, FileGroupConfig, FileOutputConfig, FileOutputFormat,
    FileRecommendationConfig,
};
pub use logging::JsonlRankingAuditLog;
pub use snapshot::{JsonFileSnapshotSource, SnapshotError};
