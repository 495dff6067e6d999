//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod group;
mod output;

pub use group::{FileGroupConfig, FileRecommendationConfig};
pub use output::{FileOutputConfig, FileOutputFormat};

use serde::{Deserialize, Serialize};
use tablevote_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Default group settings
    pub group: FileGroupConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.group.validate()
    }
}
