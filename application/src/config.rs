//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave
//! when a snapshot leaves settings unspecified.

use tablevote_domain::{GroupConfig, RecommendationSettings};

/// Defaults applied to every ranking run.
#[derive(Debug, Clone, Default)]
pub struct RankingDefaults {
    /// Group settings used when the snapshot does not set them.
    /// Its member list is ignored; membership always comes from the snapshot.
    pub group: GroupConfig,
}

impl RankingDefaults {
    /// Creates defaults with the given consensus threshold.
    pub fn with_consensus_threshold(threshold: f64) -> Self {
        Self {
            group: GroupConfig::default().with_consensus_threshold(threshold),
        }
    }

    /// Replaces the default recommendation settings.
    pub fn with_recommendations(mut self, settings: RecommendationSettings) -> Self {
        self.group.recommendations = settings;
        self
    }
}
