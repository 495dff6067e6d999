//! Group-level settings consumed by the ranking engine

use super::member::{MemberEntry, Membership};
use crate::core::error::RankingError;
use serde::{Deserialize, Serialize};

/// Default like ratio required for the `group_favorite` badge
pub const DEFAULT_CONSENSUS_THRESHOLD: f64 = 0.7;

/// Default cap on candidates referenced by a single recommendation
pub const DEFAULT_MAX_ALTERNATIVES: usize = 3;

/// Settings for the recommendation generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationSettings {
    /// Disable to always get an empty recommendation list
    pub enabled: bool,
    /// Maximum number of candidates referenced per recommendation
    pub max_alternatives: usize,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            max_alternatives: DEFAULT_MAX_ALTERNATIVES,
        }
    }
}

/// Membership and thresholds of one group
///
/// # Example
///
/// ```
/// use tablevote_domain::{GroupConfig, MemberEntry};
///
/// let config = GroupConfig::new(vec![MemberEntry::from("u1"), MemberEntry::from("u2")])
///     .with_consensus_threshold(0.6);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.membership().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    pub members: Vec<MemberEntry>,
    /// Like ratio in [0, 1] gating the `group_favorite` badge
    pub consensus_threshold: f64,
    pub recommendations: RecommendationSettings,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            members: Vec::new(),
            consensus_threshold: DEFAULT_CONSENSUS_THRESHOLD,
            recommendations: RecommendationSettings::default(),
        }
    }
}

impl GroupConfig {
    pub fn new(members: Vec<MemberEntry>) -> Self {
        Self {
            members,
            ..Self::default()
        }
    }

    pub fn with_consensus_threshold(mut self, threshold: f64) -> Self {
        self.consensus_threshold = threshold;
        self
    }

    pub fn with_recommendations(mut self, settings: RecommendationSettings) -> Self {
        self.recommendations = settings;
        self
    }

    /// Normalize the member list into a hash-indexed lookup
    pub fn membership(&self) -> Membership {
        Membership::from_entries(&self.members)
    }

    pub fn validate(&self) -> Result<(), RankingError> {
        if !(0.0..=1.0).contains(&self.consensus_threshold) {
            return Err(RankingError::InvalidThreshold(self.consensus_threshold));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        let config = GroupConfig::default();
        assert_eq!(config.consensus_threshold, 0.7);
        assert!(config.recommendations.enabled);
        assert_eq!(config.recommendations.max_alternatives, 3);
    }

    #[test]
    fn test_validate_rejects_out_of_range_threshold() {
        let config = GroupConfig::default().with_consensus_threshold(1.2);
        assert_eq!(config.validate(), Err(RankingError::InvalidThreshold(1.2)));
    }

    #[test]
    fn test_validate_rejects_nan_threshold() {
        let config = GroupConfig::default().with_consensus_threshold(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: GroupConfig =
            serde_json::from_str(r#"{"members": ["u1"], "consensus_threshold": 0.6}"#).unwrap();
        assert_eq!(config.members.len(), 1);
        assert_eq!(config.consensus_threshold, 0.6);
        assert_eq!(config.recommendations, RecommendationSettings::default());
    }
}
