//! Group defaults from TOML (`[group]` section)
//!
//! These values apply whenever a snapshot leaves the corresponding group
//! setting unspecified.
//!
//! ```toml
//! [group]
//! consensus_threshold = 0.7
//!
//! [group.recommendations]
//! enabled = true
//! max_alternatives = 3
//! ```

use serde::{Deserialize, Serialize};
use tablevote_application::RankingDefaults;
use tablevote_domain::group::{DEFAULT_CONSENSUS_THRESHOLD, DEFAULT_MAX_ALTERNATIVES};
use tablevote_domain::{ConfigIssue, ConfigIssueCode, GroupConfig, RecommendationSettings, Severity};

/// Raw `[group.recommendations]` settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRecommendationConfig {
    pub enabled: bool,
    pub max_alternatives: usize,
}

impl Default for FileRecommendationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_alternatives: DEFAULT_MAX_ALTERNATIVES,
        }
    }
}

/// Raw `[group]` settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGroupConfig {
    /// Like ratio required for the group favorite badge
    pub consensus_threshold: f64,
    pub recommendations: FileRecommendationConfig,
}

impl Default for FileGroupConfig {
    fn default() -> Self {
        Self {
            consensus_threshold: DEFAULT_CONSENSUS_THRESHOLD,
            recommendations: FileRecommendationConfig::default(),
        }
    }
}

impl FileGroupConfig {
    /// Convert into ranking defaults (with an empty member list)
    pub fn to_ranking_defaults(&self) -> RankingDefaults {
        RankingDefaults {
            group: GroupConfig::default()
                .with_consensus_threshold(self.consensus_threshold)
                .with_recommendations(RecommendationSettings {
                    enabled: self.recommendations.enabled,
                    max_alternatives: self.recommendations.max_alternatives,
                }),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if !(0.0..=1.0).contains(&self.consensus_threshold) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::ThresholdOutOfRange {
                    field: "group.consensus_threshold".to_string(),
                    value: self.consensus_threshold,
                },
                message: format!(
                    "group.consensus_threshold must be between 0 and 1, got {}",
                    self.consensus_threshold
                ),
            });
        }

        if self.recommendations.enabled && self.recommendations.max_alternatives == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::NoAlternativesAllowed,
                message: "group.recommendations.max_alternatives is 0, no picks will be suggested"
                    .to_string(),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_config_default() {
        let config = FileGroupConfig::default();
        assert_eq!(config.consensus_threshold, 0.7);
        assert!(config.recommendations.enabled);
        assert_eq!(config.recommendations.max_alternatives, 3);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_group_config_deserialize() {
        let toml_str = r#"
[group]
consensus_threshold = 0.6

[group.recommendations]
max_alternatives = 5
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.group.consensus_threshold, 0.6);
        assert!(config.group.recommendations.enabled);
        assert_eq!(config.group.recommendations.max_alternatives, 5);

        let defaults = config.group.to_ranking_defaults();
        assert_eq!(defaults.group.consensus_threshold, 0.6);
        assert_eq!(defaults.group.recommendations.max_alternatives, 5);
        assert!(defaults.group.members.is_empty());
    }

    #[test]
    fn test_validate_threshold_out_of_range() {
        let config = FileGroupConfig {
            consensus_threshold: 1.4,
            ..FileGroupConfig::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        let ConfigIssueCode::ThresholdOutOfRange { field, value } = &issues[0].code else {
            panic!("expected an out-of-range threshold, got {:?}", issues[0].code);
        };
        assert_eq!(field, "group.consensus_threshold");
        assert_eq!(*value, 1.4);
    }

    #[test]
    fn test_validate_zero_alternatives_warns() {
        let config = FileGroupConfig {
            recommendations: FileRecommendationConfig {
                enabled: true,
                max_alternatives: 0,
            },
            ..FileGroupConfig::default()
        };
        let issues = config.validate();
        assert_eq!(issues[0].severity, Severity::Warning);
    }
}
