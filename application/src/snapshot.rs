//! Group snapshot: the materialized inputs of one ranking run
//!
//! A snapshot is what an outer persistence layer hands over. Group settings
//! are optional; anything missing falls back to the configured defaults.
//!
//! ```json
//! {
//!   "candidates": [{ "id": "r1", "name": "Baan Thai", "cuisine": "Thai" }],
//!   "votes": [{ "voter_id": "u1", "candidate_id": "r1", "choice": "like" }],
//!   "members": ["u1", { "user_id": "u2", "name": "Mika", "vote_weight": 2.0 }],
//!   "consensus_threshold": 0.6,
//!   "discussion_counts": { "r1": 7 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tablevote_domain::{
    Candidate, GroupConfig, MemberEntry, RankingOptions, RecommendationSettings, Vote,
};

/// Inputs for one ranking run as supplied by callers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupSnapshot {
    pub candidates: Vec<Candidate>,
    pub votes: Vec<Vote>,
    pub members: Vec<MemberEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consensus_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<RecommendationSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_count: Option<usize>,
    pub discussion_counts: HashMap<String, u32>,
}

impl GroupSnapshot {
    /// Resolve the group config, filling unset settings from `defaults`
    pub fn group_config(&self, defaults: &GroupConfig) -> GroupConfig {
        GroupConfig {
            members: self.members.clone(),
            consensus_threshold: self
                .consensus_threshold
                .unwrap_or(defaults.consensus_threshold),
            recommendations: self
                .recommendations
                .clone()
                .unwrap_or_else(|| defaults.recommendations.clone()),
        }
    }

    /// Build ranking options for this snapshot
    pub fn ranking_options(&self, group: GroupConfig) -> RankingOptions {
        RankingOptions {
            member_count: self.member_count,
            group_config: Some(group),
            discussion_counts: self.discussion_counts.clone(),
        }
    }
}
