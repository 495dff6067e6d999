//! Recommendation value objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of suggestion offered to a deadlocked group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    /// Same-cuisine options with stronger agreement than a contested pick
    Compromise,
    /// Same-price options popular with the group, offered for a low-consensus pick
    Alternative,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationKind::Compromise => "compromise",
            RecommendationKind::Alternative => "alternative",
        }
    }
}

impl std::fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A suggestion card derived from a ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Deterministic id: `{kind}-{anchor candidate id}`
    pub id: String,
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    /// Suggested candidates, best first
    pub candidate_ids: Vec<String>,
    /// Candidate the suggestion was derived from
    pub anchor_candidate_id: String,
    pub confidence: f64,
    pub reasoning: String,
    pub created_at: DateTime<Utc>,
}
