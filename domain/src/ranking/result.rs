//! Ranking output types
//!
//! These are immutable value objects produced fresh on every invocation:
//! - [`RankedResult`] - one candidate with its score, labels and rank
//! - [`VoteBreakdown`] - who voted, who abstained and why

use super::consensus::{Badge, ConsensusLevel};
use super::trend::Trend;
use crate::group::Candidate;
use crate::voting::{ReasonTally, VoteChoice};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A voter as shown in the liker/disliker lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoterEntry {
    pub user_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Effective weight after authority and membership multipliers
    pub weight: f64,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// One raw vote in the chronological timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub user_id: String,
    pub name: String,
    pub choice: VoteChoice,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Structured explanation of a candidate's votes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoteBreakdown {
    /// Likers, most recent first
    pub likers: Vec<VoterEntry>,
    /// Dislikers, most recent first
    pub dislikers: Vec<VoterEntry>,
    /// Member ids that cast no vote on this candidate, in membership order
    pub abstainers: Vec<String>,
    /// Reason categories by descending count
    pub reasons: Vec<ReasonTally>,
    /// Every raw vote, most recent first
    pub timeline: Vec<TimelineEntry>,
}

/// A ranked candidate with its full scoring metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub candidate: Candidate,
    /// 1-based position in the ranking
    pub rank: usize,
    /// Sole sort key: net score plus all boosts
    pub composite_score: f64,
    pub net_score: i64,
    /// Weighted like total, rounded
    pub likes: u64,
    /// Weighted dislike total, rounded
    pub dislikes: u64,
    pub total_votes: u64,
    pub like_ratio: f64,
    pub engagement_boost: f64,
    pub recency_boost: f64,
    /// Reserved for location-aware scoring; always zero
    pub distance_boost: f64,
    /// Whether any vote had a non-default authority or membership weight
    pub authority_applied: bool,
    pub consensus: ConsensusLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    pub trend: Trend,
    pub approval_percent: u8,
    /// Share of the group that voted on this candidate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participation_percent: Option<u8>,
    pub discussion_count: u32,
    pub breakdown: VoteBreakdown,
}

impl RankedResult {
    /// Zeroed result used when ranking fails
    pub fn neutral(candidate: Candidate, rank: usize) -> Self {
        Self {
            candidate,
            rank,
            composite_score: 0.0,
            net_score: 0,
            likes: 0,
            dislikes: 0,
            total_votes: 0,
            like_ratio: 0.0,
            engagement_boost: 0.0,
            recency_boost: 0.0,
            distance_boost: 0.0,
            authority_applied: false,
            consensus: ConsensusLevel::Low,
            badge: None,
            trend: Trend::Steady,
            approval_percent: 0,
            participation_percent: None,
            discussion_count: 0,
            breakdown: VoteBreakdown::default(),
        }
    }

    pub fn candidate_id(&self) -> &str {
        &self.candidate.id
    }

    pub fn has_badge(&self, badge: Badge) -> bool {
        self.badge == Some(badge)
    }
}
