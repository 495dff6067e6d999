//! Vote events cast by group members
//!
//! This module defines the voting primitives fed into the ranking engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    Like,
    Dislike,
}

impl VoteChoice {
    pub fn is_like(&self) -> bool {
        matches!(self, VoteChoice::Like)
    }
}

impl std::fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoteChoice::Like => write!(f, "like"),
            VoteChoice::Dislike => write!(f, "dislike"),
        }
    }
}

/// Voter authority level
///
/// Unrecognized values deserialize to [`Authority::Standard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Authority {
    Admin,
    Verified,
    #[default]
    Standard,
}

impl Authority {
    /// Weight multiplier granted by this authority level
    pub fn multiplier(&self) -> f64 {
        match self {
            Authority::Admin => 1.5,
            Authority::Verified => 1.2,
            Authority::Standard => 1.0,
        }
    }
}

impl From<String> for Authority {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "admin" => Authority::Admin,
            "verified" => Authority::Verified,
            _ => Authority::Standard,
        }
    }
}

/// A single like/dislike event on a candidate
///
/// Every optional field has a documented default: `base_weight` is 1,
/// `authority` is standard, a missing `timestamp` contributes no recency boost
/// and sorts as the oldest vote.
///
/// # Example
///
/// ```
/// use tablevote_domain::{Authority, Vote};
///
/// let vote = Vote::like("u1", "r1")
///     .with_authority(Authority::Admin)
///     .with_reason("Great value for money");
/// assert!(vote.choice.is_like());
/// assert_eq!(vote.base_weight(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub voter_id: String,
    pub candidate_id: String,
    pub choice: VoteChoice,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority: Option<Authority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Vote {
    pub fn new(
        voter_id: impl Into<String>,
        candidate_id: impl Into<String>,
        choice: VoteChoice,
    ) -> Self {
        Self {
            voter_id: voter_id.into(),
            candidate_id: candidate_id.into(),
            choice,
            base_weight: None,
            authority: None,
            timestamp: None,
            reason: None,
        }
    }

    pub fn like(voter_id: impl Into<String>, candidate_id: impl Into<String>) -> Self {
        Self::new(voter_id, candidate_id, VoteChoice::Like)
    }

    pub fn dislike(voter_id: impl Into<String>, candidate_id: impl Into<String>) -> Self {
        Self::new(voter_id, candidate_id, VoteChoice::Dislike)
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.base_weight = Some(weight);
        self
    }

    pub fn with_authority(mut self, authority: Authority) -> Self {
        self.authority = Some(authority);
        self
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn base_weight(&self) -> f64 {
        self.base_weight.unwrap_or(1.0)
    }

    pub fn authority(&self) -> Authority {
        self.authority.unwrap_or_default()
    }

    /// Non-empty, trimmed justification text
    pub fn reason_text(&self) -> Option<&str> {
        self.reason
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }
}

/// Order votes most-recent-first; untimestamped votes sort last.
///
/// The sort is stable, so votes with equal timestamps keep their input order.
pub fn sort_most_recent_first(votes: &mut [&Vote]) {
    votes.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_authority_multiplier() {
        assert_eq!(Authority::Admin.multiplier(), 1.5);
        assert_eq!(Authority::Verified.multiplier(), 1.2);
        assert_eq!(Authority::Standard.multiplier(), 1.0);
    }

    #[test]
    fn test_unknown_authority_deserializes_to_standard() {
        let vote: Vote = serde_json::from_str(
            r#"{"voter_id":"u1","candidate_id":"r1","choice":"like","authority":"owner"}"#,
        )
        .unwrap();
        assert_eq!(vote.authority(), Authority::Standard);
    }

    #[test]
    fn test_authority_serializes_lowercase() {
        let json = serde_json::to_string(&Authority::Verified).unwrap();
        assert_eq!(json, "\"verified\"");
    }

    #[test]
    fn test_timestamp_round_trips_as_rfc3339() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 1, 18, 30, 0).unwrap();
        let vote = Vote::like("u1", "r1").at(ts);
        let json = serde_json::to_value(&vote).unwrap();
        assert_eq!(json["timestamp"], "2026-03-01T18:30:00Z");
    }

    #[test]
    fn test_reason_text_skips_blank() {
        assert_eq!(Vote::like("u", "r").with_reason("   ").reason_text(), None);
        assert_eq!(
            Vote::like("u", "r").with_reason(" Too loud ").reason_text(),
            Some("Too loud")
        );
    }

    #[test]
    fn test_sort_most_recent_first_puts_missing_last() {
        let old = Vote::like("a", "r").at(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
        let new = Vote::like("b", "r").at(Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap());
        let none = Vote::like("c", "r");
        let mut votes = vec![&none, &old, &new];

        sort_most_recent_first(&mut votes);

        let order: Vec<_> = votes.iter().map(|v| v.voter_id.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }
}
