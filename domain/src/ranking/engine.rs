//! Ranking orchestration
//!
//! Runs aggregation, consensus classification and trend detection over the
//! full candidate set, sorts by composite score and assigns dense 1-based
//! ranks. [`compute_rankings`] never fails: any internal fault is logged and
//! replaced by a neutral ranking in input order.

use super::aggregate::VoteAggregator;
use super::consensus::{Badge, BadgeInputs, ConsensusLevel, approval_percent, assign_badge};
use super::result::RankedResult;
use super::trend::Trend;
use crate::core::error::RankingError;
use crate::group::{Candidate, GroupConfig};
use crate::voting::Vote;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Optional context for a ranking run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingOptions {
    /// Group size used for participation; defaults to the membership size
    pub member_count: Option<usize>,
    pub group_config: Option<GroupConfig>,
    /// Discussion thread sizes keyed by candidate id
    pub discussion_counts: HashMap<String, u32>,
}

impl RankingOptions {
    pub fn with_group_config(mut self, config: GroupConfig) -> Self {
        self.group_config = Some(config);
        self
    }

    pub fn with_member_count(mut self, count: usize) -> Self {
        self.member_count = Some(count);
        self
    }

    pub fn with_discussion_count(mut self, candidate_id: impl Into<String>, count: u32) -> Self {
        self.discussion_counts.insert(candidate_id.into(), count);
        self
    }
}

/// Rank candidates, falling back to a neutral ranking on any internal fault.
///
/// The output always has one result per input candidate.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use tablevote_domain::{Candidate, RankingOptions, Vote, compute_rankings};
///
/// let candidates = vec![Candidate::new("a", "Ramen"), Candidate::new("b", "Tacos")];
/// let votes = vec![Vote::like("u1", "b"), Vote::like("u2", "b")];
///
/// let ranked = compute_rankings(&candidates, &votes, &RankingOptions::default(), Utc::now());
/// assert_eq!(ranked[0].candidate.id, "b");
/// assert_eq!(ranked[1].rank, 2);
/// ```
pub fn compute_rankings(
    candidates: &[Candidate],
    votes: &[Vote],
    options: &RankingOptions,
    now: DateTime<Utc>,
) -> Vec<RankedResult> {
    match try_compute_rankings(candidates, votes, options, now) {
        Ok(ranked) => ranked,
        Err(e) => {
            warn!(
                "Ranking failed for {} candidates, returning neutral order: {}",
                candidates.len(),
                e
            );
            fallback_rankings(candidates)
        }
    }
}

/// Rank candidates, surfacing internal faults instead of degrading
pub fn try_compute_rankings(
    candidates: &[Candidate],
    votes: &[Vote],
    options: &RankingOptions,
    now: DateTime<Utc>,
) -> Result<Vec<RankedResult>, RankingError> {
    let default_config = GroupConfig::default();
    let config = options.group_config.as_ref().unwrap_or(&default_config);
    config.validate()?;

    let membership = config.membership();
    let member_count = options.member_count.unwrap_or(membership.len());
    let aggregator = VoteAggregator::new(&membership, now);

    let mut by_candidate: HashMap<&str, Vec<&Vote>> = HashMap::new();
    for vote in votes {
        by_candidate
            .entry(vote.candidate_id.as_str())
            .or_default()
            .push(vote);
    }

    let mut ranked = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let candidate_votes = by_candidate
            .get(candidate.id.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default();
        let tally = aggregator.aggregate(candidate, candidate_votes)?;
        let discussion_count = options
            .discussion_counts
            .get(&candidate.id)
            .copied()
            .unwrap_or(0);

        let badge = assign_badge(&BadgeInputs {
            total_votes: tally.total_votes,
            dislikes: tally.dislikes,
            like_ratio: tally.like_ratio,
            engagement: candidate.engagement.total(),
            discussion_count,
            consensus_threshold: config.consensus_threshold,
        });

        debug!(
            candidate = %candidate.id,
            score = tally.composite_score,
            likes = tally.likes,
            dislikes = tally.dislikes,
            "Scored candidate"
        );

        ranked.push(RankedResult {
            candidate: candidate.clone(),
            rank: 0,
            composite_score: tally.composite_score,
            net_score: tally.net_score,
            likes: tally.likes,
            dislikes: tally.dislikes,
            total_votes: tally.total_votes,
            like_ratio: tally.like_ratio,
            engagement_boost: tally.engagement_boost,
            recency_boost: tally.recency_boost,
            distance_boost: tally.distance_boost,
            authority_applied: tally.authority_applied,
            consensus: ConsensusLevel::from_ratio(tally.like_ratio),
            badge,
            trend: Trend::detect(candidate_votes),
            approval_percent: approval_percent(tally.like_ratio),
            participation_percent: participation_percent(tally.voter_count, member_count),
            discussion_count,
            breakdown: tally.breakdown,
        });
    }

    // Stable: equal scores keep input order
    ranked.sort_by(|a, b| b.composite_score.total_cmp(&a.composite_score));

    for (index, result) in ranked.iter_mut().enumerate() {
        result.rank = index + 1;
    }

    if let Some(first) = ranked.first_mut()
        && first.badge.is_none()
    {
        first.badge = Some(Badge::TopChoice);
    }

    Ok(ranked)
}

/// Neutral ranking: input order, zeroed counters, no badges
pub fn fallback_rankings(candidates: &[Candidate]) -> Vec<RankedResult> {
    candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| RankedResult::neutral(candidate.clone(), index + 1))
        .collect()
}

fn participation_percent(voters: usize, member_count: usize) -> Option<u8> {
    if member_count == 0 {
        return None;
    }
    let share = (voters as f64 / member_count as f64).min(1.0);
    Some((share * 100.0).round() as u8)
}
