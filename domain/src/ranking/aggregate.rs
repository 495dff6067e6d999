//! Per-candidate vote aggregation
//!
//! Turns the votes referencing one candidate into weighted totals, the
//! composite score and the vote breakdown.

use super::result::{TimelineEntry, VoteBreakdown, VoterEntry};
use crate::core::error::RankingError;
use crate::group::{Candidate, Membership};
use crate::voting::{ReasonClassifier, Vote, WeightResolver, sort_most_recent_first};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Cap on the engagement boost
pub const MAX_ENGAGEMENT_BOOST: f64 = 1.5;
/// Engagement total that earns one point of boost
pub const ENGAGEMENT_DIVISOR: f64 = 50.0;
/// Boost carried by a brand-new vote
pub const RECENCY_MAX_BOOST: f64 = 0.5;
/// Days over which the recency boost decays to zero
pub const RECENCY_WINDOW_DAYS: f64 = 14.0;

/// Largest weighted total that still converts to an exact integer count
pub const MAX_WEIGHTED_TOTAL: f64 = 9_007_199_254_740_992.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Aggregated numbers for one candidate, before ranking
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateTally {
    pub likes: u64,
    pub dislikes: u64,
    pub total_votes: u64,
    pub like_ratio: f64,
    pub net_score: i64,
    pub engagement_boost: f64,
    pub recency_boost: f64,
    pub distance_boost: f64,
    pub authority_applied: bool,
    pub composite_score: f64,
    /// Distinct voters on this candidate
    pub voter_count: usize,
    pub breakdown: VoteBreakdown,
}

/// Aggregates votes against a fixed membership and reference time
pub struct VoteAggregator<'a> {
    membership: &'a Membership,
    weights: WeightResolver<'a>,
    now: DateTime<Utc>,
}

impl<'a> VoteAggregator<'a> {
    pub fn new(membership: &'a Membership, now: DateTime<Utc>) -> Self {
        Self {
            membership,
            weights: WeightResolver::new(membership),
            now,
        }
    }

    /// Aggregate the votes referencing `candidate`.
    ///
    /// `votes` must already be filtered to this candidate.
    pub fn aggregate(
        &self,
        candidate: &Candidate,
        votes: &[&Vote],
    ) -> Result<CandidateTally, RankingError> {
        let mut weighted_likes = 0.0;
        let mut weighted_dislikes = 0.0;
        let mut recency_boost = 0.0;
        let mut authority_applied = false;
        let mut likers = Vec::new();
        let mut dislikers = Vec::new();

        let mut ordered = votes.to_vec();
        sort_most_recent_first(&mut ordered);

        for vote in &ordered {
            let resolved = self.weights.resolve(vote);
            authority_applied |= resolved.is_adjusted();

            let decayed = self.recency_weight(vote);
            let profile = self.membership.profile(&vote.voter_id);
            let entry = VoterEntry {
                user_id: vote.voter_id.clone(),
                name: profile.name,
                avatar: profile.avatar,
                timestamp: vote.timestamp,
                weight: resolved.effective,
                verified: profile.verified,
                reason: vote.reason_text().map(str::to_string),
            };

            if vote.choice.is_like() {
                weighted_likes += resolved.effective;
                recency_boost += decayed;
                likers.push(entry);
            } else {
                weighted_dislikes += resolved.effective;
                recency_boost -= decayed / 2.0;
                dislikers.push(entry);
            }
        }

        let overflow = || RankingError::VoteTotalOverflow(candidate.id.clone());
        let likes = weighted_count(weighted_likes).ok_or_else(overflow)?;
        let dislikes = weighted_count(weighted_dislikes).ok_or_else(overflow)?;
        let total_votes = likes.checked_add(dislikes).ok_or_else(overflow)?;
        let like_ratio = if total_votes > 0 {
            likes as f64 / total_votes as f64
        } else {
            0.0
        };
        let net_score = i64::try_from(likes)
            .ok()
            .zip(i64::try_from(dislikes).ok())
            .and_then(|(l, d)| l.checked_sub(d))
            .ok_or_else(overflow)?;
        let engagement_boost =
            (candidate.engagement.total() as f64 / ENGAGEMENT_DIVISOR).min(MAX_ENGAGEMENT_BOOST);
        let distance_boost = 0.0;

        let composite_score = net_score as f64 + engagement_boost + recency_boost + distance_boost;
        if !composite_score.is_finite() {
            return Err(RankingError::NonFiniteScore(candidate.id.clone()));
        }

        let voters: HashSet<&str> = votes.iter().map(|v| v.voter_id.as_str()).collect();
        let abstainers = self
            .membership
            .ids()
            .filter(|id| !voters.contains(id))
            .map(str::to_string)
            .collect();

        let timeline = ordered
            .iter()
            .map(|vote| TimelineEntry {
                user_id: vote.voter_id.clone(),
                name: self.membership.profile(&vote.voter_id).name,
                choice: vote.choice,
                timestamp: vote.timestamp,
                reason: vote.reason_text().map(str::to_string),
            })
            .collect();

        Ok(CandidateTally {
            likes,
            dislikes,
            total_votes,
            like_ratio,
            net_score,
            engagement_boost,
            recency_boost,
            distance_boost,
            authority_applied,
            composite_score,
            voter_count: voters.len(),
            breakdown: VoteBreakdown {
                likers,
                dislikers,
                abstainers,
                reasons: ReasonClassifier::tally(ordered.iter().filter_map(|v| v.reason_text())),
                timeline,
            },
        })
    }

    /// Linearly decayed boost for one vote; zero without a timestamp
    fn recency_weight(&self, vote: &Vote) -> f64 {
        let Some(timestamp) = vote.timestamp else {
            return 0.0;
        };
        let age_days =
            ((self.now - timestamp).num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY).max(0.0);
        RECENCY_MAX_BOOST * (1.0 - age_days / RECENCY_WINDOW_DAYS).max(0.0)
    }
}

/// Round a weighted total to a count, or `None` when it is out of range
fn weighted_count(total: f64) -> Option<u64> {
    let rounded = total.round();
    (0.0..=MAX_WEIGHTED_TOTAL)
        .contains(&rounded)
        .then_some(rounded as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::{Member, MemberEntry};
    use crate::voting::{Authority, ReasonCategory};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, 19, 0, 0).unwrap()
    }

    fn membership() -> Membership {
        Membership::from_entries(&[
            MemberEntry::from(Member::new("u1").with_name("Ada").verified()),
            MemberEntry::from(Member::new("u2").with_name("Bo").with_vote_weight(2.0)),
            MemberEntry::from("u3"),
        ])
    }

    fn aggregate(candidate: &Candidate, votes: &[Vote]) -> CandidateTally {
        let membership = membership();
        let refs: Vec<&Vote> = votes.iter().collect();
        VoteAggregator::new(&membership, now())
            .aggregate(candidate, &refs)
            .unwrap()
    }

    #[test]
    fn test_no_votes_yields_zeroes() {
        let tally = aggregate(&Candidate::new("r1", "Cafe"), &[]);

        assert_eq!(tally.likes, 0);
        assert_eq!(tally.dislikes, 0);
        assert_eq!(tally.like_ratio, 0.0);
        assert_eq!(tally.composite_score, 0.0);
        assert_eq!(tally.breakdown.abstainers, vec!["u1", "u2", "u3"]);
    }

    #[test]
    fn test_weighted_totals_are_rounded() {
        let votes = [
            Vote::like("u2", "r1"),                                  // 2.0
            Vote::like("u3", "r1").with_authority(Authority::Admin), // 1.5
            Vote::dislike("u1", "r1"),                               // 1.0
        ];
        let tally = aggregate(&Candidate::new("r1", "Cafe"), &votes);

        assert_eq!(tally.likes, 4); // 3.5 rounds up
        assert_eq!(tally.dislikes, 1);
        assert_eq!(tally.total_votes, 5);
        assert_eq!(tally.net_score, 3);
        assert!((tally.like_ratio - 0.8).abs() < 1e-9);
        assert!(tally.authority_applied);
    }

    #[test]
    fn test_default_weights_do_not_flag_authority() {
        let votes = [Vote::like("u1", "r1"), Vote::like("u3", "r1")];
        let tally = aggregate(&Candidate::new("r1", "Cafe"), &votes);

        assert!(!tally.authority_applied);
        assert_eq!(tally.likes + tally.dislikes, 2);
    }

    #[test]
    fn test_engagement_boost_is_capped() {
        let small = aggregate(&Candidate::new("a", "A").with_engagement(10, 10, 5), &[]);
        let huge = aggregate(&Candidate::new("b", "B").with_engagement(500, 0, 0), &[]);

        assert!((small.engagement_boost - 0.5).abs() < 1e-9);
        assert_eq!(huge.engagement_boost, MAX_ENGAGEMENT_BOOST);
        assert_eq!(huge.composite_score, MAX_ENGAGEMENT_BOOST);
    }

    #[test]
    fn test_recency_boost_decays_linearly() {
        let votes = [
            Vote::like("u1", "r1").at(now()),                        // +0.5
            Vote::like("u3", "r1").at(now() - Duration::days(7)),    // +0.25
            Vote::dislike("u2", "r1").at(now()),                     // -0.25
            Vote::dislike("x", "r1").at(now() - Duration::days(30)), // 0
            Vote::like("y", "r1"),                                   // no timestamp
        ];
        let tally = aggregate(&Candidate::new("r1", "Cafe"), &votes);

        assert!((tally.recency_boost - 0.5).abs() < 1e-9);
        assert_eq!(tally.distance_boost, 0.0);
    }

    #[test]
    fn test_composite_score_sums_components() {
        let candidate = Candidate::new("r1", "Cafe").with_engagement(25, 0, 0);
        let votes = [Vote::like("u1", "r1").at(now()), Vote::like("u3", "r1")];
        let tally = aggregate(&candidate, &votes);

        // net 2 + engagement 0.5 + recency 0.5
        assert!((tally.composite_score - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_lists_and_abstainers() {
        let votes = [
            Vote::like("u1", "r1")
                .at(now() - Duration::hours(5))
                .with_reason("Cheap and cheerful"),
            Vote::like("stranger", "r1").at(now() - Duration::hours(1)),
            Vote::dislike("u2", "r1")
                .at(now() - Duration::hours(3))
                .with_reason("Too pricey"),
        ];
        let tally = aggregate(&Candidate::new("r1", "Cafe"), &votes);
        let breakdown = &tally.breakdown;

        let likers: Vec<_> = breakdown.likers.iter().map(|e| e.user_id.as_str()).collect();
        assert_eq!(likers, vec!["stranger", "u1"]);
        assert_eq!(breakdown.likers[0].name, "Unknown");
        assert!(breakdown.likers[1].verified);
        assert_eq!(breakdown.dislikers[0].weight, 2.0);
        assert_eq!(breakdown.abstainers, vec!["u3"]);
        assert_eq!(breakdown.reasons[0].category, ReasonCategory::Price);
        assert_eq!(breakdown.reasons[0].count, 2);

        let timeline: Vec<_> = breakdown.timeline.iter().map(|e| e.user_id.as_str()).collect();
        assert_eq!(timeline, vec!["stranger", "u2", "u1"]);
        assert_eq!(tally.voter_count, 3);
    }

    #[test]
    fn test_duplicate_votes_are_summed() {
        let votes = [Vote::like("u1", "r1"), Vote::like("u1", "r1")];
        let tally = aggregate(&Candidate::new("r1", "Cafe"), &votes);

        assert_eq!(tally.likes, 2);
        assert_eq!(tally.voter_count, 1);
        assert_eq!(tally.breakdown.timeline.len(), 2);
    }

    #[test]
    fn test_invalid_weight_counts_as_zero() {
        let votes = [
            Vote::like("u1", "r1").with_weight(f64::INFINITY),
            Vote::like("u3", "r1").with_weight(-4.0),
            Vote::dislike("u2", "r1"),
        ];
        let tally = aggregate(&Candidate::new("r1", "Cafe"), &votes);

        assert_eq!(tally.likes, 0);
        assert_eq!(tally.dislikes, 2);
        assert_eq!(tally.net_score, -2);
        assert_eq!(tally.breakdown.likers.len(), 2);
        assert!(tally.breakdown.likers.iter().all(|e| e.weight == 0.0));
    }

    #[test]
    fn test_oversized_weights_overflow_instead_of_wrapping() {
        let membership = membership();
        let candidate = Candidate::new("r1", "Cafe");
        let like = Vote::like("u1", "r1").with_weight(1e20);
        let dislike = Vote::dislike("u3", "r1").with_weight(1e20);
        let aggregator = VoteAggregator::new(&membership, now());

        let huge = Vote::like("u1", "r1").with_weight(1e19);

        let both = aggregator.aggregate(&candidate, &[&like, &dislike]);
        let single = aggregator.aggregate(&candidate, &[&huge]);

        assert_eq!(both, Err(RankingError::VoteTotalOverflow("r1".to_string())));
        assert!(matches!(single, Err(RankingError::VoteTotalOverflow(_))));
    }

    #[test]
    fn test_large_weight_within_range_keeps_positive_net() {
        let votes = [Vote::like("u1", "r1").with_weight(1e15)];
        let tally = aggregate(&Candidate::new("r1", "Cafe"), &votes);

        assert_eq!(tally.likes, 1_000_000_000_000_000);
        assert_eq!(tally.net_score, 1_000_000_000_000_000);
    }
}
