//! Compromise and alternative suggestions
//!
//! Consumes a finished ranking and proposes other candidates when the
//! leading options are contested or have little support. Both kinds are
//! evaluated independently; a compromise, when present, comes first.

use super::entities::{Recommendation, RecommendationKind};
use crate::group::GroupConfig;
use crate::ranking::{Badge, ConsensusLevel, RankedResult};
use chrono::{DateTime, Utc};
use tracing::debug;

pub const COMPROMISE_CONFIDENCE: f64 = 0.8;
pub const ALTERNATIVE_CONFIDENCE: f64 = 0.7;

/// Generate recommendations for a ranking
pub fn generate_recommendations(
    ranked: &[RankedResult],
    config: &GroupConfig,
    now: DateTime<Utc>,
) -> Vec<Recommendation> {
    if !config.recommendations.enabled {
        return Vec::new();
    }

    let limit = config.recommendations.max_alternatives;
    let mut recommendations = Vec::new();

    if let Some(rec) = compromise(ranked, limit, now) {
        recommendations.push(rec);
    }
    if let Some(rec) = alternative(ranked, limit, now) {
        recommendations.push(rec);
    }

    debug!("Generated {} recommendations", recommendations.len());
    recommendations
}

fn compromise(
    ranked: &[RankedResult],
    limit: usize,
    now: DateTime<Utc>,
) -> Option<Recommendation> {
    let contested = ranked
        .iter()
        .filter(|r| r.has_badge(Badge::Contested) && (0.4..=0.6).contains(&r.like_ratio))
        .fold(None::<&RankedResult>, |best, r| match best {
            Some(b) if b.composite_score >= r.composite_score => Some(b),
            _ => Some(r),
        })?;

    let alternatives: Vec<&RankedResult> = ranked
        .iter()
        .filter(|r| r.candidate_id() != contested.candidate_id())
        .filter(|r| r.consensus == ConsensusLevel::Strong)
        .filter(|r| r.candidate.shares_cuisine(&contested.candidate))
        .take(limit)
        .collect();

    if alternatives.is_empty() {
        return None;
    }

    let cuisine = contested.candidate.cuisine.as_deref().unwrap_or_default();
    Some(Recommendation {
        id: format!("compromise-{}", contested.candidate_id()),
        kind: RecommendationKind::Compromise,
        title: format!("Can't agree on {}?", contested.candidate.name),
        description: format!(
            "The group is split on {}. {} has stronger support and is also {}.",
            contested.candidate.name,
            join_names(&alternatives),
            cuisine
        ),
        candidate_ids: ids(&alternatives),
        anchor_candidate_id: contested.candidate_id().to_string(),
        confidence: COMPROMISE_CONFIDENCE,
        reasoning: format!(
            "{} is debated at {}% over {} votes; {} other {} option(s) have strong consensus.",
            contested.candidate.name,
            contested.approval_percent,
            contested.total_votes,
            alternatives.len(),
            cuisine
        ),
        created_at: now,
    })
}

fn alternative(
    ranked: &[RankedResult],
    limit: usize,
    now: DateTime<Utc>,
) -> Option<Recommendation> {
    let anchor = ranked
        .iter()
        .find(|r| r.consensus == ConsensusLevel::Low && r.likes > 0)?;
    let price_tier = anchor.candidate.price_tier.as_deref()?;

    let alternatives: Vec<&RankedResult> = ranked
        .iter()
        .filter(|r| r.candidate_id() != anchor.candidate_id())
        .filter(|r| r.consensus == ConsensusLevel::Strong)
        .filter(|r| r.candidate.shares_price_tier(&anchor.candidate))
        .take(limit)
        .collect();

    if alternatives.is_empty() {
        return None;
    }

    Some(Recommendation {
        id: format!("alternative-{}", anchor.candidate_id()),
        kind: RecommendationKind::Alternative,
        title: format!("Alternatives to {}", anchor.candidate.name),
        description: format!(
            "{} has little support so far. {} in the same {} range is popular with the group.",
            anchor.candidate.name,
            join_names(&alternatives),
            price_tier
        ),
        candidate_ids: ids(&alternatives),
        anchor_candidate_id: anchor.candidate_id().to_string(),
        confidence: ALTERNATIVE_CONFIDENCE,
        reasoning: format!(
            "{} has {}% approval; {} option(s) at {} have strong consensus.",
            anchor.candidate.name,
            anchor.approval_percent,
            alternatives.len(),
            price_tier
        ),
        created_at: now,
    })
}

fn ids(results: &[&RankedResult]) -> Vec<String> {
    results.iter().map(|r| r.candidate_id().to_string()).collect()
}

fn join_names(results: &[&RankedResult]) -> String {
    results
        .iter()
        .map(|r| r.candidate.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
