//! Consensus labels and badges
//!
//! Badge rules are evaluated in a fixed order and later rules override
//! earlier ones: `group_favorite`, then `unanimous`, then `contested`.
//! `top_choice` is only handed out after sorting, to an unbadged rank 1.

use serde::{Deserialize, Serialize};

/// Minimum weighted votes for `group_favorite` and `unanimous`
pub const MIN_VOTES_FOR_AGREEMENT_BADGE: u64 = 3;
/// Minimum weighted votes for `contested`
pub const MIN_VOTES_FOR_CONTESTED: u64 = 5;
/// Engagement total that makes a split vote a live debate
pub const CONTESTED_MIN_ENGAGEMENT: u64 = 10;
/// Discussion count that makes a split vote a live debate
pub const CONTESTED_MIN_DISCUSSION: u32 = 5;

/// Coarse agreement label derived from the like ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsensusLevel {
    Strong,
    Moderate,
    Mixed,
    Low,
}

impl ConsensusLevel {
    /// `≥0.8` strong, `≥0.6` moderate, `≥0.4` mixed, otherwise low
    pub fn from_ratio(like_ratio: f64) -> Self {
        if like_ratio >= 0.8 {
            ConsensusLevel::Strong
        } else if like_ratio >= 0.6 {
            ConsensusLevel::Moderate
        } else if like_ratio >= 0.4 {
            ConsensusLevel::Mixed
        } else {
            ConsensusLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsensusLevel::Strong => "strong",
            ConsensusLevel::Moderate => "moderate",
            ConsensusLevel::Mixed => "mixed",
            ConsensusLevel::Low => "low",
        }
    }
}

impl std::fmt::Display for ConsensusLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Highlighted designation shown next to a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    Unanimous,
    GroupFavorite,
    Contested,
    TopChoice,
}

impl Badge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::Unanimous => "unanimous",
            Badge::GroupFavorite => "group_favorite",
            Badge::Contested => "contested",
            Badge::TopChoice => "top_choice",
        }
    }

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Unanimous => "Unanimous",
            Badge::GroupFavorite => "Group Favorite",
            Badge::Contested => "Debated",
            Badge::TopChoice => "Top Choice",
        }
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inputs to the badge rules for one candidate
#[derive(Debug, Clone, Copy)]
pub struct BadgeInputs {
    pub total_votes: u64,
    pub dislikes: u64,
    pub like_ratio: f64,
    pub engagement: u64,
    pub discussion_count: u32,
    pub consensus_threshold: f64,
}

/// Assign the pre-sort badge for a candidate
pub fn assign_badge(inputs: &BadgeInputs) -> Option<Badge> {
    let mut badge = None;

    if inputs.total_votes >= MIN_VOTES_FOR_AGREEMENT_BADGE
        && inputs.like_ratio >= inputs.consensus_threshold
    {
        badge = Some(Badge::GroupFavorite);
    }

    if inputs.total_votes >= MIN_VOTES_FOR_AGREEMENT_BADGE && inputs.dislikes == 0 {
        badge = Some(Badge::Unanimous);
    }

    if inputs.total_votes >= MIN_VOTES_FOR_CONTESTED
        && (0.45..=0.55).contains(&inputs.like_ratio)
        && (inputs.engagement >= CONTESTED_MIN_ENGAGEMENT
            || inputs.discussion_count >= CONTESTED_MIN_DISCUSSION)
    {
        badge = Some(Badge::Contested);
    }

    badge
}

/// `round(like_ratio × 100)`
pub fn approval_percent(like_ratio: f64) -> u8 {
    (like_ratio.clamp(0.0, 1.0) * 100.0).round() as u8
}
