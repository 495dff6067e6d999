//! Domain layer for tablevote
//!
//! This crate contains the vote-aggregation and ranking engine together with
//! its entities and value objects. It has no dependencies on infrastructure or
//! presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Ranking
//!
//! Group members cast weighted like/dislike votes on candidate restaurants.
//! [`compute_rankings`] turns those votes into a deterministic ranking:
//!
//! - **Composite score**: net score + engagement boost + recency boost
//! - **Consensus**: strong / moderate / mixed / low agreement label
//! - **Badge**: unanimous, group favorite, contested or top choice
//! - **Trend**: momentum of the most recent votes
//!
//! ## Recommendations
//!
//! [`generate_recommendations`] reads a finished ranking and proposes
//! compromise or alternative candidates when the group is split.

pub mod config;
pub mod core;
pub mod group;
pub mod ranking;
pub mod recommendation;
pub mod voting;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::RankingError;
pub use group::{
    Candidate, Engagement, GroupConfig, Member, MemberEntry, Membership, RecommendationSettings,
};
pub use ranking::{
    Badge, ConsensusLevel, RankedResult, RankingOptions, TimelineEntry, Trend, VoteBreakdown,
    VoterEntry, compute_rankings, fallback_rankings, try_compute_rankings,
};
pub use recommendation::{Recommendation, RecommendationKind, generate_recommendations};
pub use voting::{Authority, ReasonCategory, ReasonClassifier, ReasonTally, Vote, VoteChoice};
