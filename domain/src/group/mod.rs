//! Group decision inputs
//!
//! The engine treats all of these as read-only snapshots supplied by an
//! outer persistence layer.

pub mod candidate;
pub mod member;
pub mod settings;

pub use candidate::{Candidate, Engagement};
pub use member::{Member, MemberEntry, Membership, UNKNOWN_VOTER_NAME, VoterProfile};
pub use settings::{
    DEFAULT_CONSENSUS_THRESHOLD, DEFAULT_MAX_ALTERNATIVES, GroupConfig, RecommendationSettings,
};
