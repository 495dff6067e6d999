//! Voting primitives
//!
//! - [`vote::Vote`] - a single like/dislike event with optional weighting
//! - [`weight::WeightResolver`] - effective weight from authority and membership
//! - [`reason::ReasonClassifier`] - keyword categories for vote justifications

pub mod reason;
pub mod vote;
pub mod weight;

pub use reason::{MAX_REASON_EXAMPLES, ReasonCategory, ReasonClassifier, ReasonTally};
pub use vote::{Authority, Vote, VoteChoice, sort_most_recent_first};
pub use weight::{ResolvedWeight, WeightResolver};
