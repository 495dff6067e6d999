//! Vote aggregation and ranking engine
//!
//! ```text
//! (candidates, votes, group config)
//!        │
//!        ▼
//!  VoteAggregator ──► weights, boosts, breakdown      (aggregate)
//!        │
//!        ▼
//!  consensus label + badge, trend                      (consensus, trend)
//!        │
//!        ▼
//!  stable sort by composite score, ranks, top_choice   (engine)
//!        │
//!        ▼
//!  Vec<RankedResult>
//! ```
//!
//! The engine is synchronous and holds no state between calls. The reference
//! time is always injected, so identical inputs give identical output.

pub mod aggregate;
pub mod consensus;
pub mod engine;
pub mod result;
pub mod trend;

pub use aggregate::{CandidateTally, VoteAggregator};
pub use consensus::{Badge, ConsensusLevel, approval_percent};
pub use engine::{RankingOptions, compute_rankings, fallback_rankings, try_compute_rankings};
pub use result::{RankedResult, TimelineEntry, VoteBreakdown, VoterEntry};
pub use trend::Trend;
