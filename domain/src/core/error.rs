//! Domain error types

use thiserror::Error;

/// Faults raised while ranking a group's candidates.
///
/// These never reach callers of [`compute_rankings`](crate::ranking::compute_rankings);
/// the orchestrator absorbs them into a neutral fallback ranking. They are
/// surfaced by [`try_compute_rankings`](crate::ranking::try_compute_rankings)
/// for callers that want to inspect the failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankingError {
    #[error("Consensus threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("Weighted vote total for candidate {0} is out of range")]
    VoteTotalOverflow(String),

    #[error("Composite score for candidate {0} is not finite")]
    NonFiniteScore(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_threshold_display() {
        let error = RankingError::InvalidThreshold(1.5);
        assert_eq!(
            error.to_string(),
            "Consensus threshold must be within [0, 1], got 1.5"
        );
    }

    #[test]
    fn test_vote_total_overflow_display() {
        let error = RankingError::VoteTotalOverflow("r1".to_string());
        assert_eq!(
            error.to_string(),
            "Weighted vote total for candidate r1 is out of range"
        );
    }
}
