//! Effective vote weight resolution

use super::vote::Vote;
use crate::group::Membership;
use tracing::warn;

/// The resolved weight of one vote and the factors behind it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedWeight {
    pub effective: f64,
    pub authority_multiplier: f64,
    pub membership_weight: f64,
}

impl ResolvedWeight {
    /// Whether authority or membership weighting changed this vote
    pub fn is_adjusted(&self) -> bool {
        self.authority_multiplier != 1.0 || self.membership_weight != 1.0
    }
}

/// Resolves `base_weight × authority multiplier × membership weight`
pub struct WeightResolver<'a> {
    membership: &'a Membership,
}

impl<'a> WeightResolver<'a> {
    pub fn new(membership: &'a Membership) -> Self {
        Self { membership }
    }

    /// Resolve the weight of a vote.
    ///
    /// A negative or non-finite base or membership weight counts as 0, so a
    /// malformed vote never affects other candidates.
    pub fn resolve(&self, vote: &Vote) -> ResolvedWeight {
        let base = sanitize(&vote.voter_id, "base", vote.base_weight());
        let membership_weight = sanitize(
            &vote.voter_id,
            "membership",
            self.membership.profile(&vote.voter_id).weight,
        );
        let authority_multiplier = vote.authority().multiplier();

        ResolvedWeight {
            effective: base * authority_multiplier * membership_weight,
            authority_multiplier,
            membership_weight,
        }
    }
}

fn sanitize(voter_id: &str, kind: &str, weight: f64) -> f64 {
    if weight.is_finite() && weight >= 0.0 {
        weight
    } else {
        warn!("Ignoring invalid {} weight {} for voter {}", kind, weight, voter_id);
        0.0
    }
}
