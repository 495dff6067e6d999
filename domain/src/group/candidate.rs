//! Candidate restaurants being ranked by a group

use serde::{Deserialize, Serialize};

/// Engagement counters collected for a candidate outside of voting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Engagement {
    pub comment_count: u32,
    pub save_count: u32,
    pub share_count: u32,
}

impl Engagement {
    pub fn new(comment_count: u32, save_count: u32, share_count: u32) -> Self {
        Self {
            comment_count,
            save_count,
            share_count,
        }
    }

    /// Combined count of comments, saves and shares
    pub fn total(&self) -> u64 {
        u64::from(self.comment_count) + u64::from(self.save_count) + u64::from(self.share_count)
    }
}

/// A restaurant option in a group decision
///
/// Supplied by the caller and never mutated by the engine.
///
/// # Example
///
/// ```
/// use tablevote_domain::Candidate;
///
/// let candidate = Candidate::new("r1", "Baan Thai")
///     .with_cuisine("Thai")
///     .with_price_tier("$$")
///     .with_engagement(4, 2, 1);
/// assert_eq!(candidate.engagement.total(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_tier: Option<String>,
    #[serde(default)]
    pub engagement: Engagement,
}

impl Candidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cuisine: None,
            price_tier: None,
            engagement: Engagement::default(),
        }
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn with_price_tier(mut self, price_tier: impl Into<String>) -> Self {
        self.price_tier = Some(price_tier.into());
        self
    }

    pub fn with_engagement(mut self, comments: u32, saves: u32, shares: u32) -> Self {
        self.engagement = Engagement::new(comments, saves, shares);
        self
    }

    /// Whether both candidates declare the same cuisine (case-insensitive)
    pub fn shares_cuisine(&self, other: &Candidate) -> bool {
        same_label(self.cuisine.as_deref(), other.cuisine.as_deref())
    }

    /// Whether both candidates declare the same price tier
    pub fn shares_price_tier(&self, other: &Candidate) -> bool {
        same_label(self.price_tier.as_deref(), other.price_tier.as_deref())
    }
}

fn same_label(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.trim().eq_ignore_ascii_case(b.trim()),
        _ => false,
    }
}
