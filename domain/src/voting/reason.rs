//! Vote justification classification
//!
//! Free-text reasons are bucketed into a fixed set of categories by
//! case-insensitive keyword matching. Categories are checked in declaration
//! order and the first match wins.

use serde::{Deserialize, Serialize};

/// Maximum verbatim examples retained per category
pub const MAX_REASON_EXAMPLES: usize = 3;

/// Semantic category of a vote justification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCategory {
    Price,
    Service,
    FoodQuality,
    Atmosphere,
    Location,
    Availability,
    Cleanliness,
    Other,
}

impl ReasonCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ReasonCategory::Price => "Price",
            ReasonCategory::Service => "Service",
            ReasonCategory::FoodQuality => "Food Quality",
            ReasonCategory::Atmosphere => "Atmosphere",
            ReasonCategory::Location => "Location",
            ReasonCategory::Availability => "Availability",
            ReasonCategory::Cleanliness => "Cleanliness",
            ReasonCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for ReasonCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

const VOCABULARY: &[(ReasonCategory, &[&str])] = &[
    (
        ReasonCategory::Price,
        &[
            "price", "pricey", "expensive", "cheap", "cost", "overpriced", "afford", "budget",
            "value", "$",
        ],
    ),
    (
        ReasonCategory::Service,
        &[
            "service", "staff", "waiter", "waitress", "server", "rude", "friendly", "attentive",
            "slow",
        ],
    ),
    (
        ReasonCategory::FoodQuality,
        &[
            "food", "taste", "tasty", "delicious", "bland", "flavor", "flavour", "fresh", "quality",
            "portion", "menu", "dish",
        ],
    ),
    (
        ReasonCategory::Atmosphere,
        &[
            "atmosphere", "ambiance", "ambience", "vibe", "noisy", "loud", "music", "cozy",
            "decor", "romantic",
        ],
    ),
    (
        ReasonCategory::Location,
        &[
            "location", "far", "close", "distance", "parking", "drive", "walk", "nearby", "commute",
        ],
    ),
    (
        ReasonCategory::Availability,
        &[
            "wait", "reservation", "booked", "busy", "crowded", "closed", "hours", "queue", "line",
        ],
    ),
    (
        ReasonCategory::Cleanliness,
        &["clean", "dirty", "hygiene", "messy", "sanitary", "gross"],
    ),
];

/// Keyword-based reason classifier
pub struct ReasonClassifier;

impl ReasonClassifier {
    /// Classify a justification; unmatched text falls back to [`ReasonCategory::Other`]
    pub fn classify(reason: &str) -> ReasonCategory {
        let text = reason.to_lowercase();
        VOCABULARY
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
            .map(|(category, _)| *category)
            .unwrap_or(ReasonCategory::Other)
    }

    /// Tally reasons per category, keeping up to three examples each.
    ///
    /// The result is sorted by descending count; ties keep first-seen order.
    pub fn tally<'a>(reasons: impl IntoIterator<Item = &'a str>) -> Vec<ReasonTally> {
        let mut tallies: Vec<ReasonTally> = Vec::new();

        for reason in reasons {
            let category = Self::classify(reason);
            let tally = match tallies.iter_mut().position(|t| t.category == category) {
                Some(i) => &mut tallies[i],
                None => {
                    tallies.push(ReasonTally::new(category));
                    let last = tallies.len() - 1;
                    &mut tallies[last]
                }
            };
            tally.count += 1;
            if tally.examples.len() < MAX_REASON_EXAMPLES {
                tally.examples.push(reason.to_string());
            }
        }

        tallies.sort_by(|a, b| b.count.cmp(&a.count));
        tallies
    }
}

/// Count and sample justifications for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasonTally {
    pub category: ReasonCategory,
    pub count: usize,
    pub examples: Vec<String>,
}

impl ReasonTally {
    fn new(category: ReasonCategory) -> Self {
        Self {
            category,
            count: 0,
            examples: Vec::new(),
        }
    }
}
