//! Short-term vote momentum

use crate::voting::{Vote, sort_most_recent_first};
use serde::{Deserialize, Serialize};

/// Number of most recent votes inspected
pub const TREND_WINDOW: usize = 5;
/// Below this many votes the trend is always steady
pub const TREND_MIN_VOTES: usize = 3;
/// Lead one side needs within the window
pub const TREND_MARGIN: usize = 2;

/// Direction of recent votes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Steady,
}

impl Trend {
    /// Detect momentum from a candidate's votes (raw counts, not weights)
    pub fn detect(votes: &[&Vote]) -> Self {
        if votes.len() < TREND_MIN_VOTES {
            return Trend::Steady;
        }

        let mut recent = votes.to_vec();
        sort_most_recent_first(&mut recent);
        recent.truncate(TREND_WINDOW);

        let likes = recent.iter().filter(|v| v.choice.is_like()).count();
        let dislikes = recent.len() - likes;

        if likes >= dislikes + TREND_MARGIN {
            Trend::Up
        } else if dislikes >= likes + TREND_MARGIN {
            Trend::Down
        } else {
            Trend::Steady
        }
    }
}
