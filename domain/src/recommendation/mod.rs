//! Recommendations for deadlocked group decisions

pub mod entities;
pub mod generator;

pub use entities::{Recommendation, RecommendationKind};
pub use generator::{ALTERNATIVE_CONFIDENCE, COMPROMISE_CONFIDENCE, generate_recommendations};
