//! Core domain concepts shared across all subdomains.
//!
//! - [`error::RankingError`] - faults raised inside the ranking engine

pub mod error;
