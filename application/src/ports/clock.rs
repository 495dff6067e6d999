//! Clock port
//!
//! The ranking engine never reads the system clock; the reference time is
//! supplied through this port so runs can be replayed exactly.

use chrono::{DateTime, Utc};

/// Source of the reference time for a ranking run
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// A clock frozen at a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
