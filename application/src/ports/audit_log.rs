//! Port for structured ranking audit logging.
//!
//! Defines the [`RankingAuditLog`] trait for recording ranking runs to a
//! machine-readable log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures what was
//! ranked and what came out of it.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// A structured audit event.
///
/// Each event has a type string, the reference time of the run it belongs to
/// and a JSON payload containing event-specific fields.
pub struct AuditEvent {
    /// Event type identifier (e.g., "ranking_computed", "ranking_fallback").
    pub event_type: &'static str,
    /// Reference time of the ranking run, taken from the injected clock.
    pub at: DateTime<Utc>,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AuditEvent {
    pub fn new(event_type: &'static str, at: DateTime<Utc>, payload: Value) -> Self {
        Self {
            event_type,
            at,
            payload,
        }
    }
}

/// Port for logging audit events.
///
/// The `record` method is synchronous and non-fallible so that logging
/// failures never disturb a ranking run.
pub trait RankingAuditLog: Send + Sync {
    fn record(&self, event: AuditEvent);
}

/// No-op implementation for tests and when audit logging is disabled.
pub struct NoAuditLog;

impl RankingAuditLog for NoAuditLog {
    fn record(&self, _event: AuditEvent) {}
}
