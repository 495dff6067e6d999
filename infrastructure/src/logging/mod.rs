//! Logging infrastructure: structured ranking audit logs.
//!
//! Provides [`JsonlRankingAuditLog`], a JSONL file writer that implements
//! the [`RankingAuditLog`](tablevote_application::RankingAuditLog) port.

mod jsonl_audit_log;

pub use jsonl_audit_log::JsonlRankingAuditLog;
