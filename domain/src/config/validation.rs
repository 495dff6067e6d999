//! Configuration issues reported by file-config validation.
//!
//! Validation never aborts loading: each detected problem becomes a
//! [`ConfigIssue`] that the caller can print or escalate.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigIssueCode {
    /// A fraction setting is outside [0, 1].
    ThresholdOutOfRange { field: String, value: f64 },
    /// Recommendations are enabled but may reference no candidates.
    NoAlternativesAllowed,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
