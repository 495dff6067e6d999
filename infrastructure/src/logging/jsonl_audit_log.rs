//! JSONL file writer for ranking audit events.
//!
//! Each [`AuditEvent`] is serialized as a single JSON line with a `type`
//! field and `timestamp`, appended to the file via a buffered writer. The
//! timestamp is the run's reference time, so replayed runs log identically.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tablevote_application::{AuditEvent, RankingAuditLog};
use tracing::warn;

/// Audit log that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlRankingAuditLog {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlRankingAuditLog {
    /// Open the log at the given path for appending.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create audit log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open audit log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RankingAuditLog for JsonlRankingAuditLog {
    fn record(&self, event: AuditEvent) {
        let timestamp = event.at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let record = if let serde_json::Value::Object(mut map) = event.payload {
            map.insert(
                "type".to_string(),
                serde_json::Value::String(event.event_type.to_string()),
            );
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
            serde_json::Value::Object(map)
        } else {
            serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": event.payload,
            })
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlRankingAuditLog {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, 19, 0, 0).unwrap()
    }

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_audit_log_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit").join("rankings.jsonl");
        let log = JsonlRankingAuditLog::new(&path).unwrap();

        log.record(AuditEvent::new(
            "ranking_fallback",
            at(),
            serde_json::json!({ "reason": "Invalid consensus threshold: 4" }),
        ));
        log.record(AuditEvent::new(
            "ranking_computed",
            at(),
            serde_json::json!({ "candidates": 3, "leader": "r2" }),
        ));
        drop(log);

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r["timestamp"] == "2026-06-15T19:00:00.000Z"));
        assert_eq!(records[0]["type"], "ranking_fallback");
        assert_eq!(records[1]["type"], "ranking_computed");
        assert_eq!(records[1]["leader"], "r2");
        assert_eq!(records[1]["candidates"], 3);
    }

    #[test]
    fn test_audit_log_appends_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rankings.jsonl");

        for _ in 0..2 {
            let log = JsonlRankingAuditLog::new(&path).unwrap();
            log.record(AuditEvent::new("ranking_computed", at(), serde_json::json!({})));
        }

        assert_eq!(read_lines(&path).len(), 2);
    }

    #[test]
    fn test_audit_log_wraps_non_object_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rankings.jsonl");
        let log = JsonlRankingAuditLog::new(&path).unwrap();

        log.record(AuditEvent::new("note", at(), serde_json::json!("just a string")));
        drop(log);

        let records = read_lines(&path);
        assert_eq!(records[0]["type"], "note");
        assert_eq!(records[0]["data"], "just a string");
    }
}
