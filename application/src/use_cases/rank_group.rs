//! Rank Group use case
//!
//! Loads a group snapshot, ranks its candidates and derives recommendations.

use crate::config::RankingDefaults;
use crate::ports::audit_log::{AuditEvent, NoAuditLog, RankingAuditLog};
use crate::ports::clock::Clock;
use crate::ports::snapshot_source::{SnapshotSource, SnapshotSourceError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tablevote_domain::{RankedResult, Recommendation, compute_rankings, generate_recommendations};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during a ranking run
///
/// Ranking itself never fails; only obtaining the inputs can.
#[derive(Error, Debug)]
pub enum RankGroupError {
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotSourceError),
}

/// Input for the RankGroup use case
#[derive(Debug, Clone, Default)]
pub struct RankGroupInput {
    pub defaults: RankingDefaults,
    /// Skip recommendation generation entirely
    pub skip_recommendations: bool,
}

impl RankGroupInput {
    pub fn new(defaults: RankingDefaults) -> Self {
        Self {
            defaults,
            skip_recommendations: false,
        }
    }

    pub fn without_recommendations(mut self) -> Self {
        self.skip_recommendations = true;
        self
    }
}

/// Output of a ranking run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankGroupOutput {
    pub rankings: Vec<RankedResult>,
    pub recommendations: Vec<Recommendation>,
    pub generated_at: DateTime<Utc>,
}

impl RankGroupOutput {
    /// The rank-1 result, if any candidates were ranked
    pub fn leader(&self) -> Option<&RankedResult> {
        self.rankings.first()
    }
}

/// Use case for ranking a group's candidates
pub struct RankGroupUseCase<S: SnapshotSource + 'static> {
    source: Arc<S>,
    clock: Arc<dyn Clock>,
    audit: Arc<dyn RankingAuditLog>,
}

impl<S: SnapshotSource + 'static> RankGroupUseCase<S> {
    pub fn new(source: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            source,
            clock,
            audit: Arc::new(NoAuditLog),
        }
    }

    pub fn with_audit_log(mut self, audit: Arc<dyn RankingAuditLog>) -> Self {
        self.audit = audit;
        self
    }

    /// Execute the use case
    pub async fn execute(&self, input: RankGroupInput) -> Result<RankGroupOutput, RankGroupError> {
        let snapshot = self.source.load().await?;
        let now = self.clock.now();

        info!(
            "Ranking {} candidates with {} votes from {}",
            snapshot.candidates.len(),
            snapshot.votes.len(),
            self.source.describe()
        );

        let group = snapshot.group_config(&input.defaults.group);
        if let Err(e) = group.validate() {
            warn!("Group settings are invalid, ranking will fall back: {}", e);
            self.audit.record(AuditEvent::new(
                "ranking_fallback",
                now,
                serde_json::json!({ "reason": e.to_string() }),
            ));
        }

        let options = snapshot.ranking_options(group.clone());
        let rankings = compute_rankings(&snapshot.candidates, &snapshot.votes, &options, now);

        let recommendations = if input.skip_recommendations {
            Vec::new()
        } else {
            generate_recommendations(&rankings, &group, now)
        };

        self.audit.record(AuditEvent::new(
            "ranking_computed",
            now,
            serde_json::json!({
                "source": self.source.describe(),
                "candidates": rankings.len(),
                "votes": snapshot.votes.len(),
                "leader": rankings.first().map(|r| r.candidate.id.clone()),
                "recommendations": recommendations.iter().map(|r| r.id.clone()).collect::<Vec<_>>(),
            }),
        ));

        Ok(RankGroupOutput {
            rankings,
            recommendations,
            generated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::clock::FixedClock;
    use crate::ports::snapshot_source::StaticSnapshotSource;
    use crate::snapshot::GroupSnapshot;
    use chrono::TimeZone;
    use std::sync::Mutex;
    use tablevote_domain::{Badge, Candidate, RecommendationKind, Vote};

    #[derive(Default)]
    struct RecordingAuditLog {
        events: Mutex<Vec<(&'static str, DateTime<Utc>, serde_json::Value)>>,
    }

    impl RankingAuditLog for RecordingAuditLog {
        fn record(&self, event: AuditEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type, event.at, event.payload));
        }
    }

    struct FailingSource;

    #[async_trait::async_trait]
    impl SnapshotSource for FailingSource {
        async fn load(&self) -> Result<GroupSnapshot, SnapshotSourceError> {
            Err(SnapshotSourceError::NotFound("missing.json".to_string()))
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    fn clock() -> Arc<FixedClock> {
        Arc::new(FixedClock(Utc.with_ymd_and_hms(2026, 6, 15, 19, 0, 0).unwrap()))
    }

    fn contested_snapshot() -> GroupSnapshot {
        let mut votes = Vec::new();
        for i in 0..3 {
            votes.push(Vote::like(format!("u{i}"), "e"));
            votes.push(Vote::dislike(format!("v{i}"), "e"));
            votes.push(Vote::like(format!("u{i}"), "f"));
        }
        votes.push(Vote::like("u3", "f"));

        GroupSnapshot {
            candidates: vec![
                Candidate::new("e", "Thai Palace").with_cuisine("Thai"),
                Candidate::new("f", "Lemongrass").with_cuisine("Thai"),
            ],
            votes,
            discussion_counts: [("e".to_string(), 6)].into_iter().collect(),
            ..GroupSnapshot::default()
        }
    }

    #[tokio::test]
    async fn test_execute_ranks_and_recommends() {
        let source = Arc::new(StaticSnapshotSource::new(contested_snapshot()));
        let audit = Arc::new(RecordingAuditLog::default());
        let use_case = RankGroupUseCase::new(source, clock()).with_audit_log(audit.clone());

        let output = use_case.execute(RankGroupInput::default()).await.unwrap();

        assert_eq!(output.leader().unwrap().candidate.id, "f");
        assert!(output.rankings[1].has_badge(Badge::Contested));
        assert_eq!(output.recommendations.len(), 1);
        assert_eq!(output.recommendations[0].kind, RecommendationKind::Compromise);

        let events = audit.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, "ranking_computed");
        assert_eq!(events[0].1, clock().now());
        assert_eq!(events[0].2["leader"], "f");
    }

    #[tokio::test]
    async fn test_execute_without_recommendations() {
        let source = Arc::new(StaticSnapshotSource::new(contested_snapshot()));
        let use_case = RankGroupUseCase::new(source, clock());

        let output = use_case
            .execute(RankGroupInput::default().without_recommendations())
            .await
            .unwrap();

        assert!(output.recommendations.is_empty());
        assert_eq!(output.rankings.len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_defaults_fall_back_and_are_audited() {
        let source = Arc::new(StaticSnapshotSource::new(contested_snapshot()));
        let audit = Arc::new(RecordingAuditLog::default());
        let use_case = RankGroupUseCase::new(source, clock()).with_audit_log(audit.clone());

        let output = use_case
            .execute(RankGroupInput::new(RankingDefaults::with_consensus_threshold(4.0)))
            .await
            .unwrap();

        assert_eq!(output.rankings[0].candidate.id, "e");
        assert!(output.rankings.iter().all(|r| r.badge.is_none()));
        let events = audit.events.lock().unwrap();
        assert_eq!(events[0].0, "ranking_fallback");
        assert_eq!(events[0].1, clock().now());
        assert_eq!(events[1].0, "ranking_computed");
    }

    #[tokio::test]
    async fn test_snapshot_errors_propagate() {
        let use_case = RankGroupUseCase::new(Arc::new(FailingSource), clock());

        let result = use_case.execute(RankGroupInput::default()).await;

        assert!(matches!(
            result,
            Err(RankGroupError::Snapshot(SnapshotSourceError::NotFound(_)))
        ));
    }
}
