//! Batch processing summary

use chrono::{DateTime, Utc};
use docket_domain::{ProcessingRecord, ProcessingStatus};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Aggregate outcome of one batch
///
/// `records` keeps input order. Counters always satisfy
/// `approved + rejected + errored == total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// One record per input document, in input order
    pub records: Vec<ProcessingRecord>,

    /// Number of documents in the batch
    pub total: usize,

    /// Documents that reached a verdict (approved + rejected)
    pub successful: usize,

    /// Documents approved
    pub approved: usize,

    /// Documents rejected
    pub rejected: usize,

    /// Documents that errored
    pub errored: usize,

    /// Wall-clock time of the whole batch in milliseconds
    pub total_duration_ms: f64,

    /// When the batch started
    pub started_at: DateTime<Utc>,

    /// When the batch finished
    pub completed_at: DateTime<Utc>,
}

impl BatchSummary {
    /// Tally a finished batch
    pub fn new(
        records: Vec<ProcessingRecord>,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        total_duration_ms: f64,
    ) -> Self {
        let count = |status| records.iter().filter(|r| r.status == status).count();
        let approved = count(ProcessingStatus::Approved);
        let rejected = count(ProcessingStatus::Rejected);
        let errored = count(ProcessingStatus::Error);

        Self {
            total: records.len(),
            successful: approved + rejected,
            approved,
            rejected,
            errored,
            total_duration_ms,
            started_at,
            completed_at,
            records,
        }
    }

    /// Wall-clock time of the whole batch
    pub fn total_duration(&self) -> Duration {
        Duration::from_secs_f64(self.total_duration_ms.max(0.0) / 1000.0)
    }

    /// Whether every document reached a verdict
    pub fn is_clean(&self) -> bool {
        self.errored == 0
    }

    /// Generate a summary report of the batch
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Batch Summary".to_string(),
            "=============".to_string(),
            format!("Total documents: {}", self.total),
            format!("Successfully processed: {}", self.successful),
            format!("  Approved: {}", self.approved),
            format!("  Rejected: {}", self.rejected),
            format!("Errors: {}", self.errored),
            format!("Duration: {:.3?}", self.total_duration()),
        ];

        let failures: Vec<String> = self
            .records
            .iter()
            .filter_map(|r| r.error.as_ref().map(|e| format!("  {}: {}", r.document_id, e)))
            .collect();
        if !failures.is_empty() {
            lines.push(String::new());
            lines.push("Errored documents:".to_string());
            lines.extend(failures);
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_domain::{RecordError, RecordId, Stage};

    fn record(document_id: &str, status: ProcessingStatus) -> ProcessingRecord {
        let now = Utc::now();
        ProcessingRecord {
            id: RecordId::new(),
            document_id: document_id.to_string(),
            status,
            classification: None,
            validation: None,
            started_at: now,
            completed_at: now,
            duration_ms: 0.5,
            error: (status == ProcessingStatus::Error).then(|| RecordError {
                stage: Stage::Validation,
                message: "boom".to_string(),
            }),
        }
    }

    #[test]
    fn test_counts() {
        let now = Utc::now();
        let summary = BatchSummary::new(
            vec![
                record("a", ProcessingStatus::Approved),
                record("b", ProcessingStatus::Rejected),
                record("c", ProcessingStatus::Approved),
                record("d", ProcessingStatus::Error),
            ],
            now,
            now,
            12.0,
        );

        assert_eq!(summary.total, 4);
        assert_eq!(summary.approved, 2);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.errored, 1);
        assert_eq!(summary.successful, 3);
        assert!(!summary.is_clean());
        assert!((summary.total_duration().as_secs_f64() - 0.012).abs() < 1e-6);
    }

    #[test]
    fn test_empty_batch() {
        let now = Utc::now();
        let summary = BatchSummary::new(vec![], now, now, 0.0);
        assert_eq!(summary.total, 0);
        assert!(summary.is_clean());
        assert!(!summary.summary().contains("Errored documents"));
    }

    #[test]
    fn test_summary_lists_errors() {
        let now = Utc::now();
        let summary = BatchSummary::new(
            vec![
                record("ok", ProcessingStatus::Approved),
                record("bad", ProcessingStatus::Error),
            ],
            now,
            now,
            1.0,
        );

        let text = summary.summary();
        assert!(text.contains("Total documents: 2"));
        assert!(text.contains("Errors: 1"));
        assert!(text.contains("bad: validation failed: boom"));
    }
}
