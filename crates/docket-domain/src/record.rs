//! Processing records - the audit trail of the pipeline

use crate::{ClassificationResult, ValidationResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Unique identifier for a processing record based on UUIDv7
///
/// UUIDv7 keeps record ids sortable by creation time, independent of the
/// caller-supplied document id (which is not required to be unique).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(uuid::Uuid);

impl RecordId {
    /// Generate a new UUIDv7-based RecordId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Parse a RecordId from its string form
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| format!("Invalid record id: {}", e))
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-document processing state
///
/// ```text
/// Received ──► Classified ──► Validated ──► Approved | Rejected
///    │              │
///    └──────────────┴────────────► Error
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessingStatus {
    /// Accepted by the router, no stage run yet
    Received,
    /// Classifier produced a well-formed result
    Classified,
    /// Validator produced a result
    Validated,
    /// Terminal: compliant
    Approved,
    /// Terminal: not compliant
    Rejected,
    /// Terminal: a stage failed or the document was malformed
    Error,
}

impl ProcessingStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingStatus::Received => "RECEIVED",
            ProcessingStatus::Classified => "CLASSIFIED",
            ProcessingStatus::Validated => "VALIDATED",
            ProcessingStatus::Approved => "APPROVED",
            ProcessingStatus::Rejected => "REJECTED",
            ProcessingStatus::Error => "ERROR",
        }
    }

    /// Whether this is a final verdict
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ProcessingStatus::Approved | ProcessingStatus::Rejected | ProcessingStatus::Error
        )
    }

    /// Whether the state machine allows moving from `self` to `next`
    pub fn can_transition_to(&self, next: ProcessingStatus) -> bool {
        use ProcessingStatus::*;
        matches!(
            (self, next),
            (Received, Classified)
                | (Received, Error)
                | (Classified, Validated)
                | (Classified, Error)
                | (Validated, Approved)
                | (Validated, Rejected)
        )
    }
}

impl fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pipeline stage a failure originated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Shape checks before any stage runs
    Intake,
    /// Keyword classification
    Classification,
    /// Compliance validation
    Validation,
}

impl Stage {
    /// Get the stage name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Intake => "intake",
            Stage::Classification => "classification",
            Stage::Validation => "validation",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure captured on an ERROR record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordError {
    /// Stage that failed
    pub stage: Stage,
    /// Description of the failure
    pub message: String,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.stage, self.message)
    }
}

/// Immutable audit entry for one processed document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingRecord {
    /// Unique record identifier
    pub id: RecordId,

    /// Caller-supplied document identifier (may be blank on intake errors)
    pub document_id: String,

    /// Final (terminal) status
    pub status: ProcessingStatus,

    /// Classifier output, if classification succeeded
    pub classification: Option<ClassificationResult>,

    /// Validator output, if validation succeeded
    pub validation: Option<ValidationResult>,

    /// When processing started
    pub started_at: DateTime<Utc>,

    /// When processing finished
    pub completed_at: DateTime<Utc>,

    /// Elapsed processing time in milliseconds
    pub duration_ms: f64,

    /// Failure details for ERROR records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RecordError>,
}

impl ProcessingRecord {
    /// Elapsed processing time
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.duration_ms.max(0.0) / 1000.0)
    }

    /// Whether the document was approved
    pub fn is_approved(&self) -> bool {
        self.status == ProcessingStatus::Approved
    }

    /// Whether the document was rejected
    pub fn is_rejected(&self) -> bool {
        self.status == ProcessingStatus::Rejected
    }

    /// Whether processing failed
    pub fn is_error(&self) -> bool {
        self.status == ProcessingStatus::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ProcessingStatus::*;

    #[test]
    fn test_happy_path_transitions() {
        assert!(Received.can_transition_to(Classified));
        assert!(Classified.can_transition_to(Validated));
        assert!(Validated.can_transition_to(Approved));
        assert!(Validated.can_transition_to(Rejected));
    }

    #[test]
    fn test_error_transitions() {
        assert!(Received.can_transition_to(Error));
        assert!(Classified.can_transition_to(Error));
        assert!(!Validated.can_transition_to(Error));
    }

    #[test]
    fn test_no_skipping_or_leaving_terminal_states() {
        assert!(!Received.can_transition_to(Approved));
        assert!(!Classified.can_transition_to(Rejected));
        for terminal in [Approved, Rejected, Error] {
            assert!(terminal.is_terminal());
            for next in [Received, Classified, Validated, Approved, Rejected, Error] {
                assert!(!terminal.can_transition_to(next));
            }
        }
        assert!(!Received.is_terminal());
    }

    #[test]
    fn test_status_serde() {
        assert_eq!(serde_json::to_string(&Approved).unwrap(), "\"APPROVED\"");
        assert_eq!(Error.to_string(), "ERROR");
    }

    #[test]
    fn test_record_error_display() {
        let err = RecordError {
            stage: Stage::Validation,
            message: "rule table unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "validation failed: rule table unavailable");
    }

    #[test]
    fn test_record_ids_are_unique_and_parse() {
        let a = RecordId::new();
        let b = RecordId::new();
        assert_ne!(a, b);
        assert_eq!(RecordId::from_string(&a.to_string()), Ok(a));
        assert!(RecordId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn test_record_duration() {
        let now = Utc::now();
        let mut record = ProcessingRecord {
            id: RecordId::new(),
            document_id: "D1".to_string(),
            status: Approved,
            classification: None,
            validation: None,
            started_at: now,
            completed_at: now,
            duration_ms: 250.0,
            error: None,
        };
        assert_eq!(record.duration(), Duration::from_millis(250));
        assert_eq!(format!("{:.3?}", record.duration()), "250.000ms");

        record.duration_ms = -1.0;
        assert_eq!(record.duration(), Duration::ZERO);
    }
}
