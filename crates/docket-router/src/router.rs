//! The pipeline orchestrator

use crate::{BatchSummary, RouterConfig, RouterError};
use chrono::Utc;
use docket_classifier::KeywordClassifier;
use docket_compliance::ComplianceChecker;
use docket_domain::traits::{ComplianceValidator, DocumentClassifier};
use docket_domain::{
    Category, ClassificationResult, Document, ProcessingRecord, ProcessingStatus, RecordError,
    RecordId, Stage, ValidationResult,
};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Router wired with the keyword classifier and the compliance checker
pub type EstateRouter = Router<KeywordClassifier, ComplianceChecker>;

/// Routes documents through classification and validation
///
/// The router owns the processing history; every call to
/// [`process_document`](Router::process_document) appends exactly one record.
#[derive(Debug)]
pub struct Router<C, V> {
    classifier: C,
    validator: V,
    history: Vec<ProcessingRecord>,
}

/// Outcome of the stages for one document, before timing is attached
struct Trail {
    status: ProcessingStatus,
    classification: Option<ClassificationResult>,
    validation: Option<ValidationResult>,
    error: Option<RecordError>,
}

impl Trail {
    fn new() -> Self {
        Self {
            status: ProcessingStatus::Received,
            classification: None,
            validation: None,
            error: None,
        }
    }

    fn advance(&mut self, next: ProcessingStatus) {
        debug_assert!(
            self.status.can_transition_to(next),
            "illegal transition {} -> {}",
            self.status,
            next
        );
        self.status = next;
    }

    fn fail(mut self, stage: Stage, message: impl Into<String>) -> Self {
        self.error = Some(RecordError {
            stage,
            message: message.into(),
        });
        self.advance(ProcessingStatus::Error);
        self
    }
}

impl<C, V> Router<C, V>
where
    C: DocumentClassifier,
    V: ComplianceValidator,
{
    /// Create a router from its two stages with an empty history
    pub fn new(classifier: C, validator: V) -> Self {
        Self {
            classifier,
            validator,
            history: Vec::new(),
        }
    }

    /// Process a single document and append the record to history
    ///
    /// Never fails: malformed documents and stage failures produce a record
    /// with status `ERROR`.
    pub fn process_document(&mut self, document: &Document) -> ProcessingRecord {
        let started_at = Utc::now();
        let clock = Instant::now();
        info!(document_id = %document.id, "document received");

        let trail = self.run_stages(document);
        let record = ProcessingRecord {
            id: RecordId::new(),
            document_id: document.id.clone(),
            status: trail.status,
            classification: trail.classification,
            validation: trail.validation,
            started_at,
            completed_at: Utc::now(),
            duration_ms: clock.elapsed().as_secs_f64() * 1000.0,
            error: trail.error,
        };

        match &record.error {
            Some(err) => warn!(document_id = %record.document_id, error = %err, "document errored"),
            None => info!(
                document_id = %record.document_id,
                status = %record.status,
                "document processed"
            ),
        }

        self.history.push(record.clone());
        record
    }

    /// Process documents sequentially, in input order
    pub fn process_batch(&mut self, documents: &[Document]) -> BatchSummary {
        let started_at = Utc::now();
        let clock = Instant::now();
        info!(count = documents.len(), "batch started");

        let records: Vec<ProcessingRecord> = documents
            .iter()
            .map(|doc| self.process_document(doc))
            .collect();

        let summary = BatchSummary::new(
            records,
            started_at,
            Utc::now(),
            clock.elapsed().as_secs_f64() * 1000.0,
        );

        info!(
            total = summary.total,
            approved = summary.approved,
            rejected = summary.rejected,
            errored = summary.errored,
            "batch complete"
        );

        summary
    }

    /// Every record produced since creation or the last reset, oldest first
    pub fn history(&self) -> &[ProcessingRecord] {
        &self.history
    }

    /// Clear the processing history
    pub fn reset_history(&mut self) {
        debug!(cleared = self.history.len(), "history reset");
        self.history.clear();
    }

    /// The validation stage
    pub fn validator(&self) -> &V {
        &self.validator
    }

    fn run_stages(&self, document: &Document) -> Trail {
        let mut trail = Trail::new();

        if let Err(e) = document.check_shape() {
            return trail.fail(Stage::Intake, e.to_string());
        }

        let classification = match self.classifier.classify(document) {
            Ok(c) => c,
            Err(e) => return trail.fail(Stage::Classification, e.to_string()),
        };
        if let Err(e) = classification.check() {
            return trail.fail(
                Stage::Classification,
                format!("malformed classification: {}", e),
            );
        }
        debug!(
            document_id = %document.id,
            category = %classification.category,
            code = %classification.code,
            "document classified"
        );
        trail.advance(ProcessingStatus::Classified);

        let validation = match self.validator.validate(document, &classification) {
            Ok(v) => v,
            Err(e) => {
                trail.classification = Some(classification);
                return trail.fail(Stage::Validation, e.to_string());
            }
        };
        debug!(
            document_id = %document.id,
            passed = validation.passed,
            "document validated"
        );
        trail.classification = Some(classification);
        trail.advance(ProcessingStatus::Validated);

        let verdict = if validation.passed {
            ProcessingStatus::Approved
        } else {
            ProcessingStatus::Rejected
        };
        trail.validation = Some(validation);
        trail.advance(verdict);
        trail
    }
}

/// Description of a configured pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineInfo {
    /// Every category the classifier may assign, with its code
    pub categories: Vec<(Category, &'static str)>,

    /// Categories with at least one keyword
    pub keyword_categories: Vec<Category>,

    /// Categories with a non-bypass compliance rule
    pub validated_categories: Vec<Category>,
}

impl Router<KeywordClassifier, ComplianceChecker> {
    /// Build a router from a pipeline configuration
    pub fn from_config(config: &RouterConfig) -> Result<Self, RouterError> {
        config.validate()?;
        let classifier = KeywordClassifier::new(config.classifier.clone())?;
        let validator = ComplianceChecker::new(config.compliance.clone())?;
        Ok(Self::new(classifier, validator))
    }

    /// Describe the configured pipeline
    pub fn info(&self) -> PipelineInfo {
        PipelineInfo {
            categories: self.classifier.supported_categories(),
            keyword_categories: self.classifier.rule_categories(),
            validated_categories: self.validator.categories_requiring_validation(),
        }
    }
}
