//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use docket_domain::{Document, ProcessingRecord, ProcessingStatus};
use docket_router::{BatchSummary, PipelineInfo};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Characters of content shown by `list`
const PREVIEW_CHARS: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the record of a single document.
    pub fn format_record(&self, record: &ProcessingRecord) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
            OutputFormat::Table => Ok(self.format_record_table(record)),
        }
    }

    /// Format a batch summary.
    pub fn format_batch(&self, summary: &BatchSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
            OutputFormat::Table => Ok(self.format_batch_table(summary)),
        }
    }

    /// Format the documents of a source.
    pub fn format_documents(&self, documents: &[Document]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let listing: Vec<serde_json::Value> = documents
                    .iter()
                    .map(|d| {
                        serde_json::json!({
                            "document_id": d.id,
                            "preview": d.preview(PREVIEW_CHARS),
                            "metadata": d.metadata,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&listing)?)
            }
            OutputFormat::Table => {
                if documents.is_empty() {
                    return Ok(self.colorize("No documents found.", Color::Yellow));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Source", "Preview"]);
                for doc in documents {
                    let source = doc
                        .metadata
                        .get("source")
                        .and_then(|v| v.as_str())
                        .unwrap_or("-");
                    builder.push_record([
                        doc.id.clone(),
                        source.to_string(),
                        doc.preview(PREVIEW_CHARS),
                    ]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format the pipeline description.
    pub fn format_info(&self, info: &PipelineInfo) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(info)?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Category", "Code", "Keywords", "Validation"]);
                for (category, code) in &info.categories {
                    let keywords = if info.keyword_categories.contains(category) {
                        "yes"
                    } else {
                        "fallback"
                    };
                    let validation = if info.validated_categories.contains(category) {
                        "required"
                    } else {
                        "bypass"
                    };
                    builder.push_record([category.as_str(), *code, keywords, validation]);
                }
                Ok(render(builder))
            }
        }
    }

    fn format_record_table(&self, record: &ProcessingRecord) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["Document", record.document_id.as_str()]);

        if let Some(classification) = &record.classification {
            builder.push_record(["Category", classification.category.as_str()]);
            builder.push_record(["Code", classification.code.as_str()]);
            builder.push_record([
                "Confidence".to_string(),
                format!("{:.2}", classification.confidence),
            ]);
            let matched = classification.matched_keywords();
            if !matched.is_empty() {
                builder.push_record(["Keywords".to_string(), matched.join(", ")]);
            }
        }

        if let Some(validation) = &record.validation {
            builder.push_record(["Rule", validation.description.as_str()]);
            builder.push_record(["Validation".to_string(), validation.summary()]);
        }

        if let Some(error) = &record.error {
            builder.push_record(["Error".to_string(), error.to_string()]);
        }

        builder.push_record(["Duration".to_string(), format!("{:.3?}", record.duration())]);

        format!("{}\n{}", render(builder), self.status_line(record.status))
    }

    fn format_batch_table(&self, summary: &BatchSummary) -> String {
        if summary.records.is_empty() {
            return self.colorize("No documents processed.", Color::Yellow);
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Category", "Code", "Confidence", "Valid", "Status", "Duration"]);

        for record in &summary.records {
            let (category, code, confidence) = match &record.classification {
                Some(c) => (
                    c.category.as_str().to_string(),
                    c.code.clone(),
                    format!("{:.2}", c.confidence),
                ),
                None => ("-".to_string(), "-".to_string(), "-".to_string()),
            };
            let valid = match &record.validation {
                Some(v) if v.passed => "yes",
                Some(_) => "no",
                None => "-",
            };
            builder.push_record([
                record.document_id.clone(),
                category,
                code,
                confidence,
                valid.to_string(),
                record.status.to_string(),
                format!("{:.3?}", record.duration()),
            ]);
        }

        let report = summary.summary();
        let report = if summary.is_clean() {
            self.info(&report)
        } else {
            self.warning(&report)
        };

        format!("{}\n\n{}", render(builder), report)
    }

    /// Format the final status of a document.
    pub fn status_line(&self, status: ProcessingStatus) -> String {
        let text = format!("Final status: {}", status);
        match status {
            ProcessingStatus::Approved => self.success(&text),
            ProcessingStatus::Rejected => self.error(&text),
            _ => self.warning(&text),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), Color::Green)
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), Color::Red)
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), Color::Blue)
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), Color::Yellow)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: Color) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        text.color(color).to_string()
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}
