//! Validation results

use crate::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Description attached to results of categories without compliance rules
pub const BYPASS_DESCRIPTION: &str = "no validation required";

/// Kind of compliance rule that produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    /// No requirements; always passes
    Bypass,
    /// Every listed phrase must be present
    AllOf,
    /// At least one listed phrase must be present
    AnyOf,
}

impl RuleKind {
    /// Get the rule kind as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Bypass => "bypass",
            RuleKind::AllOf => "all-of",
            RuleKind::AnyOf => "any-of",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of checking one document against its category's rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the document is compliant
    pub passed: bool,

    /// Human-readable violations (empty iff `passed`)
    pub reasons: Vec<String>,

    /// Description of the rule that was applied
    pub description: String,

    /// Category the rule was selected for
    pub category: Category,

    /// Kind of rule applied
    pub rule: RuleKind,

    /// Rule phrases that were found in the content
    #[serde(default)]
    pub found: Vec<String>,
}

impl ValidationResult {
    /// A passing result for a category without rules
    pub fn bypass(category: Category) -> Self {
        Self {
            passed: true,
            reasons: Vec::new(),
            description: BYPASS_DESCRIPTION.to_string(),
            category,
            rule: RuleKind::Bypass,
            found: Vec::new(),
        }
    }

    /// Whether validation was skipped for this category
    pub fn is_bypassed(&self) -> bool {
        self.rule == RuleKind::Bypass
    }

    /// One-line explanation of the verdict
    pub fn summary(&self) -> String {
        if self.is_bypassed() {
            format!("{} bypasses validation", self.category)
        } else if self.passed {
            format!("{} validation passed: found {}", self.category, self.found.join(", "))
        } else {
            format!("{} validation failed: {}", self.category, self.reasons.join("; "))
        }
    }
}
