//! Classification results

use crate::Category;
use serde::{Deserialize, Serialize};

/// Keyword match score of a single category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Category that was scored
    pub category: Category,

    /// Number of distinct keywords that matched
    pub score: usize,

    /// Number of keywords defined for the category
    pub keyword_count: usize,

    /// The keywords that matched, in table order
    pub matched: Vec<String>,
}

/// Outcome of classifying one document
///
/// `confidence` is the ratio of matched keywords to keywords defined for the
/// winning category. It is not a probability: a category with a large keyword
/// table needs more matches to reach the same confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Winning category
    pub category: Category,

    /// Taxonomy code of the winning category
    pub code: String,

    /// Matched / defined keyword ratio for the winner, in [0.0, 1.0]
    pub confidence: f64,

    /// Per-category scores in priority order (diagnostics)
    #[serde(default)]
    pub scores: Vec<CategoryScore>,
}

impl ClassificationResult {
    /// Create a result for `category` with no score breakdown
    ///
    /// Useful for hand-built classifications fed straight to a validator.
    pub fn new(category: Category, confidence: f64) -> Self {
        Self {
            category,
            code: category.code().to_string(),
            confidence,
            scores: Vec::new(),
        }
    }

    /// Attach the per-category score breakdown
    pub fn with_scores(mut self, scores: Vec<CategoryScore>) -> Self {
        self.scores = scores;
        self
    }

    /// The fallback result when no keyword matched anything
    pub fn unmatched(scores: Vec<CategoryScore>) -> Self {
        Self::new(Category::Miscellaneous, 0.0).with_scores(scores)
    }

    /// Score of the winning category (0 when nothing matched)
    pub fn winning_score(&self) -> usize {
        self.scores
            .iter()
            .find(|s| s.category == self.category)
            .map(|s| s.score)
            .unwrap_or(0)
    }

    /// Keywords of the winning category that matched
    pub fn matched_keywords(&self) -> &[String] {
        self.scores
            .iter()
            .find(|s| s.category == self.category)
            .map(|s| s.matched.as_slice())
            .unwrap_or(&[])
    }

    /// Check that the result is well-formed
    pub fn check(&self) -> Result<(), String> {
        if self.code != self.category.code() {
            return Err(format!(
                "code '{}' does not belong to category '{}' (expected '{}')",
                self.code,
                self.category,
                self.category.code()
            ));
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(format!(
                "confidence {} out of range [0.0, 1.0]",
                self.confidence
            ));
        }
        if self.confidence == 0.0 && self.category != Category::Miscellaneous {
            return Err(format!(
                "zero confidence assigned to category '{}'",
                self.category
            ));
        }
        Ok(())
    }
}
