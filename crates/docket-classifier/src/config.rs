//! Configuration for the Classifier

use docket_domain::{phrase_key, Category};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Keyword lists per category, iterated in taxonomy priority order
pub type KeywordTable = BTreeMap<Category, Vec<String>>;

/// Configuration for the keyword classifier
///
/// # Examples
///
/// ```
/// use docket_classifier::ClassifierConfig;
///
/// let config = ClassifierConfig::from_toml(r#"
///     [keywords]
///     "Tax Document" = ["tax return", "form 1040"]
/// "#).unwrap();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Keywords and phrases per category
    #[serde(default = "estate_keywords")]
    pub keywords: KeywordTable,
}

impl Default for ClassifierConfig {
    /// The estate-settlement keyword table
    fn default() -> Self {
        Self {
            keywords: estate_keywords(),
        }
    }
}

impl ClassifierConfig {
    /// Create a configuration from an explicit table
    pub fn with_keywords(keywords: KeywordTable) -> Self {
        Self { keywords }
    }

    /// Validate the configuration
    ///
    /// A keyword may appear only once per category, ignoring case and
    /// spacing, since score counts distinct keywords.
    pub fn validate(&self) -> Result<(), String> {
        if self.keywords.contains_key(&Category::Miscellaneous) {
            return Err("Miscellaneous is the fallback category and cannot have keywords".to_string());
        }
        if self.keywords.values().all(|k| k.is_empty()) {
            return Err("keyword table defines no keywords".to_string());
        }
        for (category, keywords) in &self.keywords {
            if let Some(i) = keywords.iter().position(|k| k.trim().is_empty()) {
                return Err(format!("{} keyword #{} is blank", category, i + 1));
            }
            let mut seen = HashSet::new();
            if let Some(dup) = keywords.iter().find(|k| !seen.insert(phrase_key(k))) {
                return Err(format!(
                    "{} keyword '{}' is listed more than once",
                    category,
                    dup.trim()
                ));
            }
        }
        Ok(())
    }

    /// Number of keywords defined for a category
    pub fn keyword_count(&self, category: Category) -> usize {
        self.keywords.get(&category).map(Vec::len).unwrap_or(0)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

fn estate_keywords() -> KeywordTable {
    let table: [(Category, &[&str]); 5] = [
        (
            Category::DeathCertificate,
            &[
                "certificate of death",
                "death certificate",
                "department of health",
                "deceased",
                "date of death",
                "cause of death",
                "certifying physician",
            ],
        ),
        (
            Category::WillOrTrust,
            &[
                "last will and testament",
                "will and testament",
                "trust agreement",
                "trust document",
                "executor",
                "beneficiary",
                "testator",
                "trustee",
            ],
        ),
        (
            Category::PropertyDeed,
            &[
                "deed",
                "property deed",
                "warranty deed",
                "quitclaim deed",
                "real estate",
                "property transfer",
                "grantor",
                "grantee",
            ],
        ),
        (
            Category::FinancialStatement,
            &[
                "financial statement",
                "bank statement",
                "account statement",
                "balance sheet",
                "income statement",
                "assets",
                "liabilities",
                "account balance",
            ],
        ),
        (
            Category::TaxDocument,
            &[
                "tax return",
                "tax document",
                "irs",
                "internal revenue service",
                "form 1040",
                "tax year",
                "taxable income",
                "tax liability",
            ],
        ),
    ];

    table
        .into_iter()
        .map(|(category, keywords)| {
            (category, keywords.iter().map(|k| k.to_string()).collect())
        })
        .collect()
}
