//! Compliance rule configuration

use docket_domain::validation::BYPASS_DESCRIPTION;
use docket_domain::{phrase_key, Category, RuleKind};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// A compliance rule for one category
///
/// Serialized as a tagged record, e.g. in TOML:
///
/// ```toml
/// [rules."Death Certificate"]
/// kind = "all-of"
/// phrases = ["Certificate of Death", "Date of Death"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Rule {
    /// Always passes
    Bypass,

    /// Passes iff every phrase is present
    AllOf {
        /// Required phrases
        phrases: Vec<String>,
    },

    /// Passes iff at least one phrase is present
    AnyOf {
        /// Accepted phrases
        phrases: Vec<String>,
    },
}

impl Rule {
    /// Build an all-of rule
    pub fn all_of<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Rule::AllOf {
            phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }

    /// Build an any-of rule
    pub fn any_of<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Rule::AnyOf {
            phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }

    /// Kind of the rule
    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::Bypass => RuleKind::Bypass,
            Rule::AllOf { .. } => RuleKind::AllOf,
            Rule::AnyOf { .. } => RuleKind::AnyOf,
        }
    }

    /// Phrases listed by the rule (empty for bypass)
    pub fn phrases(&self) -> &[String] {
        match self {
            Rule::Bypass => &[],
            Rule::AllOf { phrases } | Rule::AnyOf { phrases } => phrases,
        }
    }

    /// Human-readable description of the requirement
    ///
    /// ```
    /// use docket_compliance::Rule;
    ///
    /// let rule = Rule::any_of(["Last Will and Testament", "Trust Agreement"]);
    /// assert_eq!(
    ///     rule.description(),
    ///     "Must contain 'Last Will and Testament' or 'Trust Agreement'"
    /// );
    /// ```
    pub fn description(&self) -> String {
        match self {
            Rule::Bypass => BYPASS_DESCRIPTION.to_string(),
            Rule::AllOf { phrases } => format!("Must contain {}", join_quoted(phrases, "and")),
            Rule::AnyOf { phrases } => format!("Must contain {}", join_quoted(phrases, "or")),
        }
    }
}

/// Quote each phrase and join as "'a', 'b' and 'c'"
pub(crate) fn join_quoted(phrases: &[String], conjunction: &str) -> String {
    let quoted: Vec<String> = phrases.iter().map(|p| format!("'{}'", p)).collect();
    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} {} {}", rest.join(", "), conjunction, last),
    }
}

/// Rules per category; categories without an entry are bypassed
pub type RuleTable = BTreeMap<Category, Rule>;

/// Configuration for the compliance checker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceConfig {
    /// Rule per category
    #[serde(default = "estate_rules")]
    pub rules: RuleTable,
}

impl Default for ComplianceConfig {
    /// Estate-settlement rules: death certificates and wills/trusts are checked
    fn default() -> Self {
        Self {
            rules: estate_rules(),
        }
    }
}

impl ComplianceConfig {
    /// Create a permissive configuration (every category bypassed)
    pub fn permissive() -> Self {
        Self {
            rules: RuleTable::new(),
        }
    }

    /// Create a configuration from an explicit table
    pub fn with_rules(rules: RuleTable) -> Self {
        Self { rules }
    }

    /// Validate the configuration
    ///
    /// A phrase may appear only once per rule, ignoring case and spacing.
    pub fn validate(&self) -> Result<(), String> {
        for (category, rule) in &self.rules {
            if rule.kind() != RuleKind::Bypass && rule.phrases().is_empty() {
                return Err(format!("{} {} rule lists no phrases", category, rule.kind()));
            }
            if rule.phrases().iter().any(|p| p.trim().is_empty()) {
                return Err(format!("{} rule contains a blank phrase", category));
            }
            let mut seen = HashSet::new();
            if let Some(dup) = rule.phrases().iter().find(|p| !seen.insert(phrase_key(p))) {
                return Err(format!("{} rule lists '{}' more than once", category, dup.trim()));
            }
        }
        Ok(())
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

fn estate_rules() -> RuleTable {
    let mut rules = RuleTable::new();
    rules.insert(
        Category::DeathCertificate,
        Rule::all_of(["Certificate of Death", "Date of Death"]),
    );
    rules.insert(
        Category::WillOrTrust,
        Rule::any_of(["Last Will and Testament", "Trust Agreement"]),
    );
    rules
}
