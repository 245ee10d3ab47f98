//! Compliance validation logic

use crate::config::join_quoted;
use crate::{ComplianceConfig, ComplianceError, Rule, RuleTable};
use docket_domain::traits::ComplianceValidator;
use docket_domain::{Category, ClassificationResult, Document, PhraseMatcher, RuleKind, ValidationResult};
use std::collections::BTreeMap;
use tracing::debug;

/// A rule with its phrases compiled
#[derive(Debug, Clone)]
struct CompiledRule {
    kind: RuleKind,
    description: String,
    matchers: Vec<PhraseMatcher>,
    /// Phrases as configured, used in reasons
    phrases: Vec<String>,
}

/// The compliance checker validates classified documents before approval
#[derive(Debug, Clone)]
pub struct ComplianceChecker {
    rules: BTreeMap<Category, CompiledRule>,
    config: ComplianceConfig,
}

impl ComplianceChecker {
    /// Create a new checker with the given configuration
    pub fn new(config: ComplianceConfig) -> Result<Self, ComplianceError> {
        config.validate().map_err(ComplianceError::Config)?;

        let mut rules = BTreeMap::new();
        for (category, rule) in &config.rules {
            if rule.kind() == RuleKind::Bypass {
                continue;
            }
            let matchers = rule
                .phrases()
                .iter()
                .map(|phrase| {
                    PhraseMatcher::new(phrase).map_err(|source| ComplianceError::Phrase {
                        category: *category,
                        phrase: phrase.clone(),
                        source,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            rules.insert(
                *category,
                CompiledRule {
                    kind: rule.kind(),
                    description: rule.description(),
                    matchers,
                    phrases: rule.phrases().to_vec(),
                },
            );
        }

        Ok(Self { rules, config })
    }

    /// Validate a document against the rule of its classified category
    ///
    /// # Arguments
    ///
    /// * `document` - The document whose content is checked
    /// * `classification` - The classification whose category selects the rule
    ///
    /// # Returns
    ///
    /// A validation result, or `InvalidInput` if the classification is malformed.
    /// A classification is malformed when its code is not the code of its
    /// category, when its confidence is NaN or outside `[0.0, 1.0]`, or when it
    /// assigns zero confidence to any category other than Miscellaneous.
    pub fn validate(
        &self,
        document: &Document,
        classification: &ClassificationResult,
    ) -> Result<ValidationResult, ComplianceError> {
        classification
            .check()
            .map_err(|e| ComplianceError::InvalidInput(format!("malformed classification: {}", e)))?;

        let category = classification.category;
        let Some(rule) = self.rules.get(&category) else {
            debug!(document_id = %document.id, %category, "no rule, bypassing validation");
            return Ok(ValidationResult::bypass(category));
        };

        let (found, missing): (Vec<_>, Vec<_>) = rule
            .matchers
            .iter()
            .zip(&rule.phrases)
            .partition(|(matcher, _)| matcher.is_match(&document.content));
        let found: Vec<String> = found.into_iter().map(|(_, p)| p.clone()).collect();

        let reasons = match rule.kind {
            RuleKind::AllOf => missing
                .into_iter()
                .map(|(_, phrase)| format!("missing required phrase '{}'", phrase))
                .collect(),
            RuleKind::AnyOf if found.is_empty() => vec![format!(
                "must contain at least one of {}",
                join_quoted(&rule.phrases, "or")
            )],
            _ => Vec::new(),
        };

        let result = ValidationResult {
            passed: reasons.is_empty(),
            reasons,
            description: rule.description.clone(),
            category,
            rule: rule.kind,
            found,
        };

        debug!(
            document_id = %document.id,
            %category,
            rule = %result.rule,
            passed = result.passed,
            "validated document"
        );

        Ok(result)
    }

    /// The rule table in use
    pub fn rule_table(&self) -> &RuleTable {
        &self.config.rules
    }

    /// The rule applied to a category (bypass if none is configured)
    pub fn rule_for(&self, category: Category) -> Rule {
        self.config
            .rules
            .get(&category)
            .cloned()
            .unwrap_or(Rule::Bypass)
    }

    /// Categories whose documents are actually checked
    pub fn categories_requiring_validation(&self) -> Vec<Category> {
        self.rules.keys().copied().collect()
    }
}

impl ComplianceValidator for ComplianceChecker {
    type Error = ComplianceError;

    fn validate(
        &self,
        document: &Document,
        classification: &ClassificationResult,
    ) -> Result<ValidationResult, Self::Error> {
        ComplianceChecker::validate(self, document, classification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> ComplianceChecker {
        ComplianceChecker::new(ComplianceConfig::default()).unwrap()
    }

    fn doc(content: &str) -> Document {
        Document::new("TEST", content).unwrap()
    }

    fn classified(category: Category) -> ClassificationResult {
        ClassificationResult::new(category, 0.5)
    }

    #[test]
    fn test_valid_death_certificate() {
        let result = checker()
            .validate(
                &doc("Certificate of Death for John Doe. Date of Death: Jan 1, 2023"),
                &classified(Category::DeathCertificate),
            )
            .unwrap();

        assert!(result.passed);
        assert!(result.reasons.is_empty());
        assert_eq!(result.rule, RuleKind::AllOf);
        assert_eq!(result.found, ["Certificate of Death", "Date of Death"]);
        assert_eq!(
            result.description,
            "Must contain 'Certificate of Death' and 'Date of Death'"
        );
    }

    #[test]
    fn test_death_certificate_missing_date() {
        let result = checker()
            .validate(
                &doc("Certificate of Death for John Doe."),
                &classified(Category::DeathCertificate),
            )
            .unwrap();

        assert!(!result.passed);
        assert_eq!(result.reasons.len(), 1);
        assert!(result.reasons[0].contains("Date of Death"));
    }

    #[test]
    fn test_death_certificate_missing_both_phrases() {
        let result = checker()
            .validate(
                &doc("DEATH RECORD. Deceased Date: February 15, 2023"),
                &classified(Category::DeathCertificate),
            )
            .unwrap();

        assert!(!result.passed);
        assert_eq!(
            result.reasons,
            [
                "missing required phrase 'Certificate of Death'",
                "missing required phrase 'Date of Death'"
            ]
        );
    }

    #[test]
    fn test_will_passes_any_of() {
        let result = checker()
            .validate(
                &doc("Last Will and Testament of Jane Roe"),
                &classified(Category::WillOrTrust),
            )
            .unwrap();
        assert!(result.passed);
        assert_eq!(result.found, ["Last Will and Testament"]);
    }

    #[test]
    fn test_trust_passes_any_of() {
        let result = checker()
            .validate(
                &doc("THE JOHNSON FAMILY REVOCABLE LIVING TRUST AGREEMENT"),
                &classified(Category::WillOrTrust),
            )
            .unwrap();
        assert!(result.passed);
        assert_eq!(result.found, ["Trust Agreement"]);
    }

    #[test]
    fn test_will_or_trust_fails_with_single_reason() {
        let result = checker()
            .validate(
                &doc("ESTATE PLANNING DOCUMENT of Margaret Anne Wilson"),
                &classified(Category::WillOrTrust),
            )
            .unwrap();

        assert!(!result.passed);
        assert_eq!(
            result.reasons,
            ["must contain at least one of 'Last Will and Testament' or 'Trust Agreement'"]
        );
        assert!(result.found.is_empty());
    }

    #[test]
    fn test_bypass_categories() {
        for category in [
            Category::PropertyDeed,
            Category::FinancialStatement,
            Category::TaxDocument,
            Category::Miscellaneous,
        ] {
            let classification = if category == Category::Miscellaneous {
                ClassificationResult::unmatched(vec![])
            } else {
                classified(category)
            };
            let result = checker().validate(&doc(""), &classification).unwrap();
            assert!(result.passed);
            assert!(result.is_bypassed());
            assert_eq!(result.description, "no validation required");
            assert_eq!(result.category, category);
        }
    }

    #[test]
    fn test_uses_supplied_category_not_content() {
        // Content reads like a death certificate, but the classification says deed
        let result = checker()
            .validate(
                &doc("Certificate of Death"),
                &classified(Category::PropertyDeed),
            )
            .unwrap();
        assert!(result.is_bypassed());

        // And a death certificate classification is enforced regardless of content
        let result = checker()
            .validate(&doc("WARRANTY DEED"), &classified(Category::DeathCertificate))
            .unwrap();
        assert!(!result.passed);
    }

    #[test]
    fn test_case_insensitive_validation() {
        let result = checker()
            .validate(
                &doc("certificate of death\ndate of death: january 1, 2023"),
                &classified(Category::DeathCertificate),
            )
            .unwrap();
        assert!(result.passed);
    }

    #[test]
    fn test_malformed_classification_is_invalid_input() {
        let mut classification = classified(Category::DeathCertificate);
        classification.code = "00.0000-00".to_string();

        let result = checker().validate(&doc("Certificate of Death"), &classification);
        assert!(matches!(result, Err(ComplianceError::InvalidInput(_))));

        let out_of_range = ClassificationResult::new(Category::WillOrTrust, 2.0);
        let result = checker().validate(&doc(""), &out_of_range);
        assert!(matches!(result, Err(ComplianceError::InvalidInput(_))));

        let not_a_number = ClassificationResult::new(Category::WillOrTrust, f64::NAN);
        let result = checker().validate(&doc(""), &not_a_number);
        assert!(matches!(result, Err(ComplianceError::InvalidInput(_))));

        // Zero confidence is reserved for the unmatched fallback
        let unearned = ClassificationResult::new(Category::PropertyDeed, 0.0);
        let result = checker().validate(&doc(""), &unearned);
        assert!(matches!(result, Err(ComplianceError::InvalidInput(_))));
        let fallback = ClassificationResult::new(Category::Miscellaneous, 0.0);
        assert!(checker().validate(&doc(""), &fallback).unwrap().is_bypassed());
    }

    #[test]
    fn test_permissive_config_bypasses_everything() {
        let checker = ComplianceChecker::new(ComplianceConfig::permissive()).unwrap();
        let result = checker
            .validate(&doc(""), &classified(Category::DeathCertificate))
            .unwrap();
        assert!(result.passed);
        assert!(checker.categories_requiring_validation().is_empty());
    }

    #[test]
    fn test_explicit_bypass_rule_not_counted_as_requiring_validation() {
        let mut config = ComplianceConfig::default();
        config.rules.insert(Category::TaxDocument, Rule::Bypass);
        let checker = ComplianceChecker::new(config).unwrap();
        assert_eq!(
            checker.categories_requiring_validation(),
            vec![Category::DeathCertificate, Category::WillOrTrust]
        );
        assert_eq!(checker.rule_for(Category::TaxDocument), Rule::Bypass);
        assert_eq!(checker.rule_for(Category::PropertyDeed), Rule::Bypass);
        assert_eq!(checker.rule_table().len(), 3);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = ComplianceConfig::default();
        config
            .rules
            .insert(Category::TaxDocument, Rule::AnyOf { phrases: vec![] });
        assert!(matches!(
            ComplianceChecker::new(config),
            Err(ComplianceError::Config(_))
        ));
    }

    const REQUIRED: [&str; 3] = ["Notice of Filing", "Case Number", "Probate Court"];

    proptest::proptest! {
        #[test]
        fn prop_all_of_fails_exactly_on_missing_phrases(
            present in proptest::collection::vec(proptest::bool::ANY, 3),
            filler in "[a-z ]{0,40}",
        ) {
            let mut rules = RuleTable::new();
            rules.insert(Category::TaxDocument, Rule::all_of(REQUIRED));
            let checker = ComplianceChecker::new(ComplianceConfig::with_rules(rules)).unwrap();

            let content = REQUIRED
                .iter()
                .zip(&present)
                .filter(|(_, keep)| **keep)
                .map(|(p, _)| p.to_string())
                .collect::<Vec<_>>()
                .join(&format!(" {filler} . "));
            let result = checker
                .validate(&doc(&content), &classified(Category::TaxDocument))
                .unwrap();

            let missing: Vec<&str> = REQUIRED
                .iter()
                .zip(&present)
                .filter(|(_, keep)| !**keep)
                .map(|(p, _)| *p)
                .collect();
            proptest::prop_assert_eq!(result.passed, missing.is_empty());
            proptest::prop_assert_eq!(result.reasons.len(), missing.len());
            for phrase in missing {
                proptest::prop_assert!(result.reasons.iter().any(|r| r.contains(phrase)));
            }
        }

        #[test]
        fn prop_bypass_always_passes(content in "\\PC{0,120}") {
            let result = checker()
                .validate(&doc(&content), &classified(Category::FinancialStatement))
                .unwrap();
            proptest::prop_assert!(result.passed);
            proptest::prop_assert!(result.reasons.is_empty());
        }
    }
}
