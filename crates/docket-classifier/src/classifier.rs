//! Keyword classification logic

use crate::{ClassifierConfig, ClassifierError, KeywordTable};
use docket_domain::traits::DocumentClassifier;
use docket_domain::{Category, CategoryScore, ClassificationResult, Document, PhraseMatcher};
use std::convert::Infallible;
use tracing::debug;

/// Compiled keyword list of one category
#[derive(Debug, Clone)]
struct CategoryKeywords {
    category: Category,
    matchers: Vec<PhraseMatcher>,
}

/// Classifies documents by counting distinct keyword matches per category
///
/// The classifier holds only its compiled keyword table and is safe to share
/// and reuse for any number of documents.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    /// Keyword lists in taxonomy priority order
    tables: Vec<CategoryKeywords>,
}

impl KeywordClassifier {
    /// Create a new classifier from the given configuration
    pub fn new(config: ClassifierConfig) -> Result<Self, ClassifierError> {
        config.validate().map_err(ClassifierError::Config)?;

        // BTreeMap iteration follows Category's Ord, which is priority order
        let tables = config
            .keywords
            .into_iter()
            .map(|(category, keywords)| {
                let matchers = keywords
                    .iter()
                    .map(|keyword| {
                        PhraseMatcher::new(keyword).map_err(|source| ClassifierError::Keyword {
                            category,
                            keyword: keyword.clone(),
                            source,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(CategoryKeywords { category, matchers })
            })
            .collect::<Result<Vec<_>, ClassifierError>>()?;

        Ok(Self { tables })
    }

    /// Classify a document
    ///
    /// Never fails: empty or unrecognized content yields Miscellaneous with
    /// confidence 0.0.
    pub fn classify(&self, document: &Document) -> ClassificationResult {
        let scores: Vec<CategoryScore> = self
            .tables
            .iter()
            .map(|table| {
                let matched: Vec<String> = table
                    .matchers
                    .iter()
                    .filter(|m| m.is_match(&document.content))
                    .map(|m| m.phrase().to_string())
                    .collect();
                CategoryScore {
                    category: table.category,
                    score: matched.len(),
                    keyword_count: table.matchers.len(),
                    matched,
                }
            })
            .collect();

        // Strictly greater: on a tie the earlier (higher priority) category stays
        let winner = scores
            .iter()
            .fold(None::<&CategoryScore>, |best, s| match best {
                Some(b) if s.score <= b.score => Some(b),
                _ if s.score == 0 => best,
                _ => Some(s),
            })
            .map(|w| (w.category, w.score as f64 / w.keyword_count as f64));

        let result = match winner {
            Some((category, confidence)) => {
                ClassificationResult::new(category, confidence.min(1.0)).with_scores(scores)
            }
            None => ClassificationResult::unmatched(scores),
        };

        debug!(
            document_id = %document.id,
            category = %result.category,
            confidence = result.confidence,
            "classified document"
        );

        result
    }

    /// All categories the classifier can assign, with their codes
    pub fn supported_categories(&self) -> Vec<(Category, &'static str)> {
        Category::ALL.iter().map(|c| (*c, c.code())).collect()
    }

    /// The keyword table in use
    pub fn keyword_table(&self) -> KeywordTable {
        self.tables
            .iter()
            .map(|t| {
                (
                    t.category,
                    t.matchers.iter().map(|m| m.phrase().to_string()).collect(),
                )
            })
            .collect()
    }

    /// Categories that have at least one keyword
    pub fn rule_categories(&self) -> Vec<Category> {
        self.tables
            .iter()
            .filter(|t| !t.matchers.is_empty())
            .map(|t| t.category)
            .collect()
    }
}

impl DocumentClassifier for KeywordClassifier {
    type Error = Infallible;

    fn classify(&self, document: &Document) -> Result<ClassificationResult, Self::Error> {
        Ok(KeywordClassifier::classify(self, document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> KeywordClassifier {
        KeywordClassifier::new(ClassifierConfig::default()).unwrap()
    }

    fn doc(content: &str) -> Document {
        Document::new("TEST", content).unwrap()
    }

    #[test]
    fn test_death_certificate() {
        let result = classifier().classify(&doc(
            "Certificate of Death for John Doe. Date of Death: Jan 1, 2023",
        ));
        assert_eq!(result.category, Category::DeathCertificate);
        assert_eq!(result.code, "01.0000-50");
        assert_eq!(result.winning_score(), 2);
        assert!((result.confidence - 2.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_will() {
        let result = classifier().classify(&doc("Last Will and Testament of Jane Roe"));
        assert_eq!(result.category, Category::WillOrTrust);
        assert_eq!(result.code, "02.0300-50");
        // "last will and testament" and "will and testament" both match
        assert_eq!(result.matched_keywords(), ["last will and testament", "will and testament"]);
        assert_eq!(result.confidence, 0.25);
    }

    #[test]
    fn test_no_keywords_is_miscellaneous() {
        let result = classifier().classify(&doc("The weather was nice today"));
        assert_eq!(result.category, Category::Miscellaneous);
        assert_eq!(result.code, "00.0000-00");
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.scores.len(), 5);
        assert!(result.scores.iter().all(|s| s.score == 0));
    }

    #[test]
    fn test_empty_content_is_miscellaneous() {
        let result = classifier().classify(&doc(""));
        assert_eq!(result.category, Category::Miscellaneous);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_unicode_content_does_not_fail() {
        let result = classifier().classify(&doc("Testament réservé, héritiers 遗嘱"));
        assert_eq!(result.category, Category::Miscellaneous);
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        let once = classifier().classify(&doc("deceased"));
        let many = classifier().classify(&doc("deceased deceased DECEASED deceased"));
        assert_eq!(once.winning_score(), 1);
        assert_eq!(many.winning_score(), 1);
        assert_eq!(once.confidence, many.confidence);
    }

    #[test]
    fn test_substring_inside_word_does_not_count() {
        // "deeds" and "trustees" are not whole-word matches for "deed" / "trustee"
        let result = classifier().classify(&doc("The trustees filed the deeds"));
        assert_eq!(result.category, Category::Miscellaneous);
    }

    #[test]
    fn test_tie_breaks_by_priority_order() {
        // One Property Deed keyword and one Financial Statement keyword
        let result = classifier().classify(&doc("The real estate and other assets"));
        assert_eq!(result.scores[2].score, 1);
        assert_eq!(result.scores[3].score, 1);
        assert_eq!(result.category, Category::PropertyDeed);

        // Same text reversed: order within the text does not matter
        let reversed = classifier().classify(&doc("Other assets and the real estate"));
        assert_eq!(reversed.category, Category::PropertyDeed);
    }

    #[test]
    fn test_tie_break_prefers_earliest_category() {
        let result = classifier().classify(&doc("tax return filed by the executor"));
        assert_eq!(result.category, Category::WillOrTrust);
    }

    #[test]
    fn test_higher_score_beats_priority() {
        let result = classifier().classify(&doc("deceased; tax return for tax year 2022"));
        assert_eq!(result.category, Category::TaxDocument);
        assert_eq!(result.winning_score(), 2);
    }

    #[test]
    fn test_confidence_penalizes_large_tables() {
        // Same single match, different table sizes: 1/7 vs 1/8
        let dc = classifier().classify(&doc("deceased"));
        let wt = classifier().classify(&doc("executor"));
        assert!(dc.confidence > wt.confidence);
        assert_eq!(wt.confidence, 0.125);
    }

    #[test]
    fn test_full_match_has_confidence_one() {
        let result = classifier().classify(&doc(
            "certificate of death, death certificate, department of health, deceased, \
             date of death, cause of death, certifying physician",
        ));
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_custom_table() {
        let mut keywords = KeywordTable::new();
        keywords.insert(Category::TaxDocument, vec!["w-2".to_string()]);
        let classifier = KeywordClassifier::new(ClassifierConfig::with_keywords(keywords)).unwrap();

        let result = classifier.classify(&doc("Attached is my W-2"));
        assert_eq!(result.category, Category::TaxDocument);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(classifier.rule_categories(), vec![Category::TaxDocument]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ClassifierConfig::with_keywords(KeywordTable::new());
        assert!(matches!(
            KeywordClassifier::new(config),
            Err(ClassifierError::Config(_))
        ));
    }

    #[test]
    fn test_repeated_table_entries_cannot_inflate_score() {
        let mut keywords = KeywordTable::new();
        keywords.insert(
            Category::DeathCertificate,
            vec!["deceased".to_string(), "other".to_string(), "other2".to_string()],
        );
        keywords.insert(
            Category::TaxDocument,
            vec!["irs".to_string(), "IRS".to_string(), " irs ".to_string(), "zzz".to_string()],
        );
        let result = KeywordClassifier::new(ClassifierConfig::with_keywords(keywords.clone()));
        assert!(matches!(result, Err(ClassifierError::Config(ref msg)) if msg.contains("more than once")));

        // With the copies removed, two distinct matches beat one
        keywords.insert(Category::TaxDocument, vec!["irs".to_string(), "zzz".to_string()]);
        let classifier = KeywordClassifier::new(ClassifierConfig::with_keywords(keywords)).unwrap();
        let result = classifier.classify(&doc("deceased, other; irs"));
        assert_eq!(result.category, Category::DeathCertificate);
        assert_eq!(result.winning_score(), 2);
    }

    #[test]
    fn test_supported_categories() {
        let categories = classifier().supported_categories();
        assert_eq!(categories.len(), 6);
        assert!(categories.contains(&(Category::Miscellaneous, "00.0000-00")));
    }

    #[test]
    fn test_keyword_table_round_trips_config() {
        assert_eq!(classifier().keyword_table(), ClassifierConfig::default().keywords);
    }

    #[test]
    fn test_trait_impl_never_fails() {
        let classifier = classifier();
        let result = DocumentClassifier::classify(&classifier, &doc("trust agreement"));
        assert_eq!(result.unwrap().category, Category::WillOrTrust);
    }

    proptest::proptest! {
        #[test]
        fn prop_confidence_in_unit_range(content in "\\PC{0,200}") {
            let result = classifier().classify(&doc(&content));
            proptest::prop_assert!((0.0..=1.0).contains(&result.confidence));
            proptest::prop_assert_eq!(result.confidence == 0.0, result.winning_score() == 0);
            proptest::prop_assert!(result.check().is_ok());
        }

        #[test]
        fn prop_classification_is_deterministic(content in "[a-z ]{0,120}") {
            let classifier = classifier();
            let first = classifier.classify(&doc(&content));
            let second = classifier.classify(&doc(&content));
            proptest::prop_assert_eq!(first, second);
        }
    }
}
