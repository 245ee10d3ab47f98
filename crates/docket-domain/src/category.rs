//! Category module - the fixed estate document taxonomy

use serde::{Deserialize, Serialize};
use std::fmt;

/// Document category in the estate taxonomy
///
/// The set is closed and each category maps 1:1 to a stable code. Declaration
/// order is the tie-break priority used by the classifier: when two categories
/// score equally, the one declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Category {
    /// Official record of a death
    DeathCertificate,

    /// Last will and testament, or a trust instrument
    WillOrTrust,

    /// Deed conveying real property
    PropertyDeed,

    /// Bank, account or balance statements
    FinancialStatement,

    /// Tax returns and IRS correspondence
    TaxDocument,

    /// Anything that matched no other category
    Miscellaneous,
}

impl Category {
    /// Every category, in tie-break priority order
    pub const ALL: [Category; 6] = [
        Category::DeathCertificate,
        Category::WillOrTrust,
        Category::PropertyDeed,
        Category::FinancialStatement,
        Category::TaxDocument,
        Category::Miscellaneous,
    ];

    /// Get the display name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::DeathCertificate => "Death Certificate",
            Category::WillOrTrust => "Will or Trust",
            Category::PropertyDeed => "Property Deed",
            Category::FinancialStatement => "Financial Statement",
            Category::TaxDocument => "Tax Document",
            Category::Miscellaneous => "Miscellaneous",
        }
    }

    /// Get the stable taxonomy code of the category
    pub fn code(&self) -> &'static str {
        match self {
            Category::DeathCertificate => "01.0000-50",
            Category::WillOrTrust => "02.0300-50",
            Category::PropertyDeed => "03.0090-00",
            Category::FinancialStatement => "04.5000-00",
            Category::TaxDocument => "05.5000-70",
            Category::Miscellaneous => "00.0000-00",
        }
    }

    /// Position in the tie-break ordering (0 is highest priority)
    pub fn priority(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or(Self::ALL.len())
    }

    /// Parse a category from its display name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
    }

    /// Reverse lookup of a category from its taxonomy code
    pub fn from_code(code: &str) -> Option<Self> {
        let needle = code.trim();
        Self::ALL.into_iter().find(|c| c.code() == needle)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Category> for &'static str {
    fn from(category: Category) -> Self {
        category.as_str()
    }
}

impl TryFrom<String> for Category {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
            .or_else(|| Self::from_code(s))
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}
