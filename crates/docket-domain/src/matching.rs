//! Phrase matching shared by classification and compliance
//!
//! Both stages must agree on when a phrase "is present" in a document, so the
//! rule lives here once:
//!
//! - Matching is case-insensitive.
//! - A phrase edge that is a word character must sit on a word boundary, so
//!   `will` does not match inside `willing`. Punctuation next to a phrase is a
//!   boundary (`Death:` matches `death`).
//! - Words inside a phrase are separated by any run of whitespace, so
//!   `date of death` matches across line breaks and repeated spaces.

use regex::Regex;
use thiserror::Error;

/// Errors building a phrase matcher
#[derive(Debug, Error)]
pub enum PatternError {
    /// The phrase contains no words
    #[error("phrase is empty")]
    Empty,

    /// The generated pattern failed to compile
    #[error("invalid phrase pattern: {0}")]
    Regex(#[from] regex::Error),
}

/// A compiled, boundary-aware phrase matcher
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    phrase: String,
    regex: Regex,
}

impl PhraseMatcher {
    /// Compile a matcher for the given phrase
    ///
    /// # Examples
    ///
    /// ```
    /// use docket_domain::PhraseMatcher;
    ///
    /// let m = PhraseMatcher::new("will").unwrap();
    /// assert!(m.is_match("Last Will and Testament"));
    /// assert!(!m.is_match("willing and able"));
    /// ```
    pub fn new(phrase: &str) -> Result<Self, PatternError> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        if words.is_empty() {
            return Err(PatternError::Empty);
        }

        let body = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join(r"\s+");

        let first = words.first().and_then(|w| w.chars().next());
        let last = words.last().and_then(|w| w.chars().last());
        let lead = if first.is_some_and(is_word_char) { r"\b" } else { "" };
        let trail = if last.is_some_and(is_word_char) { r"\b" } else { "" };

        let regex = Regex::new(&format!("(?i){lead}{body}{trail}"))?;
        Ok(Self {
            phrase: words.join(" "),
            regex,
        })
    }

    /// The normalized phrase (single spaces between words)
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Whether the phrase occurs in `text`
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Key under which two phrases compile to the same matcher
///
/// Case and whitespace runs are ignored, so `" IRS "` and `"irs"` share a key.
pub fn phrase_key(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
