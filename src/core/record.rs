//! Catalog word representation
//!
//! A `WordRecord` stores a lowercase secret word together with the description
//! and category shown to the player.

use super::config::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use serde::Serialize;
use std::fmt;

/// A catalog word with its description and category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRecord {
    word: String,
    description: String,
    category: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(
                    f,
                    "Word must be {MIN_WORD_LENGTH}-{MAX_WORD_LENGTH} letters, got {len}"
                )
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl WordRecord {
    /// Create a new record, normalizing the word to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is outside the supported range
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_guess::core::WordRecord;
    ///
    /// let record = WordRecord::new("Deer", "A forest animal with antlers", "Animal").unwrap();
    /// assert_eq!(record.word(), "deer");
    ///
    /// assert!(WordRecord::new("ox", "", "").is_err());
    /// assert!(WordRecord::new("de3r", "", "").is_err());
    /// ```
    pub fn new(
        word: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, WordError> {
        let word: String = word.into().trim().to_lowercase();

        if !word.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&word.len()) {
            return Err(WordError::InvalidLength(word.len()));
        }

        if !word.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            word,
            description: description.into(),
            category: category.into(),
        })
    }

    /// Get the secret word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Always false: records are validated to hold at least four letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Get the letter at a 0-based position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        char::from(self.word.as_bytes()[position])
    }
}

impl fmt::Display for WordRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
