//! Hint generation
//!
//! A hint reveals a few letters of the secret, its description and a sample
//! of associated words. Hints are built once when a game starts.

use super::config::ASSOCIATION_SAMPLE;
use super::record::WordRecord;
use rand::Rng;
use rand::seq::{SliceRandom, index};
use serde::Serialize;

/// Token used when a word has no associations
pub const NO_ASSOCIATIONS: &str = "no additional hints";

/// A revealed letter and its 1-based position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterHint {
    pub position: usize,
    pub letter: char,
}

/// Hint bundle shown to the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hint {
    letters: Vec<LetterHint>,
    description: String,
    category: String,
    associations: Vec<String>,
    length: usize,
}

impl Hint {
    /// Build a hint for `record`
    ///
    /// Reveals `letter_hints` distinct positions (never more than the word
    /// has) and samples up to two of `associations` after shuffling. A missing
    /// association list becomes the [`NO_ASSOCIATIONS`] placeholder.
    pub fn generate<R: Rng + ?Sized>(
        record: &WordRecord,
        associations: Option<&[String]>,
        letter_hints: usize,
        rng: &mut R,
    ) -> Self {
        let length = record.len();

        let letters = index::sample(rng, length, letter_hints.min(length))
            .into_iter()
            .map(|i| LetterHint {
                position: i + 1,
                letter: record.char_at(i),
            })
            .collect();

        let mut pool: Vec<String> = match associations {
            Some(tokens) if !tokens.is_empty() => tokens.to_vec(),
            _ => vec![NO_ASSOCIATIONS.to_string()],
        };
        pool.shuffle(rng);
        pool.truncate(ASSOCIATION_SAMPLE);

        Self {
            letters,
            description: record.description().to_string(),
            category: record.category().to_string(),
            associations: pool,
            length,
        }
    }

    /// Revealed letters, in the order they were drawn
    #[must_use]
    pub fn letters(&self) -> &[LetterHint] {
        &self.letters
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Sampled association tokens (at most two)
    #[must_use]
    pub fn associations(&self) -> &[String] {
        &self.associations
    }

    /// Length of the secret word
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// `Letter 'd' at position 1, Letter 'r' at position 4`
    #[must_use]
    pub fn letters_text(&self) -> String {
        self.letters
            .iter()
            .map(|hint| format!("Letter '{}' at position {}", hint.letter, hint.position))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `Think about: mammal, hooves`
    #[must_use]
    pub fn associations_text(&self) -> String {
        format!("Think about: {}", self.associations.join(", "))
    }

    #[must_use]
    pub fn description_text(&self) -> String {
        format!("Description: {}", self.description)
    }

    #[must_use]
    pub fn length_text(&self) -> String {
        format!("Word length: {} letters", self.length)
    }
}
