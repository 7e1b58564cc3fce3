//! Game configuration
//!
//! Named constants for the game rules plus a `GameConfig` value that the CLI
//! can override.

/// Shortest supported secret word
pub const MIN_WORD_LENGTH: usize = 4;

/// Longest supported secret word
pub const MAX_WORD_LENGTH: usize = 10;

/// Attempts granted at the start of every game
pub const STARTING_ATTEMPTS: u32 = 5;

/// Upper bound on revealed letters per hint
pub const MAX_LETTER_HINTS: usize = 2;

/// Number of association tokens sampled into a hint
pub const ASSOCIATION_SAMPLE: usize = 2;

/// Word length used when none is requested
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Rules for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub min_word_length: usize,
    pub max_word_length: usize,
    pub starting_attempts: u32,
    pub max_letter_hints: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_word_length: MIN_WORD_LENGTH,
            max_word_length: MAX_WORD_LENGTH,
            starting_attempts: STARTING_ATTEMPTS,
            max_letter_hints: MAX_LETTER_HINTS,
        }
    }
}

impl GameConfig {
    /// Override the number of attempts per game
    ///
    /// Zero is raised to one so every game accepts at least one guess.
    #[must_use]
    pub fn with_starting_attempts(mut self, attempts: u32) -> Self {
        self.starting_attempts = attempts.max(1);
        self
    }

    /// Override the maximum number of revealed letters
    #[must_use]
    pub const fn with_max_letter_hints(mut self, hints: usize) -> Self {
        self.max_letter_hints = hints;
        self
    }

    /// Check whether a word length is within the configured bounds
    #[inline]
    #[must_use]
    pub const fn supports_length(&self, length: usize) -> bool {
        length >= self.min_word_length && length <= self.max_word_length
    }

    /// Letters revealed for a word of `length`: `min(max_letter_hints, length - 2)`
    #[inline]
    #[must_use]
    pub fn letter_hint_count(&self, length: usize) -> usize {
        self.max_letter_hints.min(length.saturating_sub(2))
    }
}
