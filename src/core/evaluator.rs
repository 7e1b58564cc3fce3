//! Guess scoring
//!
//! A guess is scored by counting the positions where it agrees with the
//! secret. Unlike Wordle there is no "present elsewhere" state: a letter is
//! either in the right place or it is not.

/// Count positions where `guess` and `secret` hold the same character
///
/// Callers guarantee both strings have the same number of characters; extra
/// characters on either side are ignored.
///
/// # Examples
/// ```
/// use word_guess::core::score;
///
/// assert_eq!(score("bike", "deer"), 0);
/// assert_eq!(score("beer", "deer"), 3);
/// assert_eq!(score("deer", "deer"), 4);
/// ```
#[must_use]
pub fn score(guess: &str, secret: &str) -> usize {
    guess
        .chars()
        .zip(secret.chars())
        .filter(|(g, s)| g == s)
        .count()
}

/// Position-wise feedback for a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    matches: Vec<bool>,
}

impl Feedback {
    /// Compare `guess` against `secret` position by position
    #[must_use]
    pub fn calculate(guess: &str, secret: &str) -> Self {
        let matches = guess
            .chars()
            .zip(secret.chars())
            .map(|(g, s)| g == s)
            .collect();
        Self { matches }
    }

    /// Number of correctly placed letters
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.matches.iter().filter(|&&hit| hit).count()
    }

    /// Check if every position matched
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.matches.iter().all(|&hit| hit)
    }

    /// Per-position match flags
    #[must_use]
    pub fn matches(&self) -> &[bool] {
        &self.matches
    }
}
