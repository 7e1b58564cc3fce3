//! Automated guesser

use super::strategy::Strategy;
use crate::core::{Hint, WordRecord, score};
use rand::Rng;

/// Plays a game by narrowing the catalog bucket with every piece of feedback
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    words: &'a [WordRecord],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a solver over the catalog words of the secret's length
    pub const fn new(strategy: S, words: &'a [WordRecord]) -> Self {
        Self { strategy, words }
    }

    /// Get the next guess given the hint and previous `(guess, correct_count)` pairs
    ///
    /// Returns None if no word is consistent with what has been seen.
    pub fn next_guess<R: Rng + ?Sized>(
        &self,
        hint: &Hint,
        history: &[(String, usize)],
        rng: &mut R,
    ) -> Option<&'a WordRecord> {
        let candidates = self.filter_candidates(hint, history);
        self.strategy.select_guess(&candidates, rng)
    }

    /// Words that agree with every revealed letter and every past score
    ///
    /// Words already guessed are excluded: a repeated guess can only be wrong.
    fn filter_candidates(&self, hint: &Hint, history: &[(String, usize)]) -> Vec<&'a WordRecord> {
        self.words
            .iter()
            .filter(|candidate| candidate.len() == hint.length())
            .filter(|candidate| {
                hint.letters()
                    .iter()
                    .all(|l| candidate.char_at(l.position - 1) == l.letter)
            })
            .filter(|candidate| {
                history.iter().all(|(guess, observed)| {
                    guess != candidate.word() && score(guess, candidate.word()) == *observed
                })
            })
            .collect()
    }
}
