//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::WordRecord;
use rand::Rng;

/// A strategy for picking the next guess among the remaining candidates
///
/// Any randomness comes from `rng`, so a seeded source replays the same picks.
pub trait Strategy {
    /// Returns the chosen guess, or `None` if there are no candidates.
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &[&'a WordRecord],
        rng: &mut R,
    ) -> Option<&'a WordRecord>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// First consistent word in catalog order (default)
    Consistent(ConsistentStrategy),
    /// Uniformly random consistent word
    Random(RandomStrategy),
}

impl<T: Strategy> Strategy for &T {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &[&'a WordRecord],
        rng: &mut R,
    ) -> Option<&'a WordRecord> {
        (**self).select_guess(candidates, rng)
    }
}

impl Strategy for StrategyType {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &[&'a WordRecord],
        rng: &mut R,
    ) -> Option<&'a WordRecord> {
        match self {
            Self::Consistent(s) => s.select_guess(candidates, rng),
            Self::Random(s) => s.select_guess(candidates, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "consistent", "random".
    /// Defaults to consistent if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Consistent(ConsistentStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Consistent(_) => "consistent",
            Self::Random(_) => "random",
        }
    }
}

/// Deterministic strategy
///
/// Always takes the first remaining candidate.
pub struct ConsistentStrategy;

impl Strategy for ConsistentStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &[&'a WordRecord],
        _rng: &mut R,
    ) -> Option<&'a WordRecord> {
        candidates.first().copied()
    }
}

/// Random strategy
///
/// Randomly selects from remaining candidates.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &[&'a WordRecord],
        rng: &mut R,
    ) -> Option<&'a WordRecord> {
        use rand::prelude::IndexedRandom;

        candidates.choose(rng).copied()
    }
}
