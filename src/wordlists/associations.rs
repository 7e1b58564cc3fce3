//! Association hints keyed by word

use super::embedded::ASSOCIATIONS;
use rustc_hash::FxHashMap;

/// Short descriptive tokens for some catalog words
#[derive(Debug, Clone, Default)]
pub struct AssociationTable {
    entries: FxHashMap<String, Vec<String>>,
}

impl AssociationTable {
    /// Table compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_pairs(ASSOCIATIONS.iter().copied())
    }

    /// Build a table from `(word, tokens)` pairs
    ///
    /// Later pairs for the same word replace earlier ones.
    #[must_use]
    pub fn from_pairs<'a, I, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, T)>,
        T: IntoIterator<Item = &'a &'a str>,
    {
        let entries = pairs
            .into_iter()
            .map(|(word, tokens)| {
                (
                    word.to_lowercase(),
                    tokens.into_iter().map(ToString::to_string).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Tokens for `word`, if the table has any
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
