//! Word catalog partitioned by length

use super::embedded::CATALOG;
use crate::core::{GameConfig, GameError, WordRecord};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;

/// Catalog of secret words grouped by word length
#[derive(Debug, Clone, Default)]
pub struct WordCatalog {
    by_length: BTreeMap<usize, Vec<WordRecord>>,
}

impl WordCatalog {
    /// Group records by the length of their word
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = WordRecord>) -> Self {
        let mut by_length: BTreeMap<usize, Vec<WordRecord>> = BTreeMap::new();
        for record in records {
            by_length.entry(record.len()).or_default().push(record);
        }
        Self { by_length }
    }

    /// Catalog compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use word_guess::wordlists::WordCatalog;
    ///
    /// let catalog = WordCatalog::embedded();
    /// assert_eq!(catalog.supported_lengths(), vec![4, 5, 6, 7, 8, 9, 10]);
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_records(
            CATALOG
                .iter()
                .filter_map(|&(word, category, description)| {
                    WordRecord::new(word, description, category).ok()
                }),
        )
    }

    /// All records of exactly `length` letters
    ///
    /// # Errors
    /// Returns `GameError::InvalidLength` if `length` is outside the configured
    /// bounds or no record has that length.
    pub fn words_of_length(
        &self,
        length: usize,
        config: &GameConfig,
    ) -> Result<&[WordRecord], GameError> {
        if !config.supports_length(length) {
            return Err(GameError::InvalidLength { requested: length });
        }

        self.by_length
            .get(&length)
            .filter(|records| !records.is_empty())
            .map(Vec::as_slice)
            .ok_or(GameError::InvalidLength { requested: length })
    }

    /// Pick one record of `length` letters uniformly at random
    ///
    /// # Errors
    /// Same as [`WordCatalog::words_of_length`].
    pub fn choose<R: Rng + ?Sized>(
        &self,
        length: usize,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<&WordRecord, GameError> {
        self.words_of_length(length, config)?
            .choose(rng)
            .ok_or(GameError::InvalidLength { requested: length })
    }

    /// Lengths that have at least one record, ascending
    #[must_use]
    pub fn supported_lengths(&self) -> Vec<usize> {
        self.by_length
            .iter()
            .filter(|(_, records)| !records.is_empty())
            .map(|(&length, _)| length)
            .collect()
    }

    /// Total number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn record(word: &str) -> WordRecord {
        WordRecord::new(word, "", "").unwrap()
    }

    #[test]
    fn embedded_has_every_supported_length() {
        let catalog = WordCatalog::embedded();
        let config = GameConfig::default();

        for length in 4..=10 {
            let words = catalog.words_of_length(length, &config).unwrap();
            assert!(words.len() >= 5, "length {length} has {} words", words.len());
            assert!(words.iter().all(|r| r.len() == length));
        }
    }

    #[test]
    fn embedded_keeps_every_entry() {
        let catalog = WordCatalog::embedded();
        assert_eq!(catalog.len(), CATALOG.len());
    }

    #[test]
    fn words_are_filed_by_real_length() {
        let catalog = WordCatalog::embedded();
        let config = GameConfig::default();

        let eight = catalog.words_of_length(8, &config).unwrap();
        assert!(eight.iter().any(|r| r.word() == "treasure"));

        let nine = catalog.words_of_length(9, &config).unwrap();
        assert!(nine.iter().any(|r| r.word() == "landscape"));
    }

    #[test]
    fn out_of_range_lengths_fail() {
        let catalog = WordCatalog::embedded();
        let config = GameConfig::default();

        for length in [0, 1, 3, 11, 100] {
            assert_eq!(
                catalog.words_of_length(length, &config),
                Err(GameError::InvalidLength { requested: length })
            );
        }
    }

    #[test]
    fn empty_bucket_fails() {
        let catalog = WordCatalog::from_records([record("deer"), record("apple")]);
        let config = GameConfig::default();

        assert!(catalog.words_of_length(4, &config).is_ok());
        assert_eq!(
            catalog.words_of_length(6, &config),
            Err(GameError::InvalidLength { requested: 6 })
        );
        assert_eq!(catalog.supported_lengths(), vec![4, 5]);
    }

    #[test]
    fn choose_returns_matching_length() {
        let catalog = WordCatalog::embedded();
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(42);

        for length in 4..=10 {
            let chosen = catalog.choose(length, &config, &mut rng).unwrap();
            assert_eq!(chosen.len(), length);
        }
    }

    #[test]
    fn choose_covers_the_bucket() {
        let catalog = WordCatalog::embedded();
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(8);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(catalog.choose(4, &config, &mut rng).unwrap().word().to_string());
        }
        assert_eq!(seen.len(), catalog.words_of_length(4, &config).unwrap().len());
    }
}
