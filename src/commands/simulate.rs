//! Simulation command
//!
//! Plays many games in parallel on one session table with an automated
//! strategy and collects statistics.

use crate::core::{GameError, SessionId, SessionSnapshot, Verdict};
use crate::engine::SessionTable;
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub games: usize,
    /// Fixed word length; `None` cycles through every supported length
    pub length: Option<usize>,
    pub show_progress: bool,
    /// Seed for the players' choices; game `i` uses `seed + i`
    pub seed: Option<u64>,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize) -> Self {
        Self {
            games,
            length: None,
            show_progress: true,
            seed: None,
        }
    }
}

/// Result of playing one game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub session: SessionId,
    pub length: usize,
    pub guesses: Vec<String>,
    pub won: bool,
}

/// Result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Winning games keyed by the number of attempts they used
    pub distribution: BTreeMap<usize, usize>,
    /// `(wins, games)` per word length
    pub wins_by_length: BTreeMap<usize, (usize, usize)>,
    pub average_attempts: f64,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

/// Play one game to the end
///
/// # Errors
///
/// Returns an error if the table rejects the length.
pub fn play_game<S: Strategy, R: Rng + ?Sized>(
    table: &SessionTable,
    strategy: &S,
    length: usize,
    rng: &mut R,
) -> Result<GameRecord, GameError> {
    let (session, snapshot) = table.start_game(None, length)?;
    play_session(table, strategy, session, &snapshot, rng)
}

fn play_session<S: Strategy, R: Rng + ?Sized>(
    table: &SessionTable,
    strategy: &S,
    session: SessionId,
    snapshot: &SessionSnapshot,
    rng: &mut R,
) -> Result<GameRecord, GameError> {
    let length = snapshot.word_length;
    let words = table.catalog().words_of_length(length, table.config())?;
    let solver = Solver::new(strategy, words);

    let mut history: Vec<(String, usize)> = Vec::new();
    let mut guesses = Vec::new();

    let won = loop {
        let Some(guess) = solver.next_guess(&snapshot.hint, &history, rng) else {
            break false;
        };
        guesses.push(guess.word().to_string());

        let outcome = table.submit_guess(session, guess.word())?;
        match outcome.verdict {
            Verdict::Won => break true,
            Verdict::Missed { correct } => history.push((guess.word().to_string(), correct)),
            Verdict::Lost { .. } | Verdict::AlreadyOver | Verdict::Rejected(_) => break false,
        }
    };

    Ok(GameRecord {
        session,
        length,
        guesses,
        won,
    })
}

fn game_rng(seed: Option<u64>, game: usize) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, |seed| {
        StdRng::seed_from_u64(seed.wrapping_add(game as u64))
    })
}

/// Play `config.games` games in parallel
///
/// # Errors
///
/// Returns an error if a requested length is not in the catalog.
pub fn run_simulation<S: Strategy + Sync>(
    table: &SessionTable,
    strategy: &S,
    config: &SimulationConfig,
) -> Result<SimulationResult, GameError> {
    let lengths = match config.length {
        Some(length) => vec![length],
        None => table.catalog().supported_lengths(),
    };
    if lengths.is_empty() {
        return Err(GameError::InvalidLength {
            requested: table.config().min_word_length,
        });
    }

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    // Secrets are drawn in game order so a seeded table deals the same games
    let started = (0..config.games)
        .map(|i| table.start_game(None, lengths[i % lengths.len()]))
        .collect::<Result<Vec<_>, _>>()?;

    let records = started
        .into_par_iter()
        .enumerate()
        .map(|(i, (session, snapshot))| {
            let mut rng = game_rng(config.seed, i);
            let record = play_session(table, strategy, session, &snapshot, &mut rng);
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let result = summarize(&records, duration);
    info!(
        games = result.games,
        wins = result.wins,
        elapsed_ms = duration.as_millis() as u64,
        "simulation finished"
    );
    Ok(result)
}

fn summarize(records: &[GameRecord], duration: Duration) -> SimulationResult {
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut wins_by_length: BTreeMap<usize, (usize, usize)> = BTreeMap::new();

    for record in records {
        let entry = wins_by_length.entry(record.length).or_insert((0, 0));
        entry.1 += 1;
        if record.won {
            entry.0 += 1;
            *distribution.entry(record.guesses.len()).or_insert(0) += 1;
        }
    }

    let games = records.len();
    let wins: usize = distribution.values().sum();
    let total_attempts: usize = distribution.iter().map(|(n, count)| n * count).sum();

    SimulationResult {
        games,
        wins,
        losses: games - wins,
        distribution,
        wins_by_length,
        average_attempts: if wins > 0 {
            total_attempts as f64 / wins as f64
        } else {
            0.0
        },
        duration,
        games_per_second: if duration.as_secs_f64() > 0.0 {
            games as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, GamePhase, WordRecord};
    use crate::solver::{ConsistentStrategy, RandomStrategy};
    use crate::wordlists::{AssociationTable, WordCatalog};

    fn quiet(games: usize) -> SimulationConfig {
        SimulationConfig {
            games,
            length: None,
            show_progress: false,
            seed: Some(0),
        }
    }

    #[test]
    fn play_game_ends_the_session() {
        let catalog = WordCatalog::embedded();
        let associations = AssociationTable::embedded();
        let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 5);

        let mut rng = StdRng::seed_from_u64(0);
        let record = play_game(&table, &ConsistentStrategy, 6, &mut rng).unwrap();
        assert_eq!(record.length, 6);
        assert!(!record.guesses.is_empty());
        assert!(record.guesses.len() <= 5);

        let snapshot = table.snapshot(record.session).unwrap();
        assert!(snapshot.game_over);
        let expected = if record.won { GamePhase::Won } else { GamePhase::Lost };
        assert_eq!(snapshot.phase, expected);
    }

    #[test]
    fn single_word_bucket_is_always_won_first_try() {
        let catalog = WordCatalog::from_records([WordRecord::new("deer", "", "").unwrap()]);
        let associations = AssociationTable::default();
        let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 1);

        let config = SimulationConfig {
            games: 20,
            length: Some(4),
            show_progress: false,
            seed: None,
        };
        let result = run_simulation(&table, &ConsistentStrategy, &config).unwrap();

        assert_eq!(result.games, 20);
        assert_eq!(result.wins, 20);
        assert_eq!(result.losses, 0);
        assert_eq!(result.distribution.get(&1), Some(&20));
        assert!((result.average_attempts - 1.0).abs() < f64::EPSILON);
        assert!((result.win_rate() - 1.0).abs() < f64::EPSILON);
        assert_eq!(table.len(), 20);
    }

    #[test]
    fn simulation_cycles_through_lengths() {
        let catalog = WordCatalog::embedded();
        let associations = AssociationTable::embedded();
        let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 9);

        let result = run_simulation(&table, &RandomStrategy, &quiet(70)).unwrap();

        assert_eq!(result.games, 70);
        assert_eq!(result.wins + result.losses, 70);
        assert_eq!(result.wins_by_length.len(), 7);
        for (wins, played) in result.wins_by_length.values() {
            assert_eq!(*played, 10);
            assert!(wins <= played);
        }
        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.wins);
        for &attempts in result.distribution.keys() {
            assert!((1..=5).contains(&attempts));
        }
    }

    #[test]
    fn simulation_rejects_unknown_length() {
        let catalog = WordCatalog::embedded();
        let associations = AssociationTable::embedded();
        let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 1);

        let config = SimulationConfig {
            games: 3,
            length: Some(12),
            show_progress: false,
            seed: None,
        };
        assert_eq!(
            run_simulation(&table, &ConsistentStrategy, &config).unwrap_err(),
            GameError::InvalidLength { requested: 12 }
        );
    }

    #[test]
    fn empty_catalog_is_an_error() {
        let catalog = WordCatalog::default();
        let associations = AssociationTable::default();
        let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 1);

        assert!(run_simulation(&table, &ConsistentStrategy, &quiet(1)).is_err());
    }

    #[test]
    fn zero_games() {
        let catalog = WordCatalog::embedded();
        let associations = AssociationTable::embedded();
        let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 1);

        let result = run_simulation(&table, &ConsistentStrategy, &quiet(0)).unwrap();
        assert_eq!(result.games, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn seeded_simulation_is_reproducible() {
        let catalog = WordCatalog::embedded();
        let associations = AssociationTable::embedded();

        let run = || {
            let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 21);
            let config = SimulationConfig {
                seed: Some(5),
                ..quiet(60)
            };
            run_simulation(&table, &RandomStrategy, &config).unwrap()
        };

        let first = run();
        let second = run();
        assert_eq!(first.wins, second.wins);
        assert_eq!(first.distribution, second.distribution);
        assert_eq!(first.wins_by_length, second.wins_by_length);
    }

    #[test]
    fn seeded_random_player_replays_guesses() {
        let catalog = WordCatalog::embedded();
        let associations = AssociationTable::embedded();

        let play = || {
            let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 4);
            let mut rng = StdRng::seed_from_u64(11);
            play_game(&table, &RandomStrategy, 8, &mut rng).unwrap().guesses
        };
        assert_eq!(play(), play());
    }
}
