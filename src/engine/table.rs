//! Session table
//!
//! Owns every game keyed by `SessionId`. The id map sits behind a
//! reader/writer lock that is only held for lookup and insert; each session
//! has its own mutex so one game's guesses never wait on another's.

use crate::core::{
    GameConfig, GameError, GuessOutcome, Hint, Session, SessionId, SessionSnapshot,
};
use crate::wordlists::{AssociationTable, WordCatalog};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use tracing::debug;

type SharedSession = Arc<Mutex<Session>>;

/// Coordinates game sessions over a shared catalog
pub struct SessionTable<'a> {
    catalog: &'a WordCatalog,
    associations: &'a AssociationTable,
    config: GameConfig,
    sessions: RwLock<FxHashMap<SessionId, SharedSession>>,
    rng: Mutex<StdRng>,
    next_id: AtomicU64,
}

impl<'a> SessionTable<'a> {
    /// Create a table seeded from the operating system
    #[must_use]
    pub fn new(
        catalog: &'a WordCatalog,
        associations: &'a AssociationTable,
        config: GameConfig,
    ) -> Self {
        Self::with_rng(catalog, associations, config, StdRng::from_os_rng())
    }

    /// Create a table whose word choices and hints are reproducible
    ///
    /// # Examples
    /// ```
    /// use word_guess::core::GameConfig;
    /// use word_guess::engine::SessionTable;
    /// use word_guess::wordlists::{AssociationTable, WordCatalog};
    ///
    /// let catalog = WordCatalog::embedded();
    /// let associations = AssociationTable::embedded();
    /// let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 7);
    ///
    /// let (id, snapshot) = table.start_game(None, 4).unwrap();
    /// assert_eq!(snapshot.word_length, 4);
    /// assert_eq!(snapshot.attempts_remaining, 5);
    ///
    /// let outcome = table.submit_guess(id, "abc").unwrap();
    /// assert_eq!(outcome.message, "Guess must be 4 letters long!");
    /// ```
    #[must_use]
    pub fn seeded(
        catalog: &'a WordCatalog,
        associations: &'a AssociationTable,
        config: GameConfig,
        seed: u64,
    ) -> Self {
        Self::with_rng(catalog, associations, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        catalog: &'a WordCatalog,
        associations: &'a AssociationTable,
        config: GameConfig,
        rng: StdRng,
    ) -> Self {
        Self {
            catalog,
            associations,
            config,
            sessions: RwLock::new(FxHashMap::default()),
            rng: Mutex::new(rng),
            next_id: AtomicU64::new(1),
        }
    }

    /// Start a game of `length` letters
    ///
    /// With `Some(id)` the game under that id is replaced; with `None` a new id
    /// is allocated. Ids are only ever handed out by the table, so nothing is
    /// stored when the length is invalid or `id` was never allocated.
    ///
    /// # Errors
    /// Returns `GameError::InvalidLength` if the catalog has no words of `length`,
    /// or `GameError::UnknownSession` if `id` is not in the table.
    pub fn start_game(
        &self,
        id: Option<SessionId>,
        length: usize,
    ) -> Result<(SessionId, SessionSnapshot), GameError> {
        let session = self.new_session(length)?;
        let snapshot = session.snapshot();

        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let id = match id {
            Some(id) if sessions.contains_key(&id) => id,
            Some(id) => return Err(GameError::UnknownSession(id)),
            None => SessionId::new(self.next_id.fetch_add(1, Ordering::Relaxed)),
        };
        let replaced = sessions
            .insert(id, Arc::new(Mutex::new(session)))
            .is_some();
        drop(sessions);

        debug!(%id, length, replaced, "game started");
        Ok((id, snapshot))
    }

    /// Submit a guess to the game under `id`
    ///
    /// # Errors
    /// Returns `GameError::UnknownSession` if no game was started under `id`.
    pub fn submit_guess(&self, id: SessionId, guess: &str) -> Result<GuessOutcome, GameError> {
        let session = self.lookup(id)?;
        let outcome = lock(&session).submit_guess(guess);
        debug!(%id, game_over = outcome.game_over, "guess handled");
        Ok(outcome)
    }

    /// Current public state of the game under `id`
    ///
    /// # Errors
    /// Returns `GameError::UnknownSession` if no game was started under `id`.
    pub fn snapshot(&self, id: SessionId) -> Result<SessionSnapshot, GameError> {
        let session = self.lookup(id)?;
        let snapshot = lock(&session).snapshot();
        Ok(snapshot)
    }

    /// Number of sessions ever started and not replaced
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a WordCatalog {
        self.catalog
    }

    fn new_session(&self, length: usize) -> Result<Session, GameError> {
        let mut rng = lock(&self.rng);
        let record = self.catalog.choose(length, &self.config, &mut *rng)?;
        let hint = Hint::generate(
            record,
            self.associations.lookup(record.word()),
            self.config.letter_hint_count(record.len()),
            &mut *rng,
        );
        Ok(Session::new(
            record.clone(),
            hint,
            self.config.starting_attempts,
        ))
    }

    fn lookup(&self, id: SessionId) -> Result<SharedSession, GameError> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
            .ok_or(GameError::UnknownSession(id))
    }
}

/// Lock a mutex, recovering the data if a holder panicked
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
