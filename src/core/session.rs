//! Game session state machine
//!
//! A session moves from `InProgress` to either `Won` or `Lost`. Both end
//! states reject further guesses; only starting a new game leaves them.

use super::error::GameError;
use super::evaluator::Feedback;
use super::hint::Hint;
use super::record::WordRecord;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    InProgress,
    Won,
    Lost,
}

impl GamePhase {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// What a guess did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Game already finished; nothing changed
    AlreadyOver,
    /// Guess refused without using an attempt
    Rejected(GameError),
    Won,
    /// Last attempt used on a wrong guess
    Lost { secret: String, correct: usize },
    /// Wrong guess with attempts left
    Missed { correct: usize },
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyOver => write!(f, "Game is over. Start a new game!"),
            Self::Rejected(err) => write!(f, "{err}"),
            Self::Won => write!(f, "Correct! You win!"),
            Self::Lost { secret, .. } => write!(f, "Game over! The word was '{secret}'."),
            Self::Missed { correct } => write!(
                f,
                "Incorrect guess. {correct} letters in correct position. Try again!"
            ),
        }
    }
}

/// Result of submitting one guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessOutcome {
    pub message: String,
    pub attempts_remaining: u32,
    pub game_over: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_count: Option<usize>,
    #[serde(skip)]
    pub verdict: Verdict,
}

impl GuessOutcome {
    /// Whether this guess consumed an attempt
    #[must_use]
    pub const fn used_attempt(&self) -> bool {
        matches!(
            self.verdict,
            Verdict::Won | Verdict::Lost { .. } | Verdict::Missed { .. }
        )
    }
}

/// Public view of a session; never contains the secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub word_length: usize,
    pub hint: Hint,
    pub attempts_remaining: u32,
    pub max_attempts: u32,
    pub game_over: bool,
    pub phase: GamePhase,
    pub last_message: String,
    pub last_correct_count: usize,
}

/// One game in progress or concluded
#[derive(Debug, Clone)]
pub struct Session {
    secret: WordRecord,
    hint: Hint,
    attempts_remaining: u32,
    max_attempts: u32,
    phase: GamePhase,
    last_message: String,
    last_correct_count: usize,
}

impl Session {
    /// Start a game for `secret` with a prebuilt hint
    #[must_use]
    pub fn new(secret: WordRecord, hint: Hint, attempts: u32) -> Self {
        debug!(length = secret.len(), attempts, "session started");
        Self {
            secret,
            hint,
            attempts_remaining: attempts,
            max_attempts: attempts,
            phase: GamePhase::InProgress,
            last_message: String::new(),
            last_correct_count: 0,
        }
    }

    /// Submit a guess
    ///
    /// The guess is trimmed and lowercased. Finished games and wrong-length
    /// guesses leave the session untouched. Any other guess costs one
    /// attempt before it is checked, so the loss is reported by the same
    /// call that uses the final attempt.
    ///
    /// # Examples
    /// ```
    /// use word_guess::core::{Hint, Session, WordRecord};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let record = WordRecord::new("deer", "A forest animal with antlers", "Animal").unwrap();
    /// let hint = Hint::generate(&record, None, 2, &mut StdRng::seed_from_u64(1));
    /// let mut session = Session::new(record, hint, 5);
    ///
    /// let outcome = session.submit_guess("bike");
    /// assert_eq!(outcome.attempts_remaining, 4);
    /// assert_eq!(outcome.correct_count, Some(0));
    ///
    /// let outcome = session.submit_guess(" DEER ");
    /// assert_eq!(outcome.message, "Correct! You win!");
    /// assert_eq!(outcome.attempts_remaining, 3);
    /// assert!(outcome.game_over);
    /// ```
    pub fn submit_guess(&mut self, raw: &str) -> GuessOutcome {
        let guess = raw.trim().to_lowercase();

        if self.phase.is_over() {
            return self.respond(Verdict::AlreadyOver, None);
        }

        let expected = self.secret.len();
        let got = guess.chars().count();
        if got != expected {
            debug!(expected, got, "guess rejected");
            return self.respond(
                Verdict::Rejected(GameError::MalformedGuess { expected, got }),
                None,
            );
        }

        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);

        let feedback = Feedback::calculate(&guess, self.secret.word());
        let correct = feedback.correct_count();

        // A win keeps the count reported by the last miss
        if feedback.is_perfect() {
            self.phase = GamePhase::Won;
            info!(attempts_left = self.attempts_remaining, "game won");
            return self.respond(Verdict::Won, Some(correct));
        }
        self.last_correct_count = correct;

        let verdict = if self.attempts_remaining == 0 {
            self.phase = GamePhase::Lost;
            info!(secret = self.secret.word(), "game lost");
            Verdict::Lost {
                secret: self.secret.word().to_string(),
                correct,
            }
        } else {
            debug!(correct, attempts_left = self.attempts_remaining, "guess missed");
            Verdict::Missed { correct }
        };

        self.respond(verdict, Some(correct))
    }

    fn respond(&mut self, verdict: Verdict, correct_count: Option<usize>) -> GuessOutcome {
        self.last_message = verdict.to_string();
        GuessOutcome {
            message: self.last_message.clone(),
            attempts_remaining: self.attempts_remaining,
            game_over: self.phase.is_over(),
            correct_count,
            verdict,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            word_length: self.secret.len(),
            hint: self.hint.clone(),
            attempts_remaining: self.attempts_remaining,
            max_attempts: self.max_attempts,
            game_over: self.phase.is_over(),
            phase: self.phase,
            last_message: self.last_message.clone(),
            last_correct_count: self.last_correct_count,
        }
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    #[inline]
    #[must_use]
    pub const fn hint(&self) -> &Hint {
        &self.hint
    }

    #[inline]
    #[must_use]
    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    #[inline]
    #[must_use]
    pub const fn last_correct_count(&self) -> usize {
        self.last_correct_count
    }
}
