//! Core domain types for the guessing game
//!
//! Word records, hints, scoring and the per-game state machine. Nothing here
//! performs I/O; randomness is always passed in by the caller.

pub mod config;
mod error;
mod evaluator;
mod hint;
mod record;
mod session;
mod session_id;

pub use config::GameConfig;
pub use error::GameError;
pub use evaluator::{Feedback, score};
pub use hint::{Hint, LetterHint, NO_ASSOCIATIONS};
pub use record::{WordError, WordRecord};
pub use session::{GamePhase, GuessOutcome, Session, SessionSnapshot, Verdict};
pub use session_id::SessionId;
