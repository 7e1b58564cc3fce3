//! Game errors
//!
//! Every variant is recoverable: it is reported to the caller as a message
//! and never ends a session.

use super::SessionId;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Requested word length has no catalog entries
    InvalidLength { requested: usize },
    /// Guess length differs from the secret
    MalformedGuess { expected: usize, got: usize },
    /// No session was ever started under this id
    UnknownSession(SessionId),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { requested } => {
                write!(f, "Invalid word length: {requested}")
            }
            Self::MalformedGuess { expected, .. } => {
                write!(f, "Guess must be {expected} letters long!")
            }
            Self::UnknownSession(id) => write!(f, "Unknown session {id}"),
        }
    }
}

impl std::error::Error for GameError {}
