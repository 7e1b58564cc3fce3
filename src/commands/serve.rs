//! JSON-lines request loop
//!
//! Reads one JSON request per line and writes one JSON response per line.
//! Bad requests get an `error` response; the loop only stops at end of input.

use crate::core::{GameError, GuessOutcome, SessionId, SessionSnapshot};
use crate::engine::SessionTable;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// A request line
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// Start a game, or restart one the table already allocated
    Start {
        word_length: usize,
        #[serde(default)]
        session: Option<SessionId>,
    },
    Guess { session: SessionId, guess: String },
    Status { session: SessionId },
}

/// A response line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    Started {
        session: SessionId,
        #[serde(flatten)]
        snapshot: SessionSnapshot,
    },
    Guessed {
        session: SessionId,
        #[serde(flatten)]
        outcome: GuessOutcome,
    },
    Status {
        session: SessionId,
        #[serde(flatten)]
        snapshot: SessionSnapshot,
    },
    Error { error: String },
}

impl From<GameError> for Response {
    fn from(err: GameError) -> Self {
        Self::Error {
            error: err.to_string(),
        }
    }
}

/// Counters for one run of the loop
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ServeStats {
    pub requests: usize,
    pub errors: usize,
}

/// Apply one request to the table
pub fn handle_request(table: &SessionTable, request: Request) -> Response {
    match request {
        Request::Start {
            word_length,
            session,
        } => match table.start_game(session, word_length) {
            Ok((session, snapshot)) => Response::Started { session, snapshot },
            Err(err) => err.into(),
        },
        Request::Guess { session, guess } => match table.submit_guess(session, &guess) {
            Ok(outcome) => Response::Guessed { session, outcome },
            Err(err) => err.into(),
        },
        Request::Status { session } => match table.snapshot(session) {
            Ok(snapshot) => Response::Status { session, snapshot },
            Err(err) => err.into(),
        },
    }
}

/// Parse and apply one request line
pub fn handle_line(table: &SessionTable, line: &str) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => {
            debug!(?request, "request");
            handle_request(table, request)
        }
        Err(err) => {
            warn!(%err, "malformed request");
            Response::Error {
                error: format!("Malformed request: {err}"),
            }
        }
    }
}

/// Serve requests from `input` until it is exhausted
///
/// # Errors
///
/// Returns an error if reading input or writing a response fails.
pub fn run_serve<R: BufRead, W: Write>(
    table: &SessionTable,
    input: R,
    mut output: W,
) -> anyhow::Result<ServeStats> {
    let mut stats = ServeStats::default();

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_line(table, &line);
        stats.requests += 1;
        if matches!(response, Response::Error { .. }) {
            stats.errors += 1;
        }

        serde_json::to_writer(&mut output, &response)?;
        writeln!(output)?;
        output.flush()?;
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, WordRecord};
    use crate::wordlists::{AssociationTable, WordCatalog};
    use serde_json::Value;

    fn deer_catalog() -> WordCatalog {
        WordCatalog::from_records([WordRecord::new("deer", "A forest animal", "Animal").unwrap()])
    }

    fn run(table: &SessionTable, input: &str) -> (Vec<Value>, ServeStats) {
        let mut output = Vec::new();
        let stats = run_serve(table, input.as_bytes(), &mut output).unwrap();
        let responses = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        (responses, stats)
    }

    #[test]
    fn parse_requests() {
        let start: Request = serde_json::from_str(r#"{"op":"start","word_length":5}"#).unwrap();
        assert_eq!(
            start,
            Request::Start {
                word_length: 5,
                session: None
            }
        );

        let guess: Request =
            serde_json::from_str(r#"{"op":"guess","session":3,"guess":"deer"}"#).unwrap();
        assert_eq!(
            guess,
            Request::Guess {
                session: SessionId::new(3),
                guess: "deer".to_string()
            }
        );
    }

    #[test]
    fn full_game_over_the_wire() {
        let catalog = deer_catalog();
        let associations = AssociationTable::embedded();
        let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 1);

        let input = r#"{"op":"start","word_length":4}
{"op":"guess","session":1,"guess":"bike"}
{"op":"guess","session":1,"guess":"deer"}
{"op":"status","session":1}
"#;
        let (responses, stats) = run(&table, input);

        assert_eq!(stats.requests, 4);
        assert_eq!(stats.errors, 0);

        assert_eq!(responses[0]["type"], "started");
        assert_eq!(responses[0]["session"], 1);
        assert_eq!(responses[0]["word_length"], 4);
        assert_eq!(responses[0]["attempts_remaining"], 5);
        assert_eq!(responses[0]["hint"]["description"], "A forest animal");

        assert_eq!(responses[1]["type"], "guessed");
        assert_eq!(responses[1]["attempts_remaining"], 4);
        assert_eq!(responses[1]["game_over"], false);
        assert_eq!(responses[1]["correct_count"], 0);

        assert_eq!(responses[2]["message"], "Correct! You win!");
        assert_eq!(responses[2]["attempts_remaining"], 3);
        assert_eq!(responses[2]["game_over"], true);

        assert_eq!(responses[3]["type"], "status");
        assert_eq!(responses[3]["phase"], "won");
    }

    #[test]
    fn invalid_length_is_an_error_response() {
        let catalog = WordCatalog::embedded();
        let associations = AssociationTable::embedded();
        let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 1);

        let (responses, stats) = run(&table, "{\"op\":\"start\",\"word_length\":11}\n");
        assert_eq!(stats.errors, 1);
        assert_eq!(responses[0]["type"], "error");
        assert_eq!(responses[0]["error"], "Invalid word length: 11");
        assert!(responses[0].get("hint").is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn malformed_lines_do_not_stop_the_loop() {
        let catalog = deer_catalog();
        let associations = AssociationTable::embedded();
        let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 1);

        let input = "not json\n\n{\"op\":\"fly\"}\n{\"op\":\"start\",\"word_length\":4}\n";
        let (responses, stats) = run(&table, input);

        assert_eq!(stats.requests, 3);
        assert_eq!(stats.errors, 2);
        assert_eq!(responses[0]["type"], "error");
        assert_eq!(responses[1]["type"], "error");
        assert_eq!(responses[2]["type"], "started");
    }

    #[test]
    fn unknown_session_is_an_error_response() {
        let catalog = deer_catalog();
        let associations = AssociationTable::embedded();
        let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 1);

        let response = handle_line(&table, r#"{"op":"guess","session":9,"guess":"deer"}"#);
        assert_eq!(
            response,
            Response::Error {
                error: "Unknown session #9".to_string()
            }
        );
    }

    #[test]
    fn restart_by_session_id() {
        let catalog = deer_catalog();
        let associations = AssociationTable::embedded();
        let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 1);

        let input = r#"{"op":"start","word_length":4}
{"op":"guess","session":1,"guess":"bike"}
{"op":"start","word_length":4,"session":1}
"#;
        let (responses, _) = run(&table, input);
        assert_eq!(responses[0]["session"], 1);
        assert_eq!(responses[1]["attempts_remaining"], 4);
        assert_eq!(responses[2]["type"], "started");
        assert_eq!(responses[2]["session"], 1);
        assert_eq!(responses[2]["attempts_remaining"], 5);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn client_chosen_id_cannot_collide_with_allocated_ones() {
        let catalog = deer_catalog();
        let associations = AssociationTable::embedded();
        let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 1);

        let input = r#"{"op":"start","word_length":4,"session":1}
{"op":"start","word_length":4}
{"op":"guess","session":1,"guess":"bike"}
{"op":"start","word_length":4}
{"op":"status","session":1}
"#;
        let (responses, stats) = run(&table, input);

        assert_eq!(responses[0]["type"], "error");
        assert_eq!(responses[0]["error"], "Unknown session #1");
        assert_eq!(responses[1]["session"], 1);
        assert_eq!(responses[2]["attempts_remaining"], 4);
        assert_eq!(responses[3]["session"], 2);
        assert_eq!(responses[4]["attempts_remaining"], 4);
        assert_eq!(stats.errors, 1);
        assert_eq!(table.len(), 2);
    }
}
