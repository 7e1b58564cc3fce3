//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::core::{GameError, SessionId};
use crate::engine::SessionTable;
use crate::output::{print_outcome, print_snapshot};
use colored::Colorize;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Start a new game, optionally with a different length
    New(Option<usize>),
    Hint,
    Help,
    Guess(String),
    /// Slash command that could not be understood
    Unknown(String),
}

impl Command {
    /// Parse a line; anything not starting with `/` is a guess
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let Some(rest) = input.strip_prefix('/') else {
            return Self::Guess(input.to_string());
        };

        let mut parts = rest.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("quit" | "q" | "exit"), None) => Self::Quit,
            (Some("hint" | "h"), None) => Self::Hint,
            (Some("help" | "?"), None) => Self::Help,
            (Some("new" | "n"), None) => Self::New(None),
            (Some("new" | "n"), Some(len)) => match len.parse() {
                Ok(len) if parts.next().is_none() => Self::New(Some(len)),
                _ => Self::Unknown(input.to_string()),
            },
            _ => Self::Unknown(input.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(table: &SessionTable, length: usize) -> anyhow::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Guess - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    print_help();

    let mut length = length;
    let mut session = start(table, None, length);

    loop {
        let Some(input) = get_user_input("Your guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match Command::parse(&input) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::Help => print_help(),
            Command::New(requested) => {
                let next = requested.unwrap_or(length);
                if let Some(id) = start(table, session, next) {
                    session = Some(id);
                    length = next;
                }
            }
            Command::Hint => match session.map(|id| table.snapshot(id)) {
                Some(Ok(snapshot)) => print_snapshot(&snapshot),
                Some(Err(err)) => println!("❌ {err}\n"),
                None => println!("No game yet. Type /new to start one.\n"),
            },
            Command::Guess(guess) if guess.is_empty() => {}
            Command::Guess(guess) => {
                let Some(id) = session else {
                    println!("No game yet. Type /new to start one.\n");
                    continue;
                };
                match table.submit_guess(id, &guess) {
                    Ok(outcome) => print_outcome(&outcome),
                    Err(err) => println!("❌ {err}\n"),
                }
            }
            Command::Unknown(text) => {
                println!("❌ Unknown command: {text} (try /help)\n");
            }
        }
    }
}

/// Start a game and print its hint; reports and returns None on failure
fn start(table: &SessionTable, id: Option<SessionId>, length: usize) -> Option<SessionId> {
    match table.start_game(id, length) {
        Ok((id, snapshot)) => {
            println!("{}", format!("🔄 New game {id} started!").bright_cyan());
            print_snapshot(&snapshot);
            Some(id)
        }
        Err(err @ GameError::InvalidLength { .. }) => {
            let lengths = table
                .catalog()
                .supported_lengths()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            println!("❌ {err}. Available lengths: {lengths}\n");
            None
        }
        Err(err) => {
            println!("❌ {err}\n");
            None
        }
    }
}

fn print_help() {
    println!("Guess the secret word from its description, associations and letter hints.");
    println!("Type a word and press Enter to guess.\n");
    println!("Commands: '/new [length]' new game, '/hint' show hints, '/quit' to exit\n");
}

/// Get user input with a prompt; None at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
