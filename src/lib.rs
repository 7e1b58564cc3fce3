//! Word Guess
//!
//! A word-guessing game: the player sees a description, a couple of revealed
//! letters and some associated words, and has a fixed number of attempts to
//! name the hidden word. Each wrong guess reports how many letters are in the
//! right place.
//!
//! # Quick Start
//!
//! ```rust
//! use word_guess::core::GameConfig;
//! use word_guess::engine::SessionTable;
//! use word_guess::wordlists::{AssociationTable, WordCatalog};
//!
//! let catalog = WordCatalog::embedded();
//! let associations = AssociationTable::embedded();
//! let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 42);
//!
//! let (session, snapshot) = table.start_game(None, 5).unwrap();
//! println!("{}", snapshot.hint.description_text());
//!
//! let outcome = table.submit_guess(session, "apple").unwrap();
//! println!("{}", outcome.message);
//! ```

// Core domain types
pub mod core;

// Concurrent session table
pub mod engine;

// Automated players
pub mod solver;

// Word catalog and associations
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
