//! Interactive TUI mode
//!
//! A ratatui front end over a [`SessionTable`](crate::engine::SessionTable).

mod app;
mod rendering;

pub use app::{App, GameView, HistoryEntry, Message, MessageStyle, Statistics, run_tui};
