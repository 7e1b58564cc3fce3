//! Terminal output formatting
//!
//! Display utilities for game state, CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_outcome, print_simulation_result, print_snapshot};
