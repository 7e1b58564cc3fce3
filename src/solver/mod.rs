//! Automated players
//!
//! Used by the simulation command to drive many sessions without a human.

mod engine;
pub mod strategy;

pub use engine::Solver;
pub use strategy::{ConsistentStrategy, RandomStrategy, Strategy, StrategyType};
