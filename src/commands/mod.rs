//! Command implementations

pub mod serve;
pub mod simple;
pub mod simulate;

pub use serve::{Request, Response, ServeStats, handle_request, run_serve};
pub use simple::run_simple;
pub use simulate::{GameRecord, SimulationConfig, SimulationResult, play_game, run_simulation};
