//! Session coordination
//!
//! The session table every adapter talks to.

mod table;

pub use table::SessionTable;
