//! Word catalog and hint associations
//!
//! Provides the catalog and association table compiled into the binary, plus
//! a loader for custom catalogs.

mod associations;
mod catalog;
mod embedded;
pub mod loader;

pub use associations::AssociationTable;
pub use catalog::WordCatalog;
pub use embedded::{ASSOCIATIONS, CATALOG, CATALOG_COUNT};
