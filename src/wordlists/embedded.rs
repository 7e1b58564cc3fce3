//! Embedded catalog data
//!
//! Catalog and associations compiled into the binary at build time.

// Include generated tables from build script
include!(concat!(env!("OUT_DIR"), "/catalog.rs"));
include!(concat!(env!("OUT_DIR"), "/associations.rs"));
