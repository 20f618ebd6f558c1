//! Warehouse floor model (single aisle, racks walked in a fixed route).
//!
//! This crate answers two inverse questions as deterministic, in-memory
//! domain logic (no IO, no storage):
//! - which products sit at these locations, and how far apart are they;
//! - where are these products, in the order a picker walks past them.

pub mod catalog;
pub mod index;
pub mod layout;
pub mod location;
pub mod parse;
pub mod query;

pub use catalog::{Catalog, Product};
pub use index::PathIndex;
pub use layout::{FloorLayout, RackRun, Walk};
pub use location::{LocationCode, PathPosition, Rack};
pub use parse::{parse_location_list, parse_name_list};
pub use query::{LocationMatch, Warehouse};
