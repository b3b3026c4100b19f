// crates/citymap-core/src/lib.rs

//! # citymap-core
//!
//! An in-memory registry of named geographic points (city, state, latitude,
//! longitude) with a strict text grammar for ingesting records and a small
//! query engine on top:
//!
//! - farthest city in a cardinal direction,
//! - closest city to a coordinate (planar distance on raw degrees),
//! - distinct states in first-occurrence order,
//! - cities of a given state.
//!
//! ```rust
//! use citymap_core::{CityQuery, CityRegistry, Direction};
//!
//! let registry = CityRegistry::sample();
//! assert_eq!(registry.farthest(Direction::North).unwrap(), "Seattle");
//! assert_eq!(registry.cities_in_state("TN").unwrap(), vec!["Nashville", "Memphis"]);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod geo;
pub mod model;
pub mod parser;
pub mod registry;
pub mod search;
pub mod store;
pub mod text;
pub mod validate;

// Re-exports
pub use crate::error::{CityMapError, Result};
pub use crate::geo::{is_valid_coordinate, parse_degrees, Degrees};
pub use crate::model::{CityRecord, Direction};
pub use crate::parser::{format_record, parse, parse_with_report, serialize, ParseReport};
pub use crate::registry::{CityRegistry, RegistryStats, SAMPLE_DATA};
// Export the Query Trait (Crucial for users!)
pub use crate::search::CityQuery;
pub use crate::validate::AddCityRequest;
