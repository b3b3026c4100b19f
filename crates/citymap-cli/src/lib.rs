//! citymap-cli
//! ===========
//!
//! Command-line interface for the `citymap-core` city registry.
//!
//! This crate primarily provides a binary (`citymap`). The library target
//! only exists so that docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! citymap --help
//! citymap farthest north
//! citymap closest 33 -132.32
//! citymap --store cities.txt add "Winston-Salem" NC 36.1 -80.24
//! ```
//!
//! For programmatic access use the [`citymap_core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
