//! # citymap-rs
//!
//! Workspace host for [`citymap_core`] and the `citymap` CLI. Re-exports the
//! core crate so the demos can be run from the workspace root:
//!
//! ```text
//! cargo run --example basic_usage
//! ```

pub use citymap_core::*;
