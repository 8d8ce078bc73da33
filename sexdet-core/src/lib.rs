//! # Core models for sexdeterrmine.
//!
//! Shared building blocks for the depth aggregation and sex estimation crates: the
//! autosome / X / Y [`models::Partition`], per-partition counters, the depth line
//! parser, sample identity, the error taxonomy and a few reader helpers.
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::{Result, SexDetError};
