//! # Output for sexdeterrmine results.
//!
//! Writes per-sample results as a tab-separated table (one row per sample, plus a
//! header row) and as a single JSON snapshot keyed by sample name, with run metadata
//! under a reserved key.
//!
pub mod consts;
pub mod error;
pub mod json;
pub mod table;

// re-expose core functions
pub use consts::*;
pub use error::*;
pub use json::*;
pub use table::*;
