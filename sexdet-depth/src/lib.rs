//! # Depth aggregation
//!
//! Streams a multi-sample depth file (`samtools depth -a -H` style) one line at a
//! time and keeps, per partition, the number of covered sites plus each sample's
//! summed depth. Memory grows with the number of samples, never with the input.
//!
pub mod aggregator;
pub mod consts;
pub mod summary;

// re-exports
pub use aggregator::*;
pub use summary::*;
