//! Sex estimation from aggregated read depth.
//!
//! Converts per-partition site counts and summed depths into X and Y coverage rates
//! relative to the autosomes, propagates Poisson counting error through the ratio,
//! and calls each sample Female, Male or Undetermined.
//!
//! # Example
//!
//! ```
//! use sexdet_core::models::PartitionTotals;
//! use sexdet_rates::{CoveredSites, Sex, calc_rates};
//!
//! let sites = CoveredSites::try_from(PartitionTotals::new(1000, 100, 50)).unwrap();
//! let estimate = calc_rates(&sites, &PartitionTotals::new(1000, 50, 25));
//!
//! assert_eq!(estimate.sex, Sex::Male);
//! ```

pub mod consts;
pub mod estimator;
pub mod models;

// re-exports
pub use estimator::{calc_rates, determine_sex, estimate_samples};
pub use models::{CoveredSites, RateEstimate, SampleResult, Sex};
