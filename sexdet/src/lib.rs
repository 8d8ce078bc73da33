//! # sexdet
//!
//! Estimate the biological sex of sequenced samples from the ratio of X- and
//! Y-chromosome coverage to autosomal coverage.
//!
//! The work happens in two steps: [`depth`] streams a multi-sample depth file into
//! per-partition totals, and [`rates`] turns those totals into coverage rates, error
//! bars and a sex call. [`io`] writes the results out.
//!
//! ```no_run
//! use std::io::BufReader;
//! use std::fs::File;
//!
//! use sexdet::core::models::SampleSource;
//!
//! let reader = BufReader::new(File::open("depth.txt").unwrap());
//! let results = sexdet::determine_sex_from_reader(reader, SampleSource::Header).unwrap();
//!
//! for result in &results {
//!     println!("{}\t{}", result.name, result.estimate.sex);
//! }
//! ```

#[cfg(feature = "core")]
#[doc(inline)]
pub use sexdet_core as core;

#[cfg(feature = "depth")]
#[doc(inline)]
pub use sexdet_depth as depth;

#[cfg(feature = "rates")]
#[doc(inline)]
pub use sexdet_rates as rates;

#[cfg(feature = "io")]
#[doc(inline)]
pub use sexdet_io as io;

#[cfg(feature = "rates")]
pub mod pipeline;

#[cfg(feature = "rates")]
pub use pipeline::determine_sex_from_reader;
