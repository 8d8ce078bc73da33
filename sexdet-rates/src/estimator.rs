//! Rate and error estimation for a single sample.
//!
//! For every partition `B` with `n[B]` covered sites and `r[B]` summed reads, out of a
//! sample total `T`:
//!
//! - `p[B] = r[B] / T`
//! - `err(r[B]) = sqrt(T * p[B])` (Poisson counting error)
//! - `dp[B] = r[B] / n[B]`, `err(dp[B]) = err(r[B]) / n[B]`
//!
//! and for `B` in {X, Y}, `rate[B] = dp[B] / dp[Aut]` with the delta-method error
//! `sqrt((err(dp[B]) / dp[Aut])^2 + (err(dp[Aut]) * dp[B] / dp[Aut]^2)^2)`.

use log::warn;

use sexdet_core::Result;
use sexdet_core::models::{Partition, PartitionTotals};
use sexdet_depth::DepthSummary;

use crate::consts::*;
use crate::models::{CoveredSites, RateEstimate, SampleResult, Sex};

///
/// Call the sex of a sample from its X and Y rates. First matching rule wins:
///
/// 1. `rate_x >= 0.8` and `rate_y < 0.05` -> Female
/// 2. `0.35 <= rate_x <= 0.65` and `rate_y >= 0.1` -> Male
/// 3. otherwise Undetermined
///
pub fn determine_sex(rate_x: f64, rate_y: f64) -> Sex {
    if rate_x >= FEMALE_MIN_RATE_X && rate_y < FEMALE_MAX_RATE_Y {
        Sex::Female
    } else if (MALE_MIN_RATE_X..=MALE_MAX_RATE_X).contains(&rate_x) && rate_y >= MALE_MIN_RATE_Y
    {
        Sex::Male
    } else {
        Sex::Undetermined
    }
}

/// Mean depth per covered site and its error, for one partition.
struct SiteDepth {
    depth: f64,
    err: f64,
}

fn site_depth(sites: &CoveredSites, reads: &PartitionTotals, partition: Partition) -> SiteDepth {
    let total = reads.total() as f64;
    let n_reads = reads[partition] as f64;
    let n_sites = sites.get(partition) as f64;

    let p = n_reads / total;
    let count_err = (total * p).sqrt();

    SiteDepth {
        depth: n_reads / n_sites,
        err: count_err / n_sites,
    }
}

///
/// Compute X and Y rates, their errors and the sex call for one sample.
///
/// A sample with no reads at all gets zero rates and zero errors.
///
/// # Arguments
/// - sites: global covered-site counts
/// - reads: this sample's summed depth per partition
///
pub fn calc_rates(sites: &CoveredSites, reads: &PartitionTotals) -> RateEstimate {
    if reads.total() == 0 {
        return RateEstimate {
            rate_x: 0.0,
            rate_y: 0.0,
            rate_err_x: 0.0,
            rate_err_y: 0.0,
            sex: determine_sex(0.0, 0.0),
        };
    }

    let aut = site_depth(sites, reads, Partition::Autosome);

    let rate_with_err = |partition: Partition| -> (f64, f64) {
        let dp = site_depth(sites, reads, partition);
        let rate = dp.depth / aut.depth;
        let rate_err = ((dp.err / aut.depth).powi(2)
            + (aut.err * dp.depth / aut.depth.powi(2)).powi(2))
        .sqrt();
        (rate, rate_err)
    };

    let (rate_x, rate_err_x) = rate_with_err(Partition::X);
    let (rate_y, rate_err_y) = rate_with_err(Partition::Y);

    RateEstimate {
        rate_x,
        rate_y,
        rate_err_x,
        rate_err_y,
        sex: determine_sex(rate_x, rate_y),
    }
}

///
/// Estimate every sample of an aggregation run, in sample order.
///
/// Fails before any sample is estimated if a partition has no covered sites.
///
pub fn estimate_samples(summary: &DepthSummary) -> Result<Vec<SampleResult>> {
    let sites = CoveredSites::try_from(summary.sites)?;

    let results = summary
        .samples
        .iter()
        .map(|sample| {
            if sample.depths.autosome == 0 && sample.depths.total() > 0 {
                warn!(
                    "Sample '{}' has no autosomal reads; its rates are not finite",
                    sample.name
                );
            }
            SampleResult {
                name: sample.name.clone(),
                sites: *sites.totals(),
                depths: sample.depths,
                estimate: calc_rates(&sites, &sample.depths),
            }
        })
        .collect();

    Ok(results)
}
