use std::io::BufRead;

use sexdet_core::Result;
use sexdet_core::models::SampleSource;
use sexdet_depth::aggregate_depth;
use sexdet_rates::{SampleResult, estimate_samples};

///
/// Aggregate a depth stream and estimate every sample in it, in sample order.
///
/// # Arguments
/// - reader: the depth stream
/// - source: where sample names come from
///
pub fn determine_sex_from_reader<R: BufRead>(
    reader: R,
    source: SampleSource,
) -> Result<Vec<SampleResult>> {
    let summary = aggregate_depth(reader, source, false)?;
    estimate_samples(&summary)
}
