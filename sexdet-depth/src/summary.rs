use sexdet_core::models::PartitionTotals;

///
/// Summed depth of one sample in each partition.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SampleAggregate {
    pub name: String,
    pub depths: PartitionTotals,
}

///
/// Result of a complete pass over the depth stream.
///
/// Site counts are global: every sample is evaluated at the same positions, so only
/// the summed depths differ between samples. `samples` keeps the depth-column order.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct DepthSummary {
    pub sites: PartitionTotals,
    pub samples: Vec<SampleAggregate>,
}

impl DepthSummary {
    pub fn n_samples(&self) -> usize {
        self.samples.len()
    }

    /// Number of data lines that were counted.
    pub fn n_sites(&self) -> u64 {
        self.sites.total()
    }

    pub fn get(&self, name: &str) -> Option<&SampleAggregate> {
        self.samples.iter().find(|s| s.name == name)
    }
}
