pub mod depth_record;
pub mod partition;
pub mod samples;
pub mod totals;

// re-export for cleaner imports
pub use self::depth_record::DepthRecord;
pub use self::partition::Partition;
pub use self::samples::{SampleNames, SampleSource};
pub use self::totals::PartitionTotals;
