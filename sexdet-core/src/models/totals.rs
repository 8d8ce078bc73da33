use std::ops::{Index, IndexMut};

use super::partition::Partition;

///
/// One running counter per partition. Used both for the global number of covered
/// sites and for a single sample's summed depth.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartitionTotals {
    pub autosome: u64,
    pub x: u64,
    pub y: u64,
}

impl PartitionTotals {
    pub fn new(autosome: u64, x: u64, y: u64) -> Self {
        PartitionTotals { autosome, x, y }
    }

    ///
    /// Add `value` to the counter of the given partition.
    ///
    pub fn add(&mut self, partition: Partition, value: u64) {
        self[partition] += value;
    }

    /// Sum over all three partitions.
    pub fn total(&self) -> u64 {
        self.autosome + self.x + self.y
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl Index<Partition> for PartitionTotals {
    type Output = u64;

    fn index(&self, partition: Partition) -> &u64 {
        match partition {
            Partition::Autosome => &self.autosome,
            Partition::X => &self.x,
            Partition::Y => &self.y,
        }
    }
}

impl IndexMut<Partition> for PartitionTotals {
    fn index_mut(&mut self, partition: Partition) -> &mut u64 {
        match partition {
            Partition::Autosome => &mut self.autosome,
            Partition::X => &mut self.x,
            Partition::Y => &mut self.y,
        }
    }
}
