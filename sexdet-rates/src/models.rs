use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use sexdet_core::SexDetError;
use sexdet_core::models::{Partition, PartitionTotals};

/// Sex call for one sample.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
    Undetermined,
}

impl Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
            Sex::Undetermined => "Undetermined",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "female" => Ok(Sex::Female),
            "male" => Ok(Sex::Male),
            "undetermined" => Ok(Sex::Undetermined),
            _ => Err(format!("Invalid sex call: {}", s)),
        }
    }
}

///
/// Coverage of X and Y relative to the autosomes, with first-order standard errors.
///
#[derive(PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RateEstimate {
    pub rate_x: f64,
    pub rate_y: f64,
    pub rate_err_x: f64,
    pub rate_err_y: f64,
    pub sex: Sex,
}

///
/// Global site counts with every partition covered at least once.
///
/// Depth per site divides by each partition's site count, so rates can only be
/// computed from a value of this type.
///
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct CoveredSites(PartitionTotals);

impl CoveredSites {
    pub fn get(&self, partition: Partition) -> u64 {
        self.0[partition]
    }

    pub fn totals(&self) -> &PartitionTotals {
        &self.0
    }
}

impl TryFrom<PartitionTotals> for CoveredSites {
    type Error = SexDetError;

    fn try_from(sites: PartitionTotals) -> Result<Self, SexDetError> {
        if sites.is_empty() {
            return Err(SexDetError::EmptyInput);
        }
        if let Some(partition) = Partition::ALL.into_iter().find(|p| sites[*p] == 0) {
            return Err(SexDetError::UncoveredPartition(partition));
        }
        Ok(CoveredSites(sites))
    }
}

///
/// Everything reported for one sample: the counts it was computed from and the estimate.
///
#[derive(PartialEq, Debug, Clone)]
pub struct SampleResult {
    pub name: String,
    pub sites: PartitionTotals,
    pub depths: PartitionTotals,
    pub estimate: RateEstimate,
}
