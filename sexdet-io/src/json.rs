use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use sexdet_rates::{SampleResult, Sex};

use crate::consts::{METADATA_KEY, TOOL_NAME};
use crate::error::Result;

///
/// Run metadata stored under the reserved `Metadata` key.
///
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Metadata {
    pub tool_name: String,
    pub version: String,
}

impl Metadata {
    pub fn new(version: &str) -> Self {
        Metadata {
            tool_name: TOOL_NAME.to_string(),
            version: version.to_string(),
        }
    }
}

/// One sample's entry in the JSON report.
#[derive(Serialize)]
struct SampleRecord<'a> {
    #[serde(rename = "Snps Autosomal")]
    snps_autosomal: u64,
    #[serde(rename = "XSnps")]
    x_snps: u64,
    #[serde(rename = "YSnps")]
    y_snps: u64,
    #[serde(rename = "NR Aut")]
    nr_aut: u64,
    #[serde(rename = "NrX")]
    nr_x: u64,
    #[serde(rename = "NrY")]
    nr_y: u64,
    #[serde(rename = "RateX")]
    rate_x: f64,
    #[serde(rename = "RateY")]
    rate_y: f64,
    #[serde(rename = "RateErrX")]
    rate_err_x: f64,
    #[serde(rename = "RateErrY")]
    rate_err_y: f64,
    #[serde(rename = "Sex")]
    sex: &'a Sex,
}

impl<'a> From<&'a SampleResult> for SampleRecord<'a> {
    fn from(result: &'a SampleResult) -> Self {
        SampleRecord {
            snps_autosomal: result.sites.autosome,
            x_snps: result.sites.x,
            y_snps: result.sites.y,
            nr_aut: result.depths.autosome,
            nr_x: result.depths.x,
            nr_y: result.depths.y,
            rate_x: result.estimate.rate_x,
            rate_y: result.estimate.rate_y,
            rate_err_x: result.estimate.rate_err_x,
            rate_err_y: result.estimate.rate_err_y,
            sex: &result.estimate.sex,
        }
    }
}

///
/// Snapshot of a whole run: the metadata entry first, then one entry per sample,
/// keyed by sample name, in sample order.
///
pub struct JsonReport<'a> {
    pub metadata: Metadata,
    pub results: &'a [SampleResult],
}

impl<'a> JsonReport<'a> {
    pub fn new(metadata: Metadata, results: &'a [SampleResult]) -> Self {
        JsonReport { metadata, results }
    }

    pub fn to_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    ///
    /// Write the report to disk as JSON.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;

        Ok(())
    }
}

impl Serialize for JsonReport<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.results.len() + 1))?;
        map.serialize_entry(METADATA_KEY, &self.metadata)?;
        for result in self.results {
            map.serialize_entry(&result.name, &SampleRecord::from(result))?;
        }
        map.end()
    }
}
