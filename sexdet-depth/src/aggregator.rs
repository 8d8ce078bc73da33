use std::io::BufRead;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use sexdet_core::models::depth_record::is_comment_line;
use sexdet_core::models::{DepthRecord, PartitionTotals, SampleNames, SampleSource};
use sexdet_core::{Result, SexDetError};

use crate::consts::PROGRESS_UPDATE_INTERVAL;
use crate::summary::{DepthSummary, SampleAggregate};

///
/// Running totals over a depth stream.
///
/// Owns every counter for the duration of a run. Lines must be fed in stream order:
/// depth column `i` of each line is added to sample `i` only, so each sample's sum
/// only ever receives its own values, in order.
///
#[derive(Debug)]
pub struct DepthAggregator {
    samples: Option<SampleNames>,
    sites: PartitionTotals,
    depths: Vec<PartitionTotals>,
    line_number: usize,
}

impl DepthAggregator {
    ///
    /// Create an aggregator for the given sample source.
    ///
    /// With [`SampleSource::Explicit`] the slots exist up front and every comment line
    /// is skipped. With [`SampleSource::Header`] the slots are created from the first
    /// comment line; later comment lines are skipped the same way.
    ///
    pub fn new(source: SampleSource) -> Self {
        let samples = match source {
            SampleSource::Explicit(names) => Some(names),
            SampleSource::Header => None,
        };
        let depths = samples
            .as_ref()
            .map(|names| vec![PartitionTotals::default(); names.len()])
            .unwrap_or_default();

        DepthAggregator {
            samples,
            sites: PartitionTotals::default(),
            depths,
            line_number: 0,
        }
    }

    /// Sample names, once known.
    pub fn samples(&self) -> Option<&SampleNames> {
        self.samples.as_ref()
    }

    /// Global site counters seen so far.
    pub fn sites(&self) -> &PartitionTotals {
        &self.sites
    }

    /// Number of lines consumed so far, including comment and blank lines.
    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    ///
    /// Consume one line of the depth stream.
    ///
    /// Data lines bump the site counter of their partition once, and add each
    /// sample's depth to that sample's counter for the same partition.
    ///
    pub fn consume_line(&mut self, line: &str) -> Result<()> {
        self.line_number += 1;

        if line.trim().is_empty() {
            return Ok(());
        }

        if is_comment_line(line) {
            if self.samples.is_none() {
                let names = SampleNames::from_header_line(line)?;
                debug!(
                    "Read {} sample names from header on line {}",
                    names.len(),
                    self.line_number
                );
                self.depths = vec![PartitionTotals::default(); names.len()];
                self.samples = Some(names);
            }
            return Ok(());
        }

        let samples = self
            .samples
            .as_ref()
            .ok_or(SexDetError::MissingSampleNames {
                line: self.line_number,
            })?;

        let record = DepthRecord::parse(line, self.line_number, samples.len())?;
        let partition = record.partition();

        self.sites.add(partition, 1);
        for (totals, depth) in self.depths.iter_mut().zip(record.depths) {
            totals.add(partition, depth);
        }

        Ok(())
    }

    ///
    /// Finalise the run.
    ///
    /// Fails with [`SexDetError::EmptyInput`] if no data line was seen in any partition.
    ///
    pub fn finish(self) -> Result<DepthSummary> {
        if self.sites.is_empty() {
            return Err(SexDetError::EmptyInput);
        }

        // sites can only be non-zero once sample names are known
        let samples = self.samples.ok_or(SexDetError::NoSamples)?;

        let samples = samples
            .into_inner()
            .into_iter()
            .zip(self.depths)
            .map(|(name, depths)| SampleAggregate { name, depths })
            .collect();

        Ok(DepthSummary {
            sites: self.sites,
            samples,
        })
    }
}

///
/// Aggregate a whole depth stream.
///
/// # Arguments
/// - reader: the depth stream, read line by line
/// - source: where sample names come from
/// - show_progress: draw a spinner on stderr while reading
///
pub fn aggregate_depth<R: BufRead>(
    reader: R,
    source: SampleSource,
    show_progress: bool,
) -> Result<DepthSummary> {
    let spinner = if show_progress {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed}] {msg} ({pos} lines, {per_sec})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["-", "\\", "|", "/"]),
        );
        spinner.set_message("Reading depth file...");
        spinner
    } else {
        ProgressBar::hidden()
    };

    let mut aggregator = DepthAggregator::new(source);

    for line in reader.lines() {
        let line = line?;
        aggregator.consume_line(&line)?;

        let lines_read = aggregator.lines_read() as u64;
        if lines_read % PROGRESS_UPDATE_INTERVAL == 0 {
            spinner.set_position(lines_read);
        }
    }

    spinner.finish_and_clear();

    let summary = aggregator.finish()?;
    info!(
        "Aggregated {} sites ({} autosomal, {} X, {} Y) for {} samples",
        summary.n_sites(),
        summary.sites.autosome,
        summary.sites.x,
        summary.sites.y,
        summary.n_samples()
    );

    Ok(summary)
}
