use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use sexdet_core::models::SampleSource;
use sexdet_core::utils::{get_dynamic_reader_w_stdin, read_sample_list};
use sexdet_depth::aggregate_depth;
use sexdet_io::{JsonReport, Metadata, TableWrite};
use sexdet_rates::estimate_samples;

use super::cli::*;
use crate::consts::VERSION;

/// Matches items from CLAP args, aggregates the depth stream and writes the results.
pub fn run_sexdeterrmine(matches: &ArgMatches) -> Result<()> {
    if matches.get_flag(VERSION_ARG) {
        eprintln!("{}", VERSION);
        return Ok(());
    }

    let input = matches.get_one::<String>(INPUT_ARG).map(Path::new);
    let output = matches.get_one::<String>(OUTPUT_ARG).map(Path::new);
    let json = match matches.get_flag(NO_JSON_ARG) {
        true => None,
        false => matches.get_one::<String>(JSON_ARG).map(Path::new),
    };
    let show_progress = matches.get_flag(PROGRESS_ARG);

    // resolve sample identity once, before any depth line is read
    let source = match matches.get_one::<String>(SAMPLE_LIST_ARG) {
        Some(path) => {
            let samples = read_sample_list(path)?;
            info!("Read {} sample names from {}", samples.len(), path);
            SampleSource::Explicit(samples)
        }
        None => SampleSource::Header,
    };

    let reader = get_dynamic_reader_w_stdin(input)?;
    let summary = aggregate_depth(reader, source, show_progress)?;
    let results = estimate_samples(&summary)?;

    match output {
        Some(path) => {
            results
                .write_table_file(path)
                .with_context(|| format!("Failed to write result table: {:?}", path))?;
            info!("Result table written to {:?}", path);
        }
        None => {
            results
                .write_table(io::stdout().lock())
                .context("Failed to write result table to stdout")?;
        }
    }

    if let Some(path) = json {
        JsonReport::new(Metadata::new(VERSION), &results)
            .write_json(path)
            .with_context(|| format!("Failed to write JSON report: {:?}", path))?;
        info!("JSON report written to {:?}", path);
    }

    Ok(())
}
