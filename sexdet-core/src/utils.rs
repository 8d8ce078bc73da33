use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

use crate::models::SampleNames;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

/// Get a reader for a depth file, or for stdin when no path (or `-`) is given.
///
/// # Arguments
///
/// - path: optional path to the file to read
///
/// # Returns
///
/// A `BufReader` over the decompressed contents.
pub fn get_dynamic_reader_w_stdin(path: Option<&Path>) -> Result<BufReader<Box<dyn Read>>> {
    match path {
        Some(path) if path != Path::new("-") => get_dynamic_reader(path),
        _ => Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>)),
    }
}

///
/// Read a sample list: one sample name per line, in depth-column order.
/// Surrounding whitespace is trimmed and blank lines are ignored.
///
pub fn read_sample_list<P: AsRef<Path>>(file_path: P) -> Result<SampleNames> {
    let file_path = file_path.as_ref();
    let reader = get_dynamic_reader(file_path)?;

    let mut names: Vec<String> = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "There was an error reading line {} of the sample list",
                index + 1
            )
        })?;
        let name = line.trim();
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }

    let samples = SampleNames::new(names)
        .with_context(|| format!("Invalid sample list: {:?}", file_path))?;

    Ok(samples)
}
