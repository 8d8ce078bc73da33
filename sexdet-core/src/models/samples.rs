use std::collections::HashSet;
use std::ops::Index;

use crate::errors::{Result, SexDetError};

/// Key used for run metadata in the JSON output; it can never name a sample.
pub const RESERVED_SAMPLE_NAME: &str = "Metadata";

///
/// Ordered list of sample names. Position `i` in the list is the sample whose depth
/// sits in column `i + 2` of every data line.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SampleNames {
    names: Vec<String>,
}

impl SampleNames {
    ///
    /// Validate and wrap an ordered list of names. Names must be unique, non-empty as a
    /// list, and must not collide with the metadata key of the JSON output.
    ///
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            return Err(SexDetError::NoSamples);
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(names.len());
        for name in &names {
            if name == RESERVED_SAMPLE_NAME {
                return Err(SexDetError::ReservedSampleName(name.clone()));
            }
            if !seen.insert(name.as_str()) {
                return Err(SexDetError::DuplicateSampleName(name.clone()));
            }
        }

        Ok(SampleNames { names })
    }

    ///
    /// Take sample names from a header line: every token after the first two columns
    /// (chromosome and position).
    ///
    pub fn from_header_line(line: &str) -> Result<Self> {
        let names = line
            .split_whitespace()
            .skip(2)
            .map(|s| s.to_string())
            .collect();
        SampleNames::new(names)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.names
    }
}

impl Index<usize> for SampleNames {
    type Output = String;

    fn index(&self, index: usize) -> &String {
        &self.names[index]
    }
}

impl<'a> IntoIterator for &'a SampleNames {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

///
/// Where sample identity comes from. Decided once, before the depth stream is read.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum SampleSource {
    /// Names supplied out of band; every comment line in the stream is skipped.
    Explicit(SampleNames),
    /// Names taken from the first comment line of the stream.
    Header,
}

impl From<Option<SampleNames>> for SampleSource {
    fn from(names: Option<SampleNames>) -> Self {
        match names {
            Some(names) => SampleSource::Explicit(names),
            None => SampleSource::Header,
        }
    }
}
