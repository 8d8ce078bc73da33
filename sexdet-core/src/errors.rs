use thiserror::Error;

use crate::models::Partition;

#[derive(Error, Debug)]
pub enum SexDetError {
    #[error(
        "Input depth file is empty. Stopping execution.\n\nPlease ensure you are using a bed file compatible with your reference genome coordinates."
    )]
    EmptyInput,

    #[error(
        "No {0} sites were covered in the depth file. Rates cannot be normalised without them.\n\nPlease ensure you are using a bed file compatible with your reference genome coordinates."
    )]
    UncoveredPartition(Partition),

    #[error(
        "Line {line}: found a data line before any sample names. Supply a sample list or a '#' header line."
    )]
    MissingSampleNames { line: usize },

    #[error("Line {line}: expected {expected} depth values (one per sample), found {found}")]
    FieldCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: depth value '{token}' is not a non-negative integer")]
    InvalidDepth { line: usize, token: String },

    #[error("Line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Sample name '{0}' appears more than once")]
    DuplicateSampleName(String),

    #[error("Sample name '{0}' is reserved for output metadata")]
    ReservedSampleName(String),

    #[error("No sample names were provided")]
    NoSamples,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SexDetError>;
