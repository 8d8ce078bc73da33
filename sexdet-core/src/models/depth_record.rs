use crate::errors::{Result, SexDetError};

use super::partition::Partition;

/// First character of header and comment lines.
pub const COMMENT_MARKER: char = '#';

///
/// Returns true if the first whitespace-separated field of the line starts with the
/// comment marker.
///
pub fn is_comment_line(line: &str) -> bool {
    line.trim_start().starts_with(COMMENT_MARKER)
}

///
/// One data line of a `samtools depth -a` style file:
///
/// | chrom | pos | depth sample 1 | depth sample 2 | ... |
/// |-------|-----|----------------|----------------|-----|
///
/// Borrowed from the line it was parsed from and dropped once counted.
///
#[derive(PartialEq, Debug, Clone)]
pub struct DepthRecord<'a> {
    pub chrom: &'a str,
    pub position: &'a str,
    pub depths: Vec<u64>,
}

impl<'a> DepthRecord<'a> {
    ///
    /// Parse a data line holding exactly one depth value per sample.
    ///
    /// # Arguments
    /// - line: the raw line (must not be a comment line)
    /// - line_number: 1-based line number, used for diagnostics only
    /// - n_samples: number of resolved sample names
    ///
    pub fn parse(line: &'a str, line_number: usize, n_samples: usize) -> Result<Self> {
        let mut fields = line.split_whitespace();

        let chrom = fields.next().ok_or_else(|| SexDetError::MalformedRecord {
            line: line_number,
            reason: "empty data line".to_string(),
        })?;
        let position = fields.next().ok_or_else(|| SexDetError::MalformedRecord {
            line: line_number,
            reason: format!("missing position column after chromosome '{}'", chrom),
        })?;

        let mut depths = Vec::with_capacity(n_samples);
        for token in fields {
            let depth = token
                .parse::<u64>()
                .map_err(|_| SexDetError::InvalidDepth {
                    line: line_number,
                    token: token.to_string(),
                })?;
            depths.push(depth);
        }

        if depths.len() != n_samples {
            return Err(SexDetError::FieldCountMismatch {
                line: line_number,
                expected: n_samples,
                found: depths.len(),
            });
        }

        Ok(DepthRecord {
            chrom,
            position,
            depths,
        })
    }

    pub fn partition(&self) -> Partition {
        Partition::from_chrom(self.chrom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_parse_record() {
        let record = DepthRecord::parse("chrX\t1001\t3\t0\t12", 7, 3).unwrap();

        assert_eq!(record.chrom, "chrX");
        assert_eq!(record.position, "1001");
        assert_eq!(record.depths, vec![3, 0, 12]);
        assert_eq!(record.partition(), Partition::X);
    }

    #[rstest]
    fn test_parse_record_mixed_whitespace() {
        let record = DepthRecord::parse("  7 55   1 2 ", 1, 2).unwrap();
        assert_eq!(record.chrom, "7");
        assert_eq!(record.depths, vec![1, 2]);
        assert_eq!(record.partition(), Partition::Autosome);
    }

    #[rstest]
    #[case("chr1\t10\t1", 2, 1)]
    #[case("chr1\t10\t1\t2\t3", 2, 3)]
    #[case("chr1\t10", 1, 0)]
    fn test_field_count_mismatch(
        #[case] line: &str,
        #[case] n_samples: usize,
        #[case] found_depths: usize,
    ) {
        let err = DepthRecord::parse(line, 42, n_samples).unwrap_err();
        match err {
            SexDetError::FieldCountMismatch {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 42);
                assert_eq!(expected, n_samples);
                assert_eq!(found, found_depths);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    #[case("chr1\t10\tabc")]
    #[case("chr1\t10\t-1")]
    #[case("chr1\t10\t1.5")]
    fn test_invalid_depth(#[case] line: &str) {
        let err = DepthRecord::parse(line, 3, 1).unwrap_err();
        assert!(matches!(err, SexDetError::InvalidDepth { line: 3, .. }));
    }

    #[rstest]
    fn test_missing_position() {
        let err = DepthRecord::parse("chr1", 9, 1).unwrap_err();
        assert!(matches!(err, SexDetError::MalformedRecord { line: 9, .. }));
    }

    #[rstest]
    #[case("#chr\tpos\tA\tB", true)]
    #[case("  #CHROM POS", true)]
    #[case("chr1\t1\t#", false)]
    #[case("chr1\t1\t0", false)]
    fn test_is_comment_line(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_comment_line(line), expected);
    }
}
