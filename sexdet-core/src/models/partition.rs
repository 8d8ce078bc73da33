use std::fmt::{self, Display};

///
/// The three genomic bins every covered site is assigned to.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Partition {
    Autosome,
    X,
    Y,
}

impl Partition {
    /// All partitions, in output order.
    pub const ALL: [Partition; 3] = [Partition::Autosome, Partition::X, Partition::Y];

    ///
    /// Assign a chromosome name to a partition.
    ///
    /// A single leading `chr` is stripped (case-sensitive). What remains must be exactly
    /// `X` or `Y` to land in a sex-chromosome partition; everything else is autosomal.
    ///
    pub fn from_chrom(chrom: &str) -> Partition {
        match chrom.strip_prefix("chr").unwrap_or(chrom) {
            "X" => Partition::X,
            "Y" => Partition::Y,
            _ => Partition::Autosome,
        }
    }

    /// Short label used in column names: `Aut`, `X` or `Y`.
    pub fn label(&self) -> &'static str {
        match self {
            Partition::Autosome => "Aut",
            Partition::X => "X",
            Partition::Y => "Y",
        }
    }
}

impl Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Partition::Autosome => "autosomal",
            Partition::X => "X-chromosome",
            Partition::Y => "Y-chromosome",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("X", Partition::X)]
    #[case("chrX", Partition::X)]
    #[case("Y", Partition::Y)]
    #[case("chrY", Partition::Y)]
    #[case("7", Partition::Autosome)]
    #[case("chr7", Partition::Autosome)]
    #[case("chrM", Partition::Autosome)]
    #[case("MT", Partition::Autosome)]
    fn test_from_chrom(#[case] chrom: &str, #[case] expected: Partition) {
        assert_eq!(Partition::from_chrom(chrom), expected);
    }

    #[rstest]
    #[case("chrx")]
    #[case("ChrX")]
    #[case("CHRY")]
    #[case("chrchrX")]
    #[case("Xp11")]
    #[case("chrY_random")]
    fn test_from_chrom_requires_exact_match(#[case] chrom: &str) {
        assert_eq!(Partition::from_chrom(chrom), Partition::Autosome);
    }

    #[rstest]
    fn test_labels() {
        let labels: Vec<&str> = Partition::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["Aut", "X", "Y"]);
    }
}
