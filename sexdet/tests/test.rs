use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::PathBuf;

use rstest::*;

use sexdet::core::SexDetError;
use sexdet::core::models::{PartitionTotals, SampleSource};
use sexdet::core::utils::{get_dynamic_reader, read_sample_list};
use sexdet::depth::aggregate_depth;
use sexdet::determine_sex_from_reader;
use sexdet::io::{JsonReport, Metadata, TableWrite};
use sexdet::rates::{Sex, estimate_samples};

#[fixture]
fn path_to_data() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("tests/data")
}

mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[rstest]
    fn test_end_to_end_matches_expected_table(path_to_data: PathBuf) {
        let reader = get_dynamic_reader(&path_to_data.join("depth_with_header.txt")).unwrap();
        let results = determine_sex_from_reader(reader, SampleSource::Header).unwrap();

        let mut buffer: Vec<u8> = Vec::new();
        results.write_table(&mut buffer).unwrap();

        let expected = std::fs::read_to_string(path_to_data.join("expected_output.tsv")).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), expected);
    }

    #[rstest]
    fn test_gzipped_input_matches_plain(path_to_data: PathBuf) {
        let plain = get_dynamic_reader(&path_to_data.join("depth_with_header.txt")).unwrap();
        let gzipped = get_dynamic_reader(&path_to_data.join("depth_with_header.txt.gz")).unwrap();

        let plain = determine_sex_from_reader(plain, SampleSource::Header).unwrap();
        let gzipped = determine_sex_from_reader(gzipped, SampleSource::Header).unwrap();
        assert_eq!(plain, gzipped);
    }

    #[rstest]
    fn test_sample_list_and_header_agree(path_to_data: PathBuf) {
        let samples = read_sample_list(path_to_data.join("samples.txt")).unwrap();

        let with_list = get_dynamic_reader(&path_to_data.join("depth_no_header.txt")).unwrap();
        let with_header = get_dynamic_reader(&path_to_data.join("depth_with_header.txt")).unwrap();

        let from_list =
            determine_sex_from_reader(with_list, SampleSource::Explicit(samples)).unwrap();
        let from_header = determine_sex_from_reader(with_header, SampleSource::Header).unwrap();
        assert_eq!(from_list, from_header);

        let calls: Vec<Sex> = from_list.iter().map(|r| r.estimate.sex).collect();
        assert_eq!(calls, vec![Sex::Female, Sex::Male, Sex::Undetermined]);
    }

    #[rstest]
    fn test_header_only_is_empty_input(path_to_data: PathBuf) {
        let reader = get_dynamic_reader(&path_to_data.join("header_only.txt")).unwrap();
        let err = determine_sex_from_reader(reader, SampleSource::Header).unwrap_err();

        assert!(matches!(err, SexDetError::EmptyInput));
        assert!(err.to_string().contains("compatible with your reference genome"));
    }

    #[rstest]
    fn test_no_header_and_no_list_fails(path_to_data: PathBuf) {
        let reader = get_dynamic_reader(&path_to_data.join("depth_no_header.txt")).unwrap();
        let err = determine_sex_from_reader(reader, SampleSource::Header).unwrap_err();
        assert!(matches!(err, SexDetError::MissingSampleNames { line: 1 }));
    }

    #[rstest]
    fn test_pipeline_is_deterministic(path_to_data: PathBuf) {
        let run = || {
            let file = File::open(path_to_data.join("depth_with_header.txt")).unwrap();
            determine_sex_from_reader(BufReader::new(file), SampleSource::Header).unwrap()
        };

        let first = run();
        let second = run();
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.estimate.rate_x.to_bits(), b.estimate.rate_x.to_bits());
            assert_eq!(a.estimate.rate_y.to_bits(), b.estimate.rate_y.to_bits());
            assert_eq!(a.estimate.rate_err_x.to_bits(), b.estimate.rate_err_x.to_bits());
            assert_eq!(a.estimate.rate_err_y.to_bits(), b.estimate.rate_err_y.to_bits());
        }
    }

    #[rstest]
    fn test_summary_counts(path_to_data: PathBuf) {
        let reader = get_dynamic_reader(&path_to_data.join("depth_with_header.txt")).unwrap();
        let summary = aggregate_depth(reader, SampleSource::Header, false).unwrap();

        assert_eq!(summary.sites, PartitionTotals::new(10, 5, 5));
        assert_eq!(
            summary.get("male1").unwrap().depths,
            PartitionTotals::new(100, 25, 25)
        );

        let results = estimate_samples(&summary).unwrap();
        assert_eq!(results.len(), 3);
    }

    #[rstest]
    fn test_json_report_round_trip(path_to_data: PathBuf) {
        let reader = get_dynamic_reader(&path_to_data.join("depth_with_header.txt")).unwrap();
        let results = determine_sex_from_reader(reader, SampleSource::Header).unwrap();

        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("sexdeterrmine.json");
        JsonReport::new(Metadata::new("1.1.3"), &results)
            .write_json(&path)
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["female1"]["Sex"], "Female");
        assert_eq!(value["female1"]["RateErrX"], 0.17320508075688773);
        assert_eq!(value["male1"]["NrY"], 25);
        assert_eq!(value["empty1"]["RateX"], 0.0);
    }

    #[rstest]
    fn test_uncovered_y_is_reported() {
        let input = "#CHROM\tPOS\ta\nchr1\t1\t5\nchrX\t1\t2\n";
        let err = determine_sex_from_reader(Cursor::new(input), SampleSource::Header).unwrap_err();
        assert!(matches!(err, SexDetError::UncoveredPartition(_)));
    }
}
