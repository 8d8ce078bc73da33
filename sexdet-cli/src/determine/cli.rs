use clap::{Arg, ArgAction, Command, arg};

use crate::consts;

pub use sexdet_io::consts::DEFAULT_JSON_FILE;

pub const INPUT_ARG: &str = "Input";
pub const SAMPLE_LIST_ARG: &str = "SampleList";
pub const VERSION_ARG: &str = "version";
pub const OUTPUT_ARG: &str = "output";
pub const JSON_ARG: &str = "json";
pub const NO_JSON_ARG: &str = "no-json";
pub const PROGRESS_ARG: &str = "progress";
pub const VERBOSE_ARG: &str = "verbose";

pub fn create_sexdeterrmine_cli() -> Command {
    Command::new(consts::PKG_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .disable_version_flag(true)
        .about("Calculate the relative X- and Y-chromosome coverage of data, as well as the associated error bars for each.")
        .arg(
            arg!(-I --Input <FILE>)
                .visible_alias("input")
                .required(false)
                .help("The input samtools depth file (plain or .gz). Omit to read from stdin."),
        )
        .arg(
            arg!(-f --SampleList <FILE>)
                .visible_alias("sample-list")
                .required(false)
                .help("A list of samples/bams that were in the depth file. One per line. Should be in the order of the samtools depth output."),
        )
        .arg(
            arg!(-v --version)
                .action(ArgAction::SetTrue)
                .help("Print the version of the tool and exit."),
        )
        .arg(
            arg!(-o --output <FILE>)
                .required(false)
                .help("Write the result table to this file instead of stdout."),
        )
        .arg(
            Arg::new(JSON_ARG)
                .long(JSON_ARG)
                .value_name("FILE")
                .default_value(DEFAULT_JSON_FILE)
                .help("Path of the JSON report."),
        )
        .arg(
            Arg::new(NO_JSON_ARG)
                .long(NO_JSON_ARG)
                .action(ArgAction::SetTrue)
                .conflicts_with(JSON_ARG)
                .help("Do not write the JSON report."),
        )
        .arg(
            arg!(--progress)
                .action(ArgAction::SetTrue)
                .help("Show a spinner on stderr while reading the depth file."),
        )
        .arg(
            arg!(--verbose)
                .action(ArgAction::SetTrue)
                .help("Log progress information to stderr. RUST_LOG overrides this."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_cli_is_valid() {
        create_sexdeterrmine_cli().debug_assert();
    }

    #[rstest]
    fn test_defaults() {
        let matches = create_sexdeterrmine_cli()
            .try_get_matches_from(["sexdeterrmine"])
            .unwrap();

        assert!(matches.get_one::<String>(INPUT_ARG).is_none());
        assert!(matches.get_one::<String>(SAMPLE_LIST_ARG).is_none());
        assert_eq!(
            matches.get_one::<String>(JSON_ARG).map(|s| s.as_str()),
            Some(DEFAULT_JSON_FILE)
        );
        assert!(!matches.get_flag(VERSION_ARG));
        assert!(!matches.get_flag(NO_JSON_ARG));
    }

    #[rstest]
    #[case(&["sexdeterrmine", "-I", "depth.txt", "-f", "samples.txt"])]
    #[case(&["sexdeterrmine", "--Input", "depth.txt", "--SampleList", "samples.txt"])]
    #[case(&["sexdeterrmine", "--input", "depth.txt", "--sample-list", "samples.txt"])]
    fn test_input_spellings(#[case] argv: &[&str]) {
        let matches = create_sexdeterrmine_cli()
            .try_get_matches_from(argv.iter().copied())
            .unwrap();

        assert_eq!(
            matches.get_one::<String>(INPUT_ARG).map(|s| s.as_str()),
            Some("depth.txt")
        );
        assert_eq!(
            matches.get_one::<String>(SAMPLE_LIST_ARG).map(|s| s.as_str()),
            Some("samples.txt")
        );
    }

    #[rstest]
    fn test_version_flag() {
        let matches = create_sexdeterrmine_cli()
            .try_get_matches_from(["sexdeterrmine", "-v"])
            .unwrap();
        assert!(matches.get_flag(VERSION_ARG));
    }
}
