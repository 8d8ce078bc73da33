/// Tool name recorded in the JSON metadata.
pub const TOOL_NAME: &str = "Sex.DetERRmine";

/// JSON report written to the working directory unless another path is given.
pub const DEFAULT_JSON_FILE: &str = "sexdeterrmine.json";

/// Key of the metadata entry in the JSON report.
pub const METADATA_KEY: &str = sexdet_core::models::samples::RESERVED_SAMPLE_NAME;

/// Column names of the result table, in output order.
pub const TABLE_HEADER: [&str; 12] = [
    "#Sample",
    "#SnpsAut",
    "#SNPsX",
    "#SnpsY",
    "NrAut",
    "NrX",
    "NrY",
    "x-rate",
    "y-rate",
    "Err(x-rate)",
    "Err(y-rate)",
    "Sex",
];
