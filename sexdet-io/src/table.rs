use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use sexdet_rates::SampleResult;

use crate::consts::TABLE_HEADER;
use crate::error::Result;

///
/// Format a float in shortest round-trip form, keeping a decimal point on
/// integral values (`2.0`, not `2`). Exponents carry a sign and at least two
/// digits (`1e-05`, `1e+16`).
///
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

pub trait TableWrite {
    ///
    /// Write results as a tab-separated table with a header row.
    ///
    /// # Arguments
    /// - writer: where the table goes (stdout, a file, a buffer)
    fn write_table<W: Write>(&self, writer: W) -> std::io::Result<()>;

    ///
    /// Write the table to disk, creating parent folders as needed.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_table_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl TableWrite for [SampleResult] {
    fn write_table<W: Write>(&self, writer: W) -> std::io::Result<()> {
        let mut writer = BufWriter::new(writer);

        writeln!(writer, "{}", TABLE_HEADER.join("\t"))?;

        for result in self {
            let estimate = &result.estimate;
            writeln!(
                writer,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                result.name,
                result.sites.autosome,
                result.sites.x,
                result.sites.y,
                result.depths.autosome,
                result.depths.x,
                result.depths.y,
                format_float(estimate.rate_x),
                format_float(estimate.rate_y),
                format_float(estimate.rate_err_x),
                format_float(estimate.rate_err_y),
                estimate.sex,
            )?;
        }

        writer.flush()
    }

    fn write_table_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        self.write_table(file)?;
        Ok(())
    }
}
