use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::reader;
use crate::report::ReportSink;

/// Results file appended to in the working directory.
pub const RESULTS_FILE: &str = "ConvertionResults.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub number: i64,
    pub binary: String,
    pub hexadecimal: String,
}

/// Sign-magnitude binary rendering; zero is `"0"`.
pub fn to_binary(number: i64) -> String {
    let magnitude = number.unsigned_abs();
    if number < 0 {
        format!("-{magnitude:b}")
    } else {
        format!("{magnitude:b}")
    }
}

/// Sign-magnitude hexadecimal rendering with uppercase digits; zero is
/// `"0"`.
pub fn to_hexadecimal(number: i64) -> String {
    let magnitude = number.unsigned_abs();
    if number < 0 {
        format!("-{magnitude:X}")
    } else {
        format!("{magnitude:X}")
    }
}

/// Converts every number, preserving input order.
pub fn convert_all(numbers: &[i64]) -> Vec<Conversion> {
    numbers
        .iter()
        .map(|&number| Conversion {
            number,
            binary: to_binary(number),
            hexadecimal: to_hexadecimal(number),
        })
        .collect()
}

pub fn format_report(path: &Path, conversions: &[Conversion], elapsed: Duration) -> String {
    let mut report = String::from("NUMBER\tBIN\tHEX\n");
    for conversion in conversions {
        report.push_str(&format!(
            "{}\t{}\t{}\n",
            conversion.number, conversion.binary, conversion.hexadecimal
        ));
    }
    report.push_str(&format!(
        "File: {}\nTime Elapsed: {:.6} seconds\n\n",
        path.display(),
        elapsed.as_secs_f64(),
    ));
    report
}

/// Runs the conversion pipeline: read and validate lines, convert, format,
/// then emit through `sink`.
pub fn run<W, S>(path: &Path, console: &mut W, sink: &mut ReportSink<S>) -> Result<()>
where
    W: Write,
    S: Write,
{
    let started = Instant::now();
    let numbers = reader::read_integers(path, console)?;
    if numbers.is_empty() {
        return Err(Error::NoValidData);
    }
    let conversions = convert_all(&numbers);
    let elapsed = started.elapsed();
    sink.write(&format_report(path, &conversions, elapsed))
}
