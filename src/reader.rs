use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{Error, Result};

// Finite values above this magnitude are rejected together with the
// infinities.
const MAX_MAGNITUDE: f64 = 1.0e308;

fn open(path: &Path) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(Error::FileNotFound {
            path: path.to_path_buf(),
        }),
        Err(err) => Err(err.into()),
    }
}

/// Reads decimal numbers, one per line. Lines that do not parse, and
/// parsed values that are not finite or exceed `MAX_MAGNITUDE`, are
/// skipped with one diagnostic line each on `diag`.
pub fn read_values<W: Write>(path: &Path, diag: &mut W) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for line in open(path)?.lines() {
        let line = line?;
        let line = line.trim();
        match line.parse::<f64>() {
            Ok(value) if !value.is_finite() || value.abs() > MAX_MAGNITUDE => {
                writeln!(
                    diag,
                    "Invalid data due to overflow or large magnitude ignored: {line}"
                )?;
            }
            Ok(value) => values.push(value),
            Err(_) => {
                writeln!(diag, "Invalid data encountered and ignored: {line}")?;
            }
        }
    }
    Ok(values)
}

/// Reads base-10 integers, one per line, skipping lines that do not parse.
pub fn read_integers<W: Write>(path: &Path, diag: &mut W) -> Result<Vec<i64>> {
    let mut numbers = Vec::new();
    for line in open(path)?.lines() {
        let line = line?;
        let line = line.trim();
        match line.parse::<i64>() {
            Ok(number) => numbers.push(number),
            Err(_) => {
                writeln!(diag, "Invalid data encountered and ignored: {line}")?;
            }
        }
    }
    Ok(numbers)
}

/// Splits every line on whitespace. Words are accepted unconditionally,
/// so this variant emits no diagnostics.
pub fn read_words(path: &Path) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for line in open(path)?.lines() {
        let line = line?;
        words.extend(line.split_whitespace().map(str::to_owned));
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_input(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("input.txt");
        fs::write(&path, contents).expect("write input");
        path
    }

    #[test]
    fn reads_valid_numbers_and_skips_the_rest() {
        let dir = TempDir::new().unwrap();
        let path = write_input(&dir, "1.5\nabc\n-2\ninf\n1e309\n3\n");
        let mut diag = Vec::new();

        let values = read_values(&path, &mut diag).expect("read values");

        assert_eq!(values, vec![1.5, -2.0, 3.0]);
        let diag = String::from_utf8(diag).unwrap();
        assert!(diag.contains("Invalid data encountered and ignored: abc"));
        assert!(diag.contains("Invalid data due to overflow or large magnitude ignored: inf"));
        assert!(diag.contains("Invalid data due to overflow or large magnitude ignored: 1e309"));
    }

    #[test]
    fn rejects_nan_values() {
        let dir = TempDir::new().unwrap();
        let path = write_input(&dir, "NaN\n2\n");
        let mut diag = Vec::new();

        let values = read_values(&path, &mut diag).expect("read values");

        assert_eq!(values, vec![2.0]);
        assert!(!diag.is_empty());
    }

    #[test]
    fn reads_integers_in_file_order() {
        let dir = TempDir::new().unwrap();
        let path = write_input(&dir, "10\n-3\nseven\n0\n2.5\n");
        let mut diag = Vec::new();

        let numbers = read_integers(&path, &mut diag).expect("read integers");

        assert_eq!(numbers, vec![10, -3, 0]);
        let diag = String::from_utf8(diag).unwrap();
        assert!(diag.contains("Invalid data encountered and ignored: seven"));
        assert!(diag.contains("Invalid data encountered and ignored: 2.5"));
    }

    #[test]
    fn splits_lines_into_words() {
        let dir = TempDir::new().unwrap();
        let path = write_input(&dir, "the Cat\n\n  sat on\tthe mat\n");

        let words = read_words(&path).expect("read words");

        assert_eq!(words, vec!["the", "Cat", "sat", "on", "the", "mat"]);
    }

    #[test]
    fn missing_file_is_a_distinct_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_values(&path, &mut Vec::new()).unwrap_err();

        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn empty_file_yields_empty_collection() {
        let dir = TempDir::new().unwrap();
        let path = write_input(&dir, "");

        assert!(read_values(&path, &mut Vec::new()).unwrap().is_empty());
        assert!(read_words(&path).unwrap().is_empty());
    }
}
