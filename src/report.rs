use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::Result;

/// Destination for finished report blocks: the console plus an append-only
/// results file. The console writer and the results path are injected so
/// tests can capture output in a buffer and point the file at a scratch
/// directory.
pub struct ReportSink<W> {
    console: W,
    results_path: PathBuf,
}

impl<W: Write> ReportSink<W> {
    pub fn new(console: W, results_path: impl Into<PathBuf>) -> Self {
        Self {
            console,
            results_path: results_path.into(),
        }
    }

    /// Prints `report` and appends the identical block to the results
    /// file, creating it on first use. The append is synced before
    /// returning; earlier blocks are never truncated.
    pub fn write(&mut self, report: &str) -> Result<()> {
        self.console.write_all(report.as_bytes())?;
        self.console.flush()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.results_path)?;
        file.write_all(report.as_bytes())?;
        file.sync_all()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_to_console_and_results_file() {
        let dir = TempDir::new().unwrap();
        let results = dir.path().join("Results.txt");
        let mut sink = ReportSink::new(Vec::new(), &results);

        sink.write("BLOCK\t1\n\n").expect("write report");

        assert_eq!(sink.console, b"BLOCK\t1\n\n");
        assert_eq!(fs::read_to_string(&results).unwrap(), "BLOCK\t1\n\n");
    }

    #[test]
    fn appends_without_truncating_prior_blocks() {
        let dir = TempDir::new().unwrap();
        let results = dir.path().join("Results.txt");

        let mut first = ReportSink::new(Vec::new(), &results);
        first.write("first\n\n").unwrap();
        let mut second = ReportSink::new(Vec::new(), &results);
        second.write("second\n\n").unwrap();

        assert_eq!(
            fs::read_to_string(&results).unwrap(),
            "first\n\nsecond\n\n"
        );
    }
}
