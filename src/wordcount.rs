use std::collections::BTreeMap;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::reader;
use crate::report::ReportSink;

/// Results file appended to in the working directory.
pub const RESULTS_FILE: &str = "WordCountResults.txt";

/// Case-sensitive word counts. Iteration order is code-point
/// lexicographic, which is the order the report requires.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordFrequencies {
    counts: BTreeMap<String, u64>,
    total: u64,
}

impl WordFrequencies {
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }
}

/// Counts exact-match occurrences of every word.
pub fn frequencies(words: &[String]) -> WordFrequencies {
    let mut counts = BTreeMap::new();
    for word in words {
        *counts.entry(word.clone()).or_insert(0) += 1;
    }
    WordFrequencies {
        counts,
        total: words.len() as u64,
    }
}

pub fn format_report(path: &Path, frequencies: &WordFrequencies, elapsed: Duration) -> String {
    let mut report = String::from("WORD\tFREQUENCY\n");
    for (word, count) in frequencies.iter() {
        report.push_str(&format!("{word}\t{count}\n"));
    }
    report.push_str(&format!(
        "File: {}\nTotal Words: {}\nDistinct Words: {}\nTime Elapsed: {:.6} seconds\n\n",
        path.display(),
        frequencies.total(),
        frequencies.distinct(),
        elapsed.as_secs_f64(),
    ));
    report
}

/// Runs the word-count pipeline: read lines into words, count, format,
/// then emit through `sink`.
pub fn run<S: std::io::Write>(path: &Path, sink: &mut ReportSink<S>) -> Result<()> {
    let started = Instant::now();
    let words = reader::read_words(path)?;
    if words.is_empty() {
        return Err(Error::NoValidData);
    }
    let frequencies = frequencies(&words);
    let elapsed = started.elapsed();
    sink.write(&format_report(path, &frequencies, elapsed))
}
