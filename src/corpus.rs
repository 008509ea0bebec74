//! Frequency-weighted word corpus consumed by the completion core.

use std::collections::HashMap;
use std::collections::hash_map;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{Result, StubError};

/// A mapping from lowercase word to its frequency count.
///
/// The completion functions only ever borrow a corpus immutably, so a single
/// instance can be shared between concurrent readers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    words: HashMap<String, u64>,
}

impl Corpus {
    /// Create a new empty corpus.
    pub fn new() -> Self {
        Corpus::default()
    }

    /// Set the count of a word, replacing any previous count.
    pub fn insert<S: AsRef<str>>(&mut self, word: S, count: u64) {
        self.words.insert(word.as_ref().to_lowercase(), count);
    }

    /// Add `count` to the current count of a word, saturating at `u64::MAX`.
    pub fn add<S: AsRef<str>>(&mut self, word: S, count: u64) {
        let current = self.count(word.as_ref());
        self.insert(word, current.saturating_add(count));
    }

    /// Increment the count of a word by 1.
    pub fn increment(&mut self, word: &str) {
        self.add(word, 1);
    }

    /// Count of a word, 0 when absent.
    pub fn count(&self, word: &str) -> u64 {
        self.words.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Check if a word is a corpus key.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sum of all counts, saturating at `u64::MAX`.
    pub fn total_count(&self) -> u64 {
        self.words
            .values()
            .fold(0u64, |total, &count| total.saturating_add(count))
    }

    /// Iterate over `(word, count)` pairs in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, u64> {
        self.words.iter()
    }

    /// Iterate over the corpus keys in arbitrary order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    /// Build a corpus by counting alphabetic runs in free text.
    pub fn from_text(text: &str) -> Self {
        let mut corpus = Corpus::new();
        for word in text
            .split(|c: char| !c.is_alphabetic())
            .filter(|word| !word.is_empty())
        {
            corpus.increment(word);
        }
        corpus
    }

    /// Load a corpus from a file with one `word count` pair per line.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn load_from_frequency_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let mut corpus = Corpus::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut parts = trimmed.split_whitespace();
            let (Some(word), Some(count), None) = (parts.next(), parts.next(), parts.next())
            else {
                return Err(StubError::corpus(format!(
                    "line {}: expected 'word count', got '{trimmed}'",
                    line_num + 1
                )));
            };
            let count = count.parse::<u64>().map_err(|e| {
                StubError::corpus(format!("line {}: invalid count '{count}': {e}", line_num + 1))
            })?;
            corpus.insert(word, count);
        }

        log::debug!("Loaded {} words from frequency file", corpus.len());
        Ok(corpus)
    }

    /// Load a corpus from a JSON object mapping word to count.
    ///
    /// Keys differing only in case are merged by summing their counts.
    pub fn load_from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let words: HashMap<String, u64> = serde_json::from_reader(reader)?;
        let mut corpus = Corpus::new();
        for (word, count) in words {
            corpus.add(word, count);
        }
        log::debug!("Loaded {} words from JSON file", corpus.len());
        Ok(corpus)
    }

    /// Load a corpus, choosing the format by file extension (`.json` or text).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::load_from_json_file(path),
            _ => Self::load_from_frequency_file(path),
        }
    }

    /// Save the corpus as `word count` lines, most frequent first.
    pub fn save_to_frequency_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        let mut entries: Vec<(&String, &u64)> = self.words.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        for (word, count) in entries {
            writeln!(file, "{word} {count}")?;
        }

        Ok(())
    }

    /// The `limit` most frequent words, ties in word order.
    pub fn most_frequent(&self, limit: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .words
            .iter()
            .map(|(word, count)| (word.clone(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(limit);
        entries
    }

    /// Remove words whose count is below `min_count`.
    pub fn prune_below(&mut self, min_count: u64) {
        self.words.retain(|_, count| *count >= min_count);
    }
}

impl FromIterator<(String, u64)> for Corpus {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        for (word, count) in iter {
            corpus.insert(word, count);
        }
        corpus
    }
}

impl<'a> FromIterator<(&'a str, u64)> for Corpus {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(word, count)| (word.to_string(), count))
            .collect()
    }
}
