//! Word and word-pair frequency tables loaded from comma-delimited dumps.
//!
//! Vocabulary rows are `word,count`; bigram rows are `word1,word2,count`.
//! Rows below the caller's minimum count are dropped at load time. Blank
//! lines, `#` comments, rows of the wrong arity and rows whose count does
//! not parse are skipped.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;
use tracing::debug;

use crate::{Error, Result};

/// word -> frequency prior.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: AHashMap<String, u64>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self {
            words: AHashMap::new(),
        }
    }

    /// Load a `word,count` table keeping rows with `count >= min_freq`.
    pub fn load_csv<P: AsRef<Path>>(path: P, min_freq: u64) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_table(path)?;
        let mut vocab = Self::new();
        let mut skipped = 0usize;

        for line in reader.lines() {
            let line = line?;
            match parse_row::<2>(&line) {
                Some(([word, _], count)) => {
                    if count >= min_freq {
                        vocab.insert(word, count);
                    }
                }
                None => {
                    if !is_ignorable(&line) {
                        skipped += 1;
                    }
                }
            }
        }

        debug!(
            path = %path.display(),
            words = vocab.len(),
            skipped,
            "loaded vocabulary table"
        );
        Ok(vocab)
    }

    /// Insert or overwrite a word's frequency.
    pub fn insert(&mut self, word: impl Into<String>, freq: u64) {
        self.words.insert(word.into(), freq);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Frequency if the word is known.
    pub fn frequency(&self, word: &str) -> Option<u64> {
        self.words.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate `(word, frequency)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.words.iter().map(|(w, &f)| (w.as_str(), f))
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut vocab = Self::new();
        for (w, f) in iter {
            vocab.insert(w, f);
        }
        vocab
    }
}

/// (previous word, word) -> co-occurrence count.
#[derive(Debug, Clone, Default)]
pub struct BigramTable {
    pairs: AHashMap<String, AHashMap<String, u64>>,
}

impl BigramTable {
    pub fn new() -> Self {
        Self {
            pairs: AHashMap::new(),
        }
    }

    /// Load a `word1,word2,count` table keeping rows with `count >= min_freq`.
    pub fn load_csv<P: AsRef<Path>>(path: P, min_freq: u64) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_table(path)?;
        let mut table = Self::new();
        let mut kept = 0usize;
        let mut skipped = 0usize;

        for line in reader.lines() {
            let line = line?;
            match parse_row::<3>(&line) {
                Some(([w1, w2, _], count)) => {
                    if count >= min_freq {
                        table.insert(w1, w2, count);
                        kept += 1;
                    }
                }
                None => {
                    if !is_ignorable(&line) {
                        skipped += 1;
                    }
                }
            }
        }

        debug!(path = %path.display(), pairs = kept, skipped, "loaded bigram table");
        Ok(table)
    }

    pub fn insert(&mut self, w1: impl Into<String>, w2: impl Into<String>, count: u64) {
        self.pairs
            .entry(w1.into())
            .or_default()
            .insert(w2.into(), count);
    }

    /// Count of `w2` directly after `w1`, if observed.
    pub fn frequency(&self, w1: &str, w2: &str) -> Option<u64> {
        self.pairs.get(w1).and_then(|m| m.get(w2)).copied()
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.pairs.values().map(|m| m.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn open_table(path: &Path) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(f) => Ok(BufReader::new(f)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(Error::TableNotFound(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}

fn is_ignorable(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// Parse `N` comma-separated fields where the last one is a count.
///
/// Returns the first `N - 1` fields (the last slot of the array holds an
/// empty string) plus the parsed count.
fn parse_row<const N: usize>(line: &str) -> Option<([String; N], u64)> {
    if is_ignorable(line) {
        return None;
    }
    let parts: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if parts.len() != N {
        return None;
    }
    let count = parts[N - 1].parse::<u64>().ok()?;
    let mut fields: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, part) in fields.iter_mut().zip(&parts[..N - 1]) {
        if part.is_empty() {
            return None;
        }
        *slot = part.to_lowercase();
    }
    Some((fields, count))
}
