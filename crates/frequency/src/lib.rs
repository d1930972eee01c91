//! Word frequency counting on top of [`order::OrderedMap`].
//!
//! Splits text on whitespace and tallies every word that has at least a
//! given number of characters. Modelled after the `FrequencyCounter`
//! client of *Algorithms, 4th Edition*.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{debug, trace};
use order::OrderedMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrequencyError {
    #[error("failed to open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result of counting the words of one input.
#[derive(Debug, Default)]
pub struct Tally {
    /// Every word read, regardless of its length.
    pub total: u64,
    /// Words that met the minimum length and were tallied.
    pub counted: u64,
    pub words: OrderedMap<String, u64>,
}

impl Tally {
    /// Number of distinct tallied words.
    pub fn distinct(&self) -> usize {
        self.words.len()
    }

    /// Word with the highest count; ties go to the smallest word.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        let mut best: Option<(&str, u64)> = None;
        for (word, &count) in &self.words {
            if best.is_none_or(|(_, c)| count > c) {
                best = Some((word.as_str(), count));
            }
        }
        best
    }

    /// The `n` most frequent words, highest count first, ties in ascending
    /// word order.
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        let mut all: Vec<(&str, u64)> = self
            .words
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        all.sort_by(|a, b| b.1.cmp(&a.1));
        all.truncate(n);
        all
    }

    fn add(&mut self, word: &str) {
        match self.words.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.words.put(word.to_string(), 1);
            }
        }
        self.counted += 1;
    }
}

/// Count the whitespace-separated words of `reader`, tallying those with at
/// least `min_len` characters.
///
/// Input is decoded line by line; invalid UTF-8 sequences become
/// `U+FFFD` and count as one character each.
pub fn count_words<R: BufRead>(reader: R, min_len: usize) -> Result<Tally, FrequencyError> {
    let mut tally = Tally::default();
    for line in reader.split(b'\n') {
        let line = line?;
        let line = String::from_utf8_lossy(&line);
        for word in line.split_whitespace() {
            tally.total += 1;
            if word.chars().count() < min_len {
                trace!("skipping short word {word:?}");
                continue;
            }
            tally.add(word);
        }
    }
    debug!(
        "read {} words, tallied {} ({} distinct)",
        tally.total,
        tally.counted,
        tally.distinct()
    );
    Ok(tally)
}

pub fn count_file(path: &Path, min_len: usize) -> Result<Tally, FrequencyError> {
    debug!("counting words in {}", path.display());
    let file = File::open(path).map_err(|source| FrequencyError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    count_words(BufReader::new(file), min_len)
}

/// Write the `top` most frequent words, one `<word> <count>` per line,
/// followed by a summary line.
pub fn write_report<W: Write>(tally: &Tally, top: usize, w: &mut W) -> io::Result<()> {
    for (word, count) in tally.top(top) {
        writeln!(w, "{word} {count}")?;
    }
    writeln!(w, "distinct = {}, words = {}", tally.distinct(), tally.counted)
}
