//! The read-only word list the engine works against.

use crate::error::{Error, Result};
use crate::word::Word;
use std::collections::HashSet;
use std::path::Path;

/// Deduplicated words in insertion order. Order only matters for display;
/// filtering and ranking treat it as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Build from already-clean input. The first malformed word is reported
    /// and nothing is built. Repeats are dropped, keeping the first.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = words
            .into_iter()
            .map(|w| Word::parse(w.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::dedup(parsed))
    }

    /// Read a word list, one word per line. Lines are trimmed and
    /// case-folded; anything that is not five ASCII letters is skipped.
    pub fn parse_lenient(text: &str) -> Self {
        let mut skipped = 0usize;
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| match Word::parse(line) {
                Ok(word) => Some(word),
                Err(err) => {
                    log::trace!("skipping dictionary line: {}", err);
                    skipped += 1;
                    None
                }
            })
            .collect::<Vec<_>>();
        if skipped > 0 {
            log::debug!("skipped {} malformed dictionary lines", skipped);
        }
        Self::dedup(words)
    }

    /// [`Dictionary::parse_lenient`] over a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::parse_lenient(&text);
        log::debug!("loaded {} words from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    fn dedup(words: Vec<Word>) -> Self {
        let mut seen = HashSet::with_capacity(words.len());
        let words = words.into_iter().filter(|w| seen.insert(*w)).collect();
        Self { words }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}
