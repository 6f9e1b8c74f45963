//! Narrowing the dictionary down to words consistent with every round.

use crate::dictionary::Dictionary;
use crate::history::History;
use crate::word::Word;
use rayon::prelude::*;

/// Words still possible as the answer, in dictionary order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
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

    pub fn into_vec(self) -> Vec<Word> {
        self.words
    }
}

impl From<Vec<Word>> for CandidateSet {
    fn from(words: Vec<Word>) -> Self {
        Self { words }
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// True when `word`, taken as the answer, reproduces every recorded round.
pub fn is_consistent(word: &Word, history: &History) -> bool {
    history.iter().all(|entry| entry.admits(word))
}

/// Every dictionary word consistent with `history`. An empty history keeps
/// the whole dictionary.
pub fn filter(dictionary: &Dictionary, history: &History) -> CandidateSet {
    if history.is_empty() {
        return CandidateSet::from(dictionary.words().to_vec());
    }

    let words: Vec<Word> = dictionary
        .words()
        .par_iter()
        .filter(|word| is_consistent(word, history))
        .copied()
        .collect();

    log::debug!(
        "{} of {} words consistent with {} rounds",
        words.len(),
        dictionary.len(),
        history.len()
    );
    CandidateSet::from(words)
}
