//! Stateless facade over the engine.
//!
//! The advisor owns the dictionary and nothing else. Callers keep their own
//! [`History`] and pass it in on every call; all results are recomputed from
//! scratch.

use crate::dictionary::Dictionary;
use crate::feedback::Feedback;
use crate::filter::{self, CandidateSet};
use crate::history::{History, HistoryEntry};
use crate::ranker::{self, Suggestion};
use crate::selector;
use crate::word::Word;

/// Rounds allowed by the standard game
pub const MAX_ROUNDS: usize = 6;

#[derive(Debug, Clone)]
pub struct Advisor {
    dictionary: Dictionary,
}

impl Advisor {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn candidates(&self, history: &History) -> CandidateSet {
        filter::filter(&self.dictionary, history)
    }

    /// The `k` most informative next guesses
    pub fn suggestions(&self, history: &History, k: usize) -> Vec<Suggestion> {
        Self::rank_candidates(&self.candidates(history), k)
    }

    /// Like [`Advisor::suggestions`], for callers that already hold the
    /// candidate set
    pub fn rank_candidates(candidates: &CandidateSet, k: usize) -> Vec<Suggestion> {
        selector::select(ranker::rank(candidates.words()), k)
    }

    pub fn best_guess(&self, history: &History) -> Option<Suggestion> {
        self.suggestions(history, 1).into_iter().next()
    }

    pub fn most_likely(&self, history: &History) -> Option<Word> {
        selector::most_likely(self.candidates(history).words())
    }

    /// Play against a known `target`, always taking the top suggestion.
    /// Stops on a win, when no candidate remains, or after `max_rounds`.
    pub fn play(&self, target: &Word, max_rounds: usize) -> History {
        let mut history = History::new();

        for _ in 0..max_rounds {
            let best = match self.best_guess(&history) {
                Some(best) => best,
                None => break,
            };

            let feedback = Feedback::classify(&best.word, target);
            log::debug!("guessed {} ({:.3} bits) -> {}", best.word, best.bits, feedback);
            history.push(HistoryEntry::new(best.word, feedback));

            if feedback.is_win() {
                break;
            }
        }

        history
    }
}
