//! Caller-owned record of played rounds.

use crate::error::Result;
use crate::feedback::Feedback;
use crate::word::Word;

/// One accepted round. The feedback is whatever the real game reported;
/// it is taken as ground truth and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoryEntry {
    pub guess: Word,
    pub feedback: Feedback,
}

impl HistoryEntry {
    pub fn new(guess: Word, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// Parse a guess and a `g/y/b` pattern, e.g. `("crane", "gybbb")`
    pub fn parse(guess: &str, feedback: &str) -> Result<Self> {
        Ok(Self {
            guess: Word::parse(guess)?,
            feedback: Feedback::parse(feedback)?,
        })
    }

    /// Would `answer` have produced this round's feedback?
    pub fn admits(&self, answer: &Word) -> bool {
        Feedback::classify(&self.guess, answer) == self.feedback
    }
}

/// Rounds in the order they were played, stored oldest first. It behaves as
/// a stack: [`History::push`] adds the newest round, [`History::undo`] pops
/// it again, and [`History::latest`] peeks at it. [`History::iter`] walks
/// from the oldest round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Remove and return the most recent round
    pub fn undo(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest round first
    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// Has a round already been won?
    pub fn is_solved(&self) -> bool {
        self.entries.iter().any(|e| e.feedback.is_win())
    }
}

impl FromIterator<HistoryEntry> for History {
    fn from_iter<I: IntoIterator<Item = HistoryEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(guess: &str, feedback: &str) -> HistoryEntry {
        HistoryEntry::parse(guess, feedback).unwrap()
    }

    #[test]
    fn undo_removes_most_recent() {
        let mut history = History::new();
        history.push(entry("crane", "bbbbb"));
        history.push(entry("pious", "bybbb"));

        let played: Vec<String> = history.iter().map(|e| e.guess.to_string()).collect();
        assert_eq!(played, ["crane", "pious"]);
        assert_eq!(history.latest().unwrap().guess, "pious");

        let undone = history.undo().unwrap();
        assert_eq!(undone.guess, "pious");
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().unwrap().guess, "crane");
    }

    #[test]
    fn undo_on_empty_is_none() {
        let mut history = History::new();
        assert!(history.undo().is_none());
    }

    #[test]
    fn clear_empties() {
        let mut history: History = vec![entry("crane", "bbbbb"), entry("sheep", "gbggy")]
            .into_iter()
            .collect();
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn solved_once_a_round_is_all_green() {
        let mut history = History::new();
        history.push(entry("crane", "bggbg"));
        assert!(!history.is_solved());
        history.push(entry("brake", "ggggg"));
        assert!(history.is_solved());
    }

    #[test]
    fn parse_rejects_bad_pattern() {
        assert!(HistoryEntry::parse("crane", "gyb").is_err());
        assert!(HistoryEntry::parse("cran", "gybbb").is_err());
    }
}
