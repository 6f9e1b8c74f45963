//! Ordering suggestions for display.

use crate::ranker::Suggestion;
use crate::word::Word;
use std::cmp::Ordering;

/// Top-K used when the caller doesn't say
pub const DEFAULT_TOP_K: usize = 10;

/// Highest entropy first, equal entropies in lexicographic word order.
/// Returns at most `k` suggestions.
pub fn select(mut suggestions: Vec<Suggestion>, k: usize) -> Vec<Suggestion> {
    suggestions.sort_by(compare);
    suggestions.truncate(k);
    suggestions
}

fn compare(a: &Suggestion, b: &Suggestion) -> Ordering {
    b.bits
        .total_cmp(&a.bits)
        .then_with(|| a.word.cmp(&b.word))
}

/// The current pick among the remaining candidates: the lexicographically
/// first one. No frequency prior is applied.
pub fn most_likely(candidates: &[Word]) -> Option<Word> {
    candidates.iter().min().copied()
}
