//! Entropy ranking of candidate guesses.
//!
//! A guess splits the candidate set into buckets by the feedback it would
//! receive against each candidate. The Shannon entropy of that split is the
//! expected number of bits the guess reveals, assuming every candidate is
//! equally likely to be the answer.

use crate::feedback::Feedback;
use crate::word::Word;
use rayon::prelude::*;
use std::time::Instant;

/// A candidate guess and the information it is expected to reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion {
    pub word: Word,
    pub bits: f64,
}

impl Suggestion {
    /// Expected candidates left after guessing this word, out of `remaining`
    pub fn expected_remaining(&self, remaining: usize) -> f64 {
        remaining as f64 / 2_f64.powf(self.bits)
    }
}

/// Entropy in bits of the feedback distribution `guess` induces over
/// `candidates`. Always within `[0, log2(n)]`, and zero for `n <= 1`.
pub fn entropy(guess: &Word, candidates: &[Word]) -> f64 {
    let n = candidates.len();
    if n <= 1 {
        return 0.0;
    }

    let mut counts = [0u32; Feedback::NUM_PATTERNS];
    for answer in candidates {
        counts[Feedback::classify(guess, answer).key()] += 1;
    }

    let n = n as f64;
    let bits: f64 = counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / n;
            -p * p.log2()
        })
        .sum();

    // a single bucket sums to -0.0
    bits.max(0.0)
}

/// Score every candidate as the next guess. Only words from `candidates`
/// are considered as guesses. Output follows input order; sorting is left
/// to [`crate::selector::select`].
pub fn rank(candidates: &[Word]) -> Vec<Suggestion> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let start = Instant::now();
    let suggestions: Vec<Suggestion> = candidates
        .par_iter()
        .map(|word| Suggestion {
            word: *word,
            bits: entropy(word, candidates),
        })
        .collect();

    log::debug!(
        "ranked {} candidates in {:.2?}",
        candidates.len(),
        start.elapsed()
    );
    suggestions
}
