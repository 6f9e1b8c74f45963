//! Feedback scoring for a guess against an answer.
//!
//! This module computes the per-letter result pattern (green/yellow/gray)
//! a guess would receive if the given word were the answer.

use crate::error::{Error, Result};
use crate::word::Word;
use crate::WORD_LENGTH;

/// The result for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterResult {
    /// Letter not in the answer, or every copy already claimed (gray)
    Absent,
    /// Letter in the answer at another position (yellow)
    Present,
    /// Letter in the answer at this position (green)
    Correct,
}

impl LetterResult {
    /// Emoji used for display
    pub fn to_char(self) -> char {
        match self {
            LetterResult::Correct => '🟩',
            LetterResult::Present => '🟨',
            LetterResult::Absent => '⬛',
        }
    }

    /// Parse from a character (g=green, y=yellow, b/x=gray, or 2/1/0)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(LetterResult::Correct),
            'y' | '1' => Some(LetterResult::Present),
            'b' | 'x' | '0' => Some(LetterResult::Absent),
            _ => None,
        }
    }

    fn digit(self) -> u8 {
        match self {
            LetterResult::Absent => 0,
            LetterResult::Present => 1,
            LetterResult::Correct => 2,
        }
    }
}

/// The five-slot feedback for one guess.
///
/// Encoded as a single base-3 number (0-242), position 0 being the least
/// significant digit. The code doubles as the canonical grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback(u8);

impl Feedback {
    /// Every letter correct
    pub const ALL_CORRECT: Self = Self(2 + 2 * 3 + 2 * 9 + 2 * 27 + 2 * 81);

    /// Every letter absent
    pub const ALL_ABSENT: Self = Self(0);

    /// Number of distinct feedback values (3^5)
    pub const NUM_PATTERNS: usize = 243;

    pub fn new(results: [LetterResult; WORD_LENGTH]) -> Self {
        let mut code: u8 = 0;
        let mut multiplier: u8 = 1;
        for result in results {
            code += result.digit() * multiplier;
            multiplier *= 3;
        }
        Self(code)
    }

    /// Score `guess` as if `answer` were the hidden word.
    ///
    /// Exact matches are claimed first. Remaining guess letters then take the
    /// first unclaimed matching answer letter, scanning left to right, so a
    /// letter guessed twice against an answer holding it once is marked only
    /// once.
    pub fn classify(guess: &Word, answer: &Word) -> Self {
        let guess = guess.letters();
        let answer = answer.letters();

        let mut results = [LetterResult::Absent; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        for i in 0..WORD_LENGTH {
            if guess[i] == answer[i] {
                results[i] = LetterResult::Correct;
                consumed[i] = true;
            }
        }

        for i in 0..WORD_LENGTH {
            if results[i] == LetterResult::Correct {
                continue;
            }
            let slot = (0..WORD_LENGTH).find(|&j| !consumed[j] && answer[j] == guess[i]);
            if let Some(j) = slot {
                results[i] = LetterResult::Present;
                consumed[j] = true;
            }
        }

        Self::new(results)
    }

    /// Canonical key, unique per pattern, in `0..NUM_PATTERNS`
    pub fn key(self) -> usize {
        self.0 as usize
    }

    pub fn results(self) -> [LetterResult; WORD_LENGTH] {
        let mut code = self.0;
        let mut results = [LetterResult::Absent; WORD_LENGTH];
        for result in results.iter_mut() {
            *result = match code % 3 {
                0 => LetterResult::Absent,
                1 => LetterResult::Present,
                _ => LetterResult::Correct,
            };
            code /= 3;
        }
        results
    }

    pub fn is_win(self) -> bool {
        self == Self::ALL_CORRECT
    }

    /// Parse a pattern like "gybbb" or "21000"
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidFeedback(s.to_string());
        if s.chars().count() != WORD_LENGTH {
            return Err(invalid());
        }
        let mut results = [LetterResult::Absent; WORD_LENGTH];
        for (slot, c) in results.iter_mut().zip(s.chars()) {
            *slot = LetterResult::from_char(c).ok_or_else(invalid)?;
        }
        Ok(Self::new(results))
    }

    pub fn to_emoji_string(self) -> String {
        self.results().iter().map(|r| r.to_char()).collect()
    }

    /// The `g`/`y`/`b` spelling accepted by [`Feedback::parse`]
    pub fn to_letters(self) -> String {
        self.results()
            .iter()
            .map(|r| match r {
                LetterResult::Correct => 'g',
                LetterResult::Present => 'y',
                LetterResult::Absent => 'b',
            })
            .collect()
    }
}

impl From<[LetterResult; WORD_LENGTH]> for Feedback {
    fn from(results: [LetterResult; WORD_LENGTH]) -> Self {
        Self::new(results)
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}

/// Free-function form of [`Feedback::classify`].
pub fn classify(guess: &Word, answer: &Word) -> Feedback {
    Feedback::classify(guess, answer)
}

/// Validate both words, then classify. Malformed input is rejected before
/// any scoring happens.
pub fn classify_str(guess: &str, answer: &str) -> Result<Feedback> {
    let guess = Word::parse(guess)?;
    let answer = Word::parse(answer)?;
    Ok(Feedback::classify(&guess, &answer))
}
