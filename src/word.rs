//! The validated five-letter word value.

use crate::error::{Error, Result};
use crate::WORD_LENGTH;
use std::fmt;
use std::str::FromStr;

/// A lowercase `a`-`z` word of exactly [`WORD_LENGTH`] letters.
///
/// Stored as raw bytes so comparison is cheap; the derived `Ord` is plain
/// lexicographic order, which is what the selector uses to break ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Validate and case-fold `s`.
    ///
    /// Length is checked before the alphabet so that `"abc"` reports
    /// [`Error::InvalidWordLength`] rather than anything else.
    pub fn parse(s: &str) -> Result<Self> {
        let len = s.chars().count();
        if len != WORD_LENGTH {
            return Err(Error::InvalidWordLength {
                word: s.to_string(),
                len,
            });
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(s.chars()) {
            let lower = ch.to_ascii_lowercase();
            if !lower.is_ascii_lowercase() {
                return Err(Error::InvalidAlphabet {
                    word: s.to_string(),
                    ch,
                });
            }
            *slot = lower as u8;
        }
        Ok(Self(letters))
    }

    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn to_uppercase(&self) -> String {
        self.to_string().to_uppercase()
    }
}

impl FromStr for Word {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Word {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.0.as_slice() == other.as_bytes()
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case() {
        let word = Word::parse("CrAnE").unwrap();
        assert_eq!(word, "crane");
        assert_eq!(word.to_uppercase(), "CRANE");
    }

    #[test]
    fn rejects_bad_length_before_alphabet() {
        assert!(matches!(
            Word::parse("ab1"),
            Err(Error::InvalidWordLength { len: 3, .. })
        ));
        assert!(matches!(
            Word::parse("cranes"),
            Err(Error::InvalidWordLength { len: 6, .. })
        ));
    }

    #[test]
    fn rejects_non_letters() {
        assert!(matches!(
            Word::parse("cr4ne"),
            Err(Error::InvalidAlphabet { ch: '4', .. })
        ));
        assert!(matches!(
            Word::parse("crâne"),
            Err(Error::InvalidAlphabet { ch: 'â', .. })
        ));
    }

    #[test]
    fn orders_lexicographically() {
        let a = Word::parse("apple").unwrap();
        let b = Word::parse("apply").unwrap();
        assert!(a < b);
    }
}
