//! # Wordle Advisor
//!
//! Next-guess advice for five-letter word games, ranked by information theory.
//!
//! Given a dictionary and the rounds played so far, the engine narrows the
//! dictionary to the words still consistent with every round, then scores
//! each remaining word by the entropy of the feedback it would receive. No
//! state is kept between calls.

pub mod advisor;
pub mod dictionary;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod history;
pub mod ranker;
pub mod selector;
pub mod word;

pub use advisor::{Advisor, MAX_ROUNDS};
pub use dictionary::Dictionary;
pub use error::{Error, Result};
pub use feedback::{classify, classify_str, Feedback, LetterResult};
pub use filter::{filter, is_consistent, CandidateSet};
pub use history::{History, HistoryEntry};
pub use ranker::{entropy, rank, Suggestion};
pub use selector::{most_likely, select, DEFAULT_TOP_K};
pub use word::Word;

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// The embedded default word list
pub fn load_dictionary() -> Dictionary {
    Dictionary::parse_lenient(include_str!("../dictionary/dictionary.txt"))
}
