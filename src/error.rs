//! Error type shared by the whole crate.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong is a caller input error; the engine itself
/// has no failure modes once its inputs are typed.
#[derive(Error, Debug)]
pub enum Error {
    #[error("'{word}' has {len} letters, expected {}", crate::WORD_LENGTH)]
    InvalidWordLength { word: String, len: usize },
    #[error("'{word}' contains '{ch}', only a-z are allowed")]
    InvalidAlphabet { word: String, ch: char },
    #[error("malformed feedback '{0}', expected 5 of g/y/b")]
    InvalidFeedback(String),
    #[error("could not read dictionary {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
