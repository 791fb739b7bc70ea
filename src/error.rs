//! Error Types

use std::io;
use thiserror::Error;

/// Errors surfaced while loading or querying a model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The underlying stream could not be opened or read.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// Structural violation of the binary model format.
    #[error("malformed model: {0}")]
    Malformed(String),
    /// A similarity query named a word that is not in the vocabulary.
    #[error("word not found: {0}")]
    WordNotFound(String),
    /// The vocabulary filter was handed an unusable word list.
    #[error("invalid word list: {0}")]
    InvalidWordList(String),
}

impl ModelError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        ModelError::Malformed(msg.into())
    }

    /// Map a read failure hit mid-decode. Running out of bytes is a format
    /// violation, anything else is a stream error.
    pub(crate) fn from_read(err: io::Error, what: &str) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            ModelError::Malformed(format!("unexpected end of stream while reading {}", what))
        } else {
            ModelError::Io(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
