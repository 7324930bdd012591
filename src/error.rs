//! Error types for snippet extraction.

use std::path::PathBuf;

use crate::ChunkCapacityError;

/// Errors that can occur while configuring a splitter or extracting snippets.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid chunk size (must be > 0).
    #[error("invalid chunk size: {0} (must be > 0)")]
    InvalidChunkSize(usize),

    /// Overlap is not smaller than the chunk size.
    #[error("overlap {overlap} must be smaller than chunk size {size}")]
    OverlapExceedsSize {
        /// The chunk size.
        size: usize,
        /// The overlap that was too large.
        overlap: usize,
    },

    /// The hard chunk size limit is below the chunk size.
    #[error("invalid chunk capacity: {0}")]
    Capacity(#[from] ChunkCapacityError),

    /// A recursive splitter needs at least one separator.
    #[error("recursive splitter needs at least one separator")]
    NoSeparators,

    /// No sentence rules exist for this language.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// The tokenizer resource could not be loaded.
    #[error("loading tokenizer from {} failed: {msg}", path.display())]
    LoadingTokenizerFailed {
        /// Where the tokenizer was expected.
        path: PathBuf,
        /// What the tokenizer library reported.
        msg: String,
    },

    /// The document is not valid UTF-8.
    #[error("document is not valid utf-8: {0}")]
    InvalidDocument(#[from] std::str::Utf8Error),
}

/// Result type for snippet extraction.
pub type Result<T> = std::result::Result<T, Error>;
