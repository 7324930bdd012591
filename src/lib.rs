//! # snippet-extractor
//!
//! Split documents into snippets that fit an embedding model.
//!
//! ## The Problem
//!
//! A retrieval index embeds snippets, not documents, and the embedding model
//! accepts a fixed number of tokens. Snippets must therefore be
//!
//! - small enough: never above the model's hard token limit,
//! - coherent: made of whole sentences wherever possible,
//! - complete: together they cover the document with nothing dropped.
//!
//! Sentence splitting gives coherence but no size guarantee. Recursive
//! character splitting gives the size guarantee but cuts anywhere. This crate
//! runs the first and falls back to the second only where needed.
//!
//! ## The Pipeline
//!
//! ```text
//! document
//!    |
//!    v
//! SentenceSplitter          language rules, whole sentences packed to chunk_size
//!    |
//!    +-- chunk <= hard limit ----------------------+
//!    |                                             |
//!    +-- chunk >  hard limit                       |
//!           |                                      |
//!           v                                      |
//!        RecursiveCharacterSplitter                |
//!        "\n\n" -> "\n" -> " " -> graphemes        |
//!           |                                      |
//!           v                                      v
//!        re-merge all pieces with "\n" up to the hard limit
//!           |
//!           v
//!        snippets
//! ```
//!
//! Every stage measures text with the same injected [`LengthFunction`]:
//! model tokens ([`TokenCount`]), UTF-8 bytes ([`Utf8Length`]), characters
//! ([`CharCount`]) or any `Fn(&str) -> usize`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use snippet_extractor::{Config, Language, SnippetExtractor};
//!
//! let extractor = SnippetExtractor::new(Config {
//!     language: Language::German,
//!     chunk_size: 50,
//!     hard_chunk_size_limit: 55,
//!     tokenizer_file: "assets/tokenizer.json".into(),
//! })?;
//!
//! for snippet in extractor.extract("Dr. Müller kam am 3. Oktober. Er blieb.") {
//!     println!("{snippet}");
//! }
//! # Ok::<(), snippet_extractor::Error>(())
//! ```
//!
//! ## Building Blocks
//!
//! Each splitter implements [`FragmentSplitter`] and can be used alone:
//!
//! ```rust
//! use std::sync::Arc;
//! use snippet_extractor::{FragmentSplitter, RecursiveCharacterSplitter, SplitterConfig, Utf8Length};
//!
//! let config = SplitterConfig::new(16, Arc::new(Utf8Length))?.with_overlap(6)?;
//! let chunks = RecursiveCharacterSplitter::new(config).split("one two three four five");
//! assert_eq!(chunks, ["one two three", "three four five"]);
//! # Ok::<(), snippet_extractor::Error>(())
//! ```

mod capacity;
mod config;
mod error;
mod extractor;
mod fallback;
mod language;
mod length;
mod merge;
mod recursive;
mod sentence;
mod snippet;
mod tokenizer;

pub use capacity::{ChunkCapacity, ChunkCapacityError};
pub use config::SplitterConfig;
pub use error::{Error, Result};
pub use extractor::{Config, SnippetExtractor};
pub use fallback::{FallbackChunker, REMERGE_SEPARATOR};
pub use language::Language;
pub use length::{CharCount, LengthFunction, Utf8Length};
pub use merge::merge_splits;
pub use recursive::{RecursiveCharacterSplitter, DEFAULT_SEPARATORS};
pub use sentence::{SentenceSplitter, DEFAULT_SENTENCE_SEPARATOR};
pub use snippet::Snippet;
pub use tokenizer::TokenCount;

/// A text splitting strategy.
///
/// Implementations cut text into an ordered sequence of non-empty, trimmed
/// chunks. They hold only configuration, so one instance can be shared across
/// threads:
///
/// ```rust
/// use std::sync::Arc;
/// use snippet_extractor::{
///     FragmentSplitter, Language, RecursiveCharacterSplitter, SentenceSplitter, SplitterConfig,
///     Utf8Length,
/// };
///
/// fn split_document(splitter: &dyn FragmentSplitter, text: &str) -> Vec<String> {
///     splitter.split(text)
/// }
///
/// let config = SplitterConfig::new(100, Arc::new(Utf8Length))?;
/// let sentence = SentenceSplitter::new(Language::English, config.clone());
/// let recursive = RecursiveCharacterSplitter::new(config);
///
/// let text = "Hello world. This is a test.";
/// assert_eq!(split_document(&sentence, text), ["Hello world.\n\nThis is a test."]);
/// assert_eq!(split_document(&recursive, text), ["Hello world. This is a test."]);
/// # Ok::<(), snippet_extractor::Error>(())
/// ```
pub trait FragmentSplitter: Send + Sync {
    /// Split `text` into chunks, in source order.
    ///
    /// Empty or whitespace-only text yields no chunks.
    fn split(&self, text: &str) -> Vec<String>;
}
