//! The snippet extraction facade.
//!
//! [`SnippetExtractor`] wires one length function into every stage:
//!
//! ```text
//! document
//!   -> SentenceSplitter (language, chunk_size, no overlap)
//!   -> chunks above hard_chunk_size_limit -> RecursiveCharacterSplitter (chunk_size)
//!   -> re-merge with "\n" up to hard_chunk_size_limit
//!   -> snippets
//! ```
//!
//! With [`SnippetExtractor::new`] the length function is the token count of the
//! configured tokenizer; [`SnippetExtractor::with_length_function`] accepts any
//! other metric.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::snippet::locate;
use crate::{
    ChunkCapacity, Error, FallbackChunker, FragmentSplitter, Language, LengthFunction,
    RecursiveCharacterSplitter, Result, SentenceSplitter, Snippet, SplitterConfig, TokenCount,
};

/// Snippet extractor configuration.
///
/// Every field is required when deserializing, and unknown fields are rejected:
///
/// ```rust
/// use snippet_extractor::{Config, Language};
///
/// let config: Config = serde_json::from_str(r#"{
///     "language": "german",
///     "chunk_size": 50,
///     "hard_chunk_size_limit": 55,
///     "tokenizer_file": "assets/tokenizer.json"
/// }"#)?;
/// assert_eq!(config.language, Language::German);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Language of the sentence boundary rules.
    pub language: Language,
    /// Target snippet size in length-function units.
    pub chunk_size: usize,
    /// Snippets above this size are re-split; no snippet is packed beyond it.
    pub hard_chunk_size_limit: usize,
    /// Path of a HuggingFace `tokenizer.json`.
    pub tokenizer_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::English,
            chunk_size: 500,
            hard_chunk_size_limit: 520,
            tokenizer_file: "./assets/tokenizer.json".into(),
        }
    }
}

impl Config {
    /// Validate the sizes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`] if `chunk_size == 0` and
    /// [`Error::Capacity`] if `hard_chunk_size_limit < chunk_size`.
    pub fn capacity(&self) -> Result<ChunkCapacity> {
        if self.chunk_size == 0 {
            return Err(Error::InvalidChunkSize(self.chunk_size));
        }
        Ok(ChunkCapacity::new(self.chunk_size).with_max(self.hard_chunk_size_limit)?)
    }
}

/// Extracts snippets from documents.
///
/// Holds no mutable state: one instance can serve concurrent extractions from
/// many threads.
#[derive(Debug)]
pub struct SnippetExtractor {
    config: Config,
    chunker: FallbackChunker<SentenceSplitter, RecursiveCharacterSplitter>,
}

impl SnippetExtractor {
    /// Create an extractor measuring snippets in tokens of `config.tokenizer_file`.
    ///
    /// # Errors
    ///
    /// Fails if the sizes are invalid (see [`Config::capacity`]) or the
    /// tokenizer cannot be loaded ([`Error::LoadingTokenizerFailed`]).
    pub fn new(config: Config) -> Result<Self> {
        config.capacity()?;
        let tokens = TokenCount::from_file(&config.tokenizer_file)?;
        Self::with_length_function(config, Arc::new(tokens))
    }

    /// Create an extractor measuring snippets with `length_function`.
    ///
    /// `config.tokenizer_file` is not read.
    ///
    /// # Errors
    ///
    /// Fails if the sizes are invalid (see [`Config::capacity`]).
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use snippet_extractor::{Config, SnippetExtractor, Utf8Length};
    ///
    /// let config = Config { chunk_size: 50, hard_chunk_size_limit: 50, ..Config::default() };
    /// let extractor = SnippetExtractor::with_length_function(config, Arc::new(Utf8Length))?;
    /// assert_eq!(extractor.extract("Hello world."), ["Hello world."]);
    /// # Ok::<(), snippet_extractor::Error>(())
    /// ```
    pub fn with_length_function(
        config: Config,
        length_function: Arc<dyn LengthFunction>,
    ) -> Result<Self> {
        let capacity = config.capacity()?;
        let splitter_config = SplitterConfig::new(capacity.desired(), Arc::clone(&length_function))?;

        let chunker = FallbackChunker::new(
            SentenceSplitter::new(config.language, splitter_config.clone()),
            RecursiveCharacterSplitter::new(splitter_config),
            capacity,
            length_function,
        )?;

        Ok(Self { config, chunker })
    }

    /// The configuration this extractor was built from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Extract snippets from `document`, in document order.
    ///
    /// The empty document yields no snippets.
    pub fn extract(&self, document: &str) -> Vec<String> {
        let snippets = self.chunker.split(document);
        debug!(
            document_len = document.len(),
            snippets = snippets.len(),
            language = %self.config.language,
            "extracted snippets"
        );
        snippets
    }

    /// Extract snippets from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDocument`] without extracting anything if
    /// `document` is not valid UTF-8.
    pub fn extract_bytes(&self, document: &[u8]) -> Result<Vec<String>> {
        let document = std::str::from_utf8(document)?;
        Ok(self.extract(document))
    }

    /// Extract snippets together with their character offsets in `document`.
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use snippet_extractor::{Config, Language, SnippetExtractor, Utf8Length};
    ///
    /// let config = Config {
    ///     language: Language::German,
    ///     chunk_size: 18,
    ///     hard_chunk_size_limit: 18,
    ///     ..Config::default()
    /// };
    /// let extractor = SnippetExtractor::with_length_function(config, Arc::new(Utf8Length))?;
    /// let snippets = extractor.extract_snippets("Grüße aus Köln. Bis bald.");
    /// assert_eq!(snippets[1].start, Some(16));
    /// # Ok::<(), snippet_extractor::Error>(())
    /// ```
    pub fn extract_snippets(&self, document: &str) -> Vec<Snippet> {
        locate(document, self.extract(document))
    }
}
