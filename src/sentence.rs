//! Sentence-based chunking.
//!
//! Splits text into sentences with the rules of one [`Language`], then packs
//! whole sentences into chunks near the target size.
//!
//! ## Why Whole Sentences?
//!
//! Snippets are embedded and retrieved one at a time. A snippet that ends
//! mid-sentence embeds half a thought, so this splitter never cuts inside a
//! sentence:
//!
//! ```text
//! chunk_size = 12 tokens
//!
//! [S1: 5 tokens] [S2: 6 tokens] [S3: 9 tokens] [S4: 20 tokens]
//!  \____ chunk 0 ____/           \_ chunk 1 _/  \_ chunk 2 _/
//!                                                 ^ over target, kept whole
//! ```
//!
//! The price is that one long sentence becomes one oversized chunk. That is
//! what [`FallbackChunker`](crate::FallbackChunker) is for.

use crate::{merge_splits, FragmentSplitter, Language, SplitterConfig};

/// Sentences within a chunk are joined with a blank line by default.
pub const DEFAULT_SENTENCE_SEPARATOR: &str = "\n\n";

/// Sentence-based splitter.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
/// use snippet_extractor::{FragmentSplitter, Language, SentenceSplitter, SplitterConfig, Utf8Length};
///
/// let config = SplitterConfig::new(40, Arc::new(Utf8Length))?;
/// let splitter = SentenceSplitter::new(Language::English, config);
/// let chunks = splitter.split("First sentence. Second sentence. Third sentence.");
///
/// assert_eq!(chunks, ["First sentence.\n\nSecond sentence.", "Third sentence."]);
/// # Ok::<(), snippet_extractor::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    language: Language,
    separator: String,
    config: SplitterConfig,
}

impl SentenceSplitter {
    /// Create a splitter joining sentences with [`DEFAULT_SENTENCE_SEPARATOR`].
    #[must_use]
    pub fn new(language: Language, config: SplitterConfig) -> Self {
        Self {
            language,
            separator: DEFAULT_SENTENCE_SEPARATOR.to_string(),
            config,
        }
    }

    /// Join sentences within a chunk with `separator` instead.
    #[must_use]
    pub fn with_separator(self, separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..self
        }
    }

    /// The language whose sentence rules are applied.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The splitter configuration.
    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }
}

impl FragmentSplitter for SentenceSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        let sentences = self.language.sentences(text);
        merge_splits(&sentences, &self.separator, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::Utf8Length;

    fn splitter(language: Language, chunk_size: usize) -> SentenceSplitter {
        SentenceSplitter::new(language, SplitterConfig::new(chunk_size, Arc::new(Utf8Length)).unwrap())
    }

    #[test]
    fn test_one_sentence_per_chunk() {
        let chunks = splitter(Language::English, 13).split("Hello world. How are you? I am fine.");
        assert_eq!(chunks, ["Hello world.", "How are you?", "I am fine."]);
    }

    #[test]
    fn test_sentences_are_packed() {
        let chunks = splitter(Language::English, 100).split("One. Two. Three. Four.");
        assert_eq!(chunks, ["One.\n\nTwo.\n\nThree.\n\nFour."]);
    }

    #[test]
    fn test_long_sentence_is_not_cut() {
        let text = "Short one. This sentence is much longer than the chunk size allows.";
        let chunks = splitter(Language::English, 20).split(text);
        assert_eq!(
            chunks,
            ["Short one.", "This sentence is much longer than the chunk size allows."]
        );
    }

    #[test]
    fn test_custom_separator() {
        let chunks = splitter(Language::English, 100)
            .with_separator(" ")
            .split("One. Two.");
        assert_eq!(chunks, ["One. Two."]);
    }

    #[test]
    fn test_language_changes_boundaries() {
        let text = "Sie kam am 3. Oktober. Er blieb.";
        assert_eq!(
            splitter(Language::German, 22).split(text),
            ["Sie kam am 3. Oktober.", "Er blieb."]
        );
        assert_eq!(
            splitter(Language::English, 22).split(text),
            ["Sie kam am 3.", "Oktober.\n\nEr blieb."]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(splitter(Language::German, 10).split("").is_empty());
        assert!(splitter(Language::German, 10).split(" \n\n ").is_empty());
    }
}
