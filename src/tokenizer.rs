//! Token counts from a HuggingFace tokenizer.
//!
//! Embedding models accept a fixed number of tokens, not bytes. Measuring
//! snippets with the model's own tokenizer is the only way to know they fit.
//!
//! The tokenizer is loaded once and then shared read-only: [`TokenCount`] is
//! `Send + Sync`, so one instance serves every splitter of an extractor and any
//! number of concurrent extractions.

use std::path::Path;

use tokenizers::Tokenizer;
use tracing::{info, warn};

use crate::{Error, LengthFunction, Result};

/// Length function counting model tokens.
///
/// Special tokens (`[CLS]`, `[SEP]`, ...) are counted by default, since they
/// occupy the model's context window just like text tokens.
pub struct TokenCount {
    tokenizer: Tokenizer,
    add_special_tokens: bool,
}

impl TokenCount {
    /// Load a tokenizer from a `tokenizer.json` file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LoadingTokenizerFailed`] if the file is missing or not
    /// a valid tokenizer definition.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let tokenizer = Tokenizer::from_file(path).map_err(|error| Error::LoadingTokenizerFailed {
            path: path.to_path_buf(),
            msg: error.to_string(),
        })?;
        info!(path = %path.display(), "loaded tokenizer");
        Ok(Self::new(tokenizer))
    }

    /// Wrap an already constructed tokenizer.
    #[must_use]
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            add_special_tokens: true,
        }
    }

    /// Count only the tokens produced by the text itself.
    #[must_use]
    pub fn without_special_tokens(self) -> Self {
        Self {
            add_special_tokens: false,
            ..self
        }
    }
}

impl LengthFunction for TokenCount {
    fn length(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        match self.tokenizer.encode(text, self.add_special_tokens) {
            Ok(encoding) => encoding.len(),
            Err(error) => {
                // Bytes bound the token count of any byte-level vocabulary.
                warn!(%error, len = text.len(), "tokenizer failed, measuring bytes instead");
                text.len()
            }
        }
    }
}

impl std::fmt::Debug for TokenCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCount")
            .field("add_special_tokens", &self.add_special_tokens)
            .finish_non_exhaustive()
    }
}
