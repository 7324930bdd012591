//! Primary/secondary splitting with a hard size ceiling.
//!
//! ## Two Splitters, Two Guarantees
//!
//! A sentence splitter keeps meaning intact but cannot bound chunk size: one
//! run-on sentence, a table flattened into text, or a list without periods
//! all arrive as a single "sentence". A recursive splitter always fits the
//! limit but cuts wherever a separator happens to be.
//!
//! [`FallbackChunker`] runs the primary splitter and only hands the chunks it
//! could not fit to the secondary one:
//!
//! ```text
//! primary:    [ok] [ok] [ too long ...................... ] [ok]
//!                              |
//!                  secondary:  [piece] [piece] [piece]
//!
//! pieces:     [ok] [ok] [piece] [piece] [piece] [ok]
//! re-merge:   [ok + ok] [piece + piece] [piece + ok]   (joined with "\n")
//! ```
//!
//! The re-merge packs up to the hard limit, so small leftovers of a secondary
//! split join their neighbours instead of becoming tiny snippets.

use std::sync::Arc;

use tracing::debug;

use crate::{merge_splits, ChunkCapacity, FragmentSplitter, LengthFunction, Result, SplitterConfig};

/// Separator used when re-merging the pieces of both splitters.
pub const REMERGE_SEPARATOR: &str = "\n";

/// Chunker falling back to `secondary` for chunks `primary` left too large.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
/// use snippet_extractor::{
///     ChunkCapacity, FallbackChunker, FragmentSplitter, Language, RecursiveCharacterSplitter,
///     SentenceSplitter, SplitterConfig, Utf8Length,
/// };
///
/// let config = SplitterConfig::new(20, Arc::new(Utf8Length))?;
/// let chunker = FallbackChunker::new(
///     SentenceSplitter::new(Language::English, config.clone()),
///     RecursiveCharacterSplitter::new(config),
///     ChunkCapacity::new(20).with_max(24)?,
///     Arc::new(Utf8Length),
/// )?;
///
/// let chunks = chunker.split("Short. This run-on sentence goes on and on.");
/// assert_eq!(chunks, ["Short.\nThis run-on", "sentence goes on\nand on."]);
/// # Ok::<(), snippet_extractor::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct FallbackChunker<P, S> {
    primary: P,
    secondary: S,
    capacity: ChunkCapacity,
    remerge: SplitterConfig,
}

impl<P, S> FallbackChunker<P, S>
where
    P: FragmentSplitter,
    S: FragmentSplitter,
{
    /// Combine `primary` and `secondary` under `capacity.max()` as hard limit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`](crate::Error::InvalidChunkSize) if
    /// the hard limit is 0.
    pub fn new(
        primary: P,
        secondary: S,
        capacity: ChunkCapacity,
        length_function: Arc<dyn LengthFunction>,
    ) -> Result<Self> {
        let remerge = SplitterConfig::new(capacity.max(), length_function)?;
        Ok(Self {
            primary,
            secondary,
            capacity,
            remerge,
        })
    }

    /// The hard chunk size limit.
    pub fn hard_chunk_size_limit(&self) -> usize {
        self.capacity.max()
    }

    /// Re-pack already split pieces into chunks of at most the hard limit.
    ///
    /// Applied to chunks that all fit the limit, this returns them unchanged.
    pub fn remerge<T: AsRef<str>>(&self, pieces: &[T]) -> Vec<String> {
        merge_splits(pieces, REMERGE_SEPARATOR, &self.remerge)
    }
}

impl<P, S> FragmentSplitter for FallbackChunker<P, S>
where
    P: FragmentSplitter,
    S: FragmentSplitter,
{
    fn split(&self, text: &str) -> Vec<String> {
        let mut pieces = Vec::new();

        for chunk in self.primary.split(text) {
            let size = self.remerge.length(&chunk);
            if self.capacity.exceeds_max(size) {
                let secondary = self.secondary.split(&chunk);
                debug!(
                    size,
                    hard_limit = self.capacity.max(),
                    pieces = secondary.len(),
                    "re-split oversized chunk"
                );
                pieces.extend(secondary);
            } else {
                pieces.push(chunk);
            }
        }

        self.remerge(&pieces)
    }
}
