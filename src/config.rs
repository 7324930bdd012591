//! Per-splitter configuration.

use std::fmt;
use std::sync::Arc;

use crate::{Error, LengthFunction, Result};

/// Chunk size, overlap, and the length function measuring both.
///
/// Immutable once built; cloning shares the length function.
///
/// ```rust
/// use std::sync::Arc;
/// use snippet_extractor::{SplitterConfig, Utf8Length};
///
/// let config = SplitterConfig::new(100, Arc::new(Utf8Length))?
///     .with_overlap(20)?;
/// assert_eq!(config.chunk_size(), 100);
/// assert_eq!(config.chunk_overlap(), 20);
///
/// assert!(SplitterConfig::new(0, Arc::new(Utf8Length)).is_err());
/// # Ok::<(), snippet_extractor::Error>(())
/// ```
#[derive(Clone)]
pub struct SplitterConfig {
    chunk_size: usize,
    chunk_overlap: usize,
    length_function: Arc<dyn LengthFunction>,
}

impl SplitterConfig {
    /// Create a configuration without overlap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`] if `chunk_size == 0`.
    pub fn new(chunk_size: usize, length_function: Arc<dyn LengthFunction>) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::InvalidChunkSize(chunk_size));
        }
        Ok(Self {
            chunk_size,
            chunk_overlap: 0,
            length_function,
        })
    }

    /// Carry up to `chunk_overlap` units from the end of one chunk into the next.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OverlapExceedsSize`] if `chunk_overlap >= chunk_size`.
    pub fn with_overlap(self, chunk_overlap: usize) -> Result<Self> {
        if chunk_overlap >= self.chunk_size {
            return Err(Error::OverlapExceedsSize {
                size: self.chunk_size,
                overlap: chunk_overlap,
            });
        }
        Ok(Self {
            chunk_overlap,
            ..self
        })
    }

    /// Target chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Overlap carried between adjacent chunks.
    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// Measure `text` with the configured length function.
    pub fn length(&self, text: &str) -> usize {
        self.length_function.length(text)
    }

    /// The shared length function.
    pub fn length_function(&self) -> &Arc<dyn LengthFunction> {
        &self.length_function
    }
}

impl fmt::Debug for SplitterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitterConfig")
            .field("chunk_size", &self.chunk_size)
            .field("chunk_overlap", &self.chunk_overlap)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Utf8Length;

    #[test]
    fn test_zero_chunk_size_rejected() {
        let err = SplitterConfig::new(0, Arc::new(Utf8Length)).unwrap_err();
        assert!(matches!(err, Error::InvalidChunkSize(0)));
    }

    #[test]
    fn test_overlap_must_be_below_size() {
        let config = SplitterConfig::new(10, Arc::new(Utf8Length)).unwrap();
        assert!(matches!(
            config.clone().with_overlap(10),
            Err(Error::OverlapExceedsSize {
                size: 10,
                overlap: 10
            })
        ));
        assert_eq!(config.with_overlap(9).unwrap().chunk_overlap(), 9);
    }

    #[test]
    fn test_debug_hides_length_function() {
        let config = SplitterConfig::new(10, Arc::new(Utf8Length)).unwrap();
        assert_eq!(
            format!("{config:?}"),
            "SplitterConfig { chunk_size: 10, chunk_overlap: 0, .. }"
        );
    }
}
