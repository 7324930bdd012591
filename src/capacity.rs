//! Snippet size targets.
//!
//! Snippet extraction works with two sizes:
//!
//! - `desired`: the `chunk_size` the sentence and recursive splitters pack
//!   towards.
//! - `max`: the `hard_chunk_size_limit`. A primary chunk above it is handed to
//!   the secondary splitter, and the final re-merge never packs beyond it.
//!
//! ```text
//! desired = 50, max = 55
//!
//! sentence chunk of 48 tokens  -> kept
//! sentence chunk of 53 tokens  -> kept (over target, under the ceiling)
//! sentence chunk of 140 tokens -> re-split by the recursive splitter
//! ```
//!
//! The slack between the two lets a chunk that ends on a sentence boundary
//! stay whole when it is only slightly over target.

/// Target snippet size and the hard ceiling above it.
///
/// # Examples
///
/// ```rust
/// use snippet_extractor::ChunkCapacity;
///
/// let cap = ChunkCapacity::new(500).with_max(520).unwrap();
/// assert_eq!(cap.desired(), 500);
/// assert_eq!(cap.max(), 520);
/// assert!(!cap.exceeds_max(510));
/// assert!(cap.exceeds_max(521));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkCapacity {
    desired: usize,
    max: usize,
}

impl ChunkCapacity {
    /// Create a capacity whose hard limit equals the target size.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self {
            desired: size,
            max: size,
        }
    }

    /// The target chunk size (`chunk_size`).
    #[must_use]
    pub const fn desired(&self) -> usize {
        self.desired
    }

    /// The hard ceiling (`hard_chunk_size_limit`).
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Raise the hard ceiling above the target size.
    ///
    /// # Errors
    ///
    /// Returns an error if `max < desired`.
    pub fn with_max(self, max: usize) -> Result<Self, ChunkCapacityError> {
        if max < self.desired {
            Err(ChunkCapacityError::MaxLessThanDesired {
                desired: self.desired,
                max,
            })
        } else {
            Ok(Self { max, ..self })
        }
    }

    /// Whether a chunk of `size` is above the hard ceiling and must be re-split.
    ///
    /// Sizes between target and ceiling are accepted as they are.
    #[must_use]
    pub const fn exceeds_max(&self, size: usize) -> bool {
        size > self.max
    }
}

/// Error when configuring chunk capacity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChunkCapacityError {
    /// The hard limit must be >= the chunk size.
    #[error("hard chunk size limit ({max}) must be >= chunk size ({desired})")]
    MaxLessThanDesired {
        /// The chunk size.
        desired: usize,
        /// The hard limit that was too small.
        max: usize,
    },
}
