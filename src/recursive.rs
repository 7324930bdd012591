//! Recursive character splitting (LangChain-style).
//!
//! Tries progressively finer separators until every piece fits the chunk size.
//!
//! ## The Algorithm
//!
//! Given separators `["\n\n", "\n", " ", ""]` and `chunk_size = 100`:
//!
//! ```text
//! 1. Pick the first separator that occurs in the text ("" always matches)
//! 2. Cut the text after every occurrence, keeping the separator on the
//!    fragment it ends
//! 3. Fragments of length <= 100 are collected and merged greedily
//! 4. A fragment of length > 100 is split again with the separators after
//!    the one just used
//! 5. "" cuts between grapheme clusters, so the recursion always bottoms out
//! ```
//!
//! If a custom separator list has no `""` at the end and is exhausted, the
//! fragment is cut at grapheme boundaries as a last resort, so the size limit
//! holds for any length function that counts a single grapheme as at most
//! `chunk_size`.
//!
//! Lengths are measured with the configured [`LengthFunction`](crate::LengthFunction),
//! so the same splitter works on byte budgets and token budgets.

use unicode_segmentation::UnicodeSegmentation;

use crate::{merge_splits, Error, FragmentSplitter, Result, SplitterConfig};

/// Separators tried by [`RecursiveCharacterSplitter::new`]: paragraphs,
/// lines, words, graphemes.
pub const DEFAULT_SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

/// Recursive character splitter.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
/// use snippet_extractor::{FragmentSplitter, RecursiveCharacterSplitter, SplitterConfig, Utf8Length};
///
/// let config = SplitterConfig::new(30, Arc::new(Utf8Length))?;
/// let splitter = RecursiveCharacterSplitter::new(config);
/// let chunks = splitter.split("Paragraph one.\n\nParagraph two is a little longer.");
///
/// assert_eq!(chunks, ["Paragraph one.", "Paragraph two is a little", "longer."]);
/// # Ok::<(), snippet_extractor::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RecursiveCharacterSplitter {
    config: SplitterConfig,
    separators: Vec<String>,
}

impl RecursiveCharacterSplitter {
    /// Create a splitter using [`DEFAULT_SEPARATORS`].
    #[must_use]
    pub fn new(config: SplitterConfig) -> Self {
        Self {
            config,
            separators: DEFAULT_SEPARATORS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Create a splitter with a custom separator hierarchy, coarsest first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSeparators`] if `separators` is empty.
    pub fn with_separators(config: SplitterConfig, separators: &[&str]) -> Result<Self> {
        if separators.is_empty() {
            return Err(Error::NoSeparators);
        }
        Ok(Self {
            config,
            separators: separators.iter().map(ToString::to_string).collect(),
        })
    }

    /// The splitter configuration.
    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    fn split_recursive(&self, text: &str, separators: &[String]) -> Vec<String> {
        let (separator, finer) = pick_separator(text, separators);

        let mut chunks = Vec::new();
        let mut fitting: Vec<&str> = Vec::new();

        for fragment in split_keeping_separator(text, separator) {
            if self.config.length(fragment) <= self.config.chunk_size() {
                fitting.push(fragment);
                continue;
            }

            if !fitting.is_empty() {
                chunks.extend(merge_splits(&fitting, "", &self.config));
                fitting.clear();
            }

            if finer.is_empty() {
                chunks.extend(self.force_split(fragment));
            } else {
                chunks.extend(self.split_recursive(fragment, finer));
            }
        }

        if !fitting.is_empty() {
            chunks.extend(merge_splits(&fitting, "", &self.config));
        }

        chunks
    }

    /// Cut at grapheme boundaries when no separator is left.
    fn force_split(&self, text: &str) -> Vec<String> {
        let mut pieces = Vec::new();
        let mut start = 0;
        let mut end = 0;

        for (offset, grapheme) in text.grapheme_indices(true) {
            let next = offset + grapheme.len();
            if end > start && self.config.length(&text[start..next]) > self.config.chunk_size() {
                pieces.push(&text[start..end]);
                start = end;
            }
            end = next;
        }
        if end > start {
            pieces.push(&text[start..end]);
        }

        merge_splits(&pieces, "", &self.config)
    }
}

impl FragmentSplitter for RecursiveCharacterSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return vec![];
        }
        self.split_recursive(text, &self.separators)
    }
}

/// The first separator present in `text`, and the finer ones after it.
fn pick_separator<'s>(text: &str, separators: &'s [String]) -> (&'s str, &'s [String]) {
    for (i, separator) in separators.iter().enumerate() {
        if separator.is_empty() {
            return (separator.as_str(), &[]);
        }
        if text.contains(separator.as_str()) {
            return (separator.as_str(), &separators[i + 1..]);
        }
    }
    // None matched: the text stays whole and gets force split if too long.
    let last = separators.last().map_or("", String::as_str);
    (last, &[])
}

fn split_keeping_separator<'t>(text: &'t str, separator: &str) -> Vec<&'t str> {
    if separator.is_empty() {
        return text.graphemes(true).collect();
    }
    text.split_inclusive(separator)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}
