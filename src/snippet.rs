//! The Snippet type: an extracted piece of text with its position.

use std::ops::Range;

/// A snippet with its position in the original document.
///
/// ## Offsets
///
/// `start` counts characters (Unicode scalar values), not bytes, so it agrees
/// with what a reader or a non-Rust consumer sees in the text. Use
/// [`Snippet::span`] to get the byte range for slicing:
///
/// ```rust
/// use snippet_extractor::Snippet;
///
/// let document = "Grüße, Welt!";
/// let snippet = Snippet::new("Welt", Some(7), 0);
/// assert_eq!(snippet.span(document), Some(9..13));
/// assert_eq!(&document[9..13], "Welt");
/// ```
///
/// The final re-merge of the fallback chunker joins pieces with `"\n"`. A
/// snippet whose whitespace was rewritten that way is no longer a substring of
/// the document and has `start == None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    /// The snippet text.
    pub text: String,
    /// Character offset where the snippet starts in the document, if it occurs verbatim.
    pub start: Option<usize>,
    /// Zero-based index of this snippet in the sequence.
    pub index: usize,
}

impl Snippet {
    /// Create a new snippet.
    #[must_use]
    pub fn new(text: impl Into<String>, start: Option<usize>, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            index,
        }
    }

    /// The length of this snippet in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether this snippet is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The byte range of this snippet in `document`.
    ///
    /// `None` if the snippet has no offset or `document` does not hold the
    /// snippet text at that offset.
    #[must_use]
    pub fn span(&self, document: &str) -> Option<Range<usize>> {
        let start = document
            .char_indices()
            .map(|(byte, _)| byte)
            .chain(std::iter::once(document.len()))
            .nth(self.start?)?;
        let end = start + self.len();
        (document.get(start..end)? == self.text).then_some(start..end)
    }
}

impl std::fmt::Display for Snippet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let chars = self.text.chars().count();
        match self.start {
            Some(start) => write!(
                f,
                "Snippet {{ index: {}, chars: {}..{} }}",
                self.index,
                start,
                start + chars
            ),
            None => write!(f, "Snippet {{ index: {}, chars: ?, len: {} }}", self.index, chars),
        }
    }
}

/// Attach character offsets to extracted chunks.
///
/// Each chunk is searched from just after the start of the previous match, so
/// repeated text resolves to its next occurrence and overlapping chunks are
/// still found. Characters are counted once across the whole document.
pub(crate) fn locate(document: &str, chunks: Vec<String>) -> Vec<Snippet> {
    let mut search_from = 0;
    // `chars` is the character count of `document[..counted]`.
    let mut counted = 0;
    let mut chars = 0;

    chunks
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| {
            let start = document[search_from..].find(&chunk).map(|pos| {
                let byte = search_from + pos;
                chars += document[counted..byte].chars().count();
                counted = byte;
                search_from = byte + chunk.chars().next().map_or(0, char::len_utf8);
                chars
            });
            Snippet::new(chunk, start, index)
        })
        .collect()
}
