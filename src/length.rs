//! Length functions: how big is a piece of text?
//!
//! Every splitter compares candidate chunks against a size limit, and the unit
//! of that limit depends on who consumes the snippets:
//!
//! | Metric | Type | Typical consumer |
//! |--------|------|------------------|
//! | UTF-8 bytes | [`Utf8Length`] | storage or payload budgets |
//! | Unicode scalar values | [`CharCount`] | display, rough estimates |
//! | Model tokens | [`TokenCount`](crate::TokenCount) | embedding models with a context window |
//!
//! The metric is always injected, never hardcoded. Plain closures work too:
//!
//! ```rust
//! use snippet_extractor::LengthFunction;
//!
//! let words = |text: &str| text.split_whitespace().count();
//! assert_eq!(words.length("three little words"), 3);
//! ```
//!
//! A length function must be deterministic, return 0 for `""`, and should not
//! shrink when text is appended. The greedy merge relies on the latter.

/// Maps a piece of text to its size under some metric.
pub trait LengthFunction: Send + Sync {
    /// The size of `text`.
    fn length(&self, text: &str) -> usize;
}

impl<F> LengthFunction for F
where
    F: Fn(&str) -> usize + Send + Sync,
{
    fn length(&self, text: &str) -> usize {
        self(text)
    }
}

/// Length in UTF-8 bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Length;

impl LengthFunction for Utf8Length {
    fn length(&self, text: &str) -> usize {
        text.len()
    }
}

/// Length in Unicode scalar values.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharCount;

impl LengthFunction for CharCount {
    fn length(&self, text: &str) -> usize {
        text.chars().count()
    }
}
