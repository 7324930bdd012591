//! Greedy merging of small fragments into near-target-size chunks.
//!
//! Every splitter first cuts text into fragments (sentences, paragraphs,
//! words, characters) and then packs them back together here.
//!
//! ## The Window
//!
//! ```text
//! chunk_size = 10, overlap = 4, separator = " "
//! fragments:   [aaa] [bbb] [cc] [dddd] [e]
//!
//! window [aaa bbb]       + cc   -> 10 > 10? no, fits
//! window [aaa bbb cc]    + dddd -> would be 15, close "aaa bbb cc"
//!   drop from the front until the window is <= overlap and dddd fits:
//! window [cc]            + dddd -> "cc dddd"
//! window [cc dddd]       + e    -> fits
//! flush                         -> "cc dddd e"
//! ```
//!
//! Window length is the sum of fragment lengths plus one separator length per
//! join. With a token metric that is an estimate; with bytes it is exact.
//!
//! A fragment that is larger than `chunk_size` on its own is emitted alone.
//! Splitting it further is the caller's job.

use std::collections::VecDeque;

use tracing::warn;

use crate::SplitterConfig;

/// Merge `splits` into chunks of at most `config.chunk_size()`, rejoined with
/// `separator`.
///
/// Chunks are trimmed; chunks that are empty after trimming are dropped.
///
/// ```rust
/// use std::sync::Arc;
/// use snippet_extractor::{merge_splits, SplitterConfig, Utf8Length};
///
/// let config = SplitterConfig::new(11, Arc::new(Utf8Length))?;
/// let chunks = merge_splits(&["one", "two", "three", "four"], " ", &config);
/// assert_eq!(chunks, ["one two", "three four"]);
/// # Ok::<(), snippet_extractor::Error>(())
/// ```
pub fn merge_splits<S: AsRef<str>>(
    splits: &[S],
    separator: &str,
    config: &SplitterConfig,
) -> Vec<String> {
    let chunk_size = config.chunk_size();
    let separator_len = config.length(separator);
    let joined = |window: &VecDeque<&str>| if window.is_empty() { 0 } else { separator_len };

    let mut chunks = Vec::new();
    let mut window: VecDeque<&str> = VecDeque::new();
    let mut total = 0usize;

    for split in splits {
        let split = split.as_ref();
        let split_len = config.length(split);

        if total + split_len + joined(&window) > chunk_size {
            if total > chunk_size {
                warn!(size = total, chunk_size, "created a chunk larger than the chunk size");
            }
            if !window.is_empty() {
                push_joined(&mut chunks, &window, separator);

                // Keep a suffix of at most `chunk_overlap` that still leaves room for `split`.
                while total > config.chunk_overlap()
                    || (total > 0 && total + split_len + joined(&window) > chunk_size)
                {
                    let Some(first) = window.pop_front() else {
                        break;
                    };
                    total = total.saturating_sub(config.length(first) + joined(&window));
                }
            }
        }

        window.push_back(split);
        total += split_len + if window.len() > 1 { separator_len } else { 0 };
    }

    if total > chunk_size {
        warn!(size = total, chunk_size, "created a chunk larger than the chunk size");
    }
    push_joined(&mut chunks, &window, separator);
    chunks
}

fn push_joined(chunks: &mut Vec<String>, window: &VecDeque<&str>, separator: &str) {
    let chunk = window
        .iter()
        .copied()
        .collect::<Vec<_>>()
        .join(separator);
    let chunk = chunk.trim();
    if !chunk.is_empty() {
        chunks.push(chunk.to_string());
    }
}
