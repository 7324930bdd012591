//! Scenario and coverage tests for snippet extraction.
//!
//! These tests run the full extractor with a byte-length metric, so expected
//! snippets can be worked out by hand.

use std::sync::Arc;

use snippet_extractor::{
    Config, FragmentSplitter, Language, LengthFunction, RecursiveCharacterSplitter,
    SentenceSplitter, SnippetExtractor, SplitterConfig, Utf8Length,
};

fn extractor(language: Language, chunk_size: usize, hard_chunk_size_limit: usize) -> SnippetExtractor {
    SnippetExtractor::with_length_function(
        Config {
            language,
            chunk_size,
            hard_chunk_size_limit,
            ..Config::default()
        },
        Arc::new(Utf8Length),
    )
    .unwrap()
}

fn visible(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn single_short_sentence() {
    let snippets = extractor(Language::English, 50, 50).extract("Hello world.");
    assert_eq!(snippets, ["Hello world."]);
}

#[test]
fn three_short_paragraphs() {
    let text = "First paragraph is here.\n\nSecond paragraph follows.\n\nThird one ends it.";

    // Everything fits: one snippet with the paragraphs in order.
    let snippets = extractor(Language::English, 100, 100).extract(text);
    assert_eq!(snippets, [text]);

    // Two paragraphs fit per snippet.
    let snippets = extractor(Language::English, 55, 55).extract(text);
    assert_eq!(
        snippets,
        [
            "First paragraph is here.\n\nSecond paragraph follows.",
            "Third one ends it."
        ]
    );

    // One paragraph per snippet.
    let snippets = extractor(Language::English, 30, 30).extract(text);
    assert_eq!(
        snippets,
        [
            "First paragraph is here.",
            "Second paragraph follows.",
            "Third one ends it."
        ]
    );
}

#[test]
fn sentence_over_the_hard_limit_is_split() {
    let text = "Short intro. This single sentence is far longer than the hard limit allows for one snippet. Outro.";
    let snippets = extractor(Language::English, 30, 35).extract(text);

    assert!(snippets.len() >= 4, "{snippets:?}");
    for snippet in &snippets {
        assert!(Utf8Length.length(snippet) <= 35, "too long: {snippet:?}");
    }
    assert_eq!(visible(&snippets.concat()), visible(text));
}

#[test]
fn german_and_english_boundaries_differ() {
    let text = "Dr. Müller kam am 3. Oktober. Er blieb lange.";

    let german = extractor(Language::German, 30, 30).extract(text);
    assert_eq!(german, ["Dr. Müller kam am 3. Oktober.", "Er blieb lange."]);

    let english = extractor(Language::English, 30, 30).extract(text);
    assert_eq!(english, ["Dr. Müller kam am 3.", "Oktober.\n\nEr blieb lange."]);
}

#[test]
fn abbreviation_stays_in_sentence() {
    let snippets = extractor(Language::German, 16, 16).extract("Dr. Müller kam.");
    assert_eq!(snippets, ["Dr. Müller kam."]);
}

// =============================================================================
// Degenerate input
// =============================================================================

#[test]
fn empty_and_whitespace_documents() {
    let extractor = extractor(Language::English, 20, 20);
    assert!(extractor.extract("").is_empty());
    assert!(extractor.extract("  \n\n\t  ").is_empty());
}

#[test]
fn document_shorter_than_chunk_size_is_trimmed() {
    let snippets = extractor(Language::English, 100, 100).extract("\n  Just one line.  \n");
    assert_eq!(snippets, ["Just one line."]);
}

#[test]
fn long_word_without_separators() {
    let text = "x".repeat(95);
    let snippets = extractor(Language::English, 20, 25).extract(&text);

    assert_eq!(snippets.len(), 5);
    assert!(snippets.iter().all(|s| s.len() <= 20));
    assert_eq!(snippets.concat(), text);
}

#[test]
fn unicode_handling() {
    let text = "Hello 世界! Привет мир! مرحبا بالعالم. Grüße aus Köln.";
    let snippets = extractor(Language::German, 12, 14).extract(text);

    for snippet in &snippets {
        assert!(snippet.len() <= 14, "too long: {snippet:?}");
    }
    assert_eq!(visible(&snippets.concat()), visible(text));
}

// =============================================================================
// Offsets
// =============================================================================

#[test]
fn offsets_point_into_the_document() {
    let text = "One sentence here. Another sentence there. And a third one.";
    let snippets = extractor(Language::English, 20, 25).extract_snippets(text);

    assert_eq!(snippets.len(), 3);
    for (index, snippet) in snippets.iter().enumerate() {
        assert_eq!(snippet.index, index);
        let span = snippet.span(text).expect("verbatim snippet");
        assert_eq!(&text[span], snippet.text);
    }
}

#[test]
fn offsets_count_characters_not_bytes() {
    let text = "Grüße aus Köln. Bis bald.";
    let snippets = extractor(Language::German, 18, 18).extract_snippets(text);

    let starts: Vec<_> = snippets.iter().map(|s| (s.text.as_str(), s.start)).collect();
    assert_eq!(starts, [("Grüße aus Köln.", Some(0)), ("Bis bald.", Some(16))]);
    assert_eq!(snippets[1].span(text), Some(19..28));
}

#[test]
fn rejoined_snippet_has_no_offset() {
    let text = "Dr. Müller kam am 3. Oktober. Er blieb lange.";
    let snippets = extractor(Language::English, 30, 30).extract_snippets(text);

    assert_eq!(snippets[0].start, Some(0));
    assert_eq!(snippets[1].text, "Oktober.\n\nEr blieb lange.");
    assert_eq!(snippets[1].start, None);
}

// =============================================================================
// Splitters on their own
// =============================================================================

#[test]
fn recursive_splitter_prefers_paragraphs() {
    let text = "First paragraph with words.\n\nSecond paragraph with words.";
    let config = SplitterConfig::new(40, Arc::new(Utf8Length)).unwrap();
    let chunks = RecursiveCharacterSplitter::new(config).split(text);

    assert_eq!(
        chunks,
        ["First paragraph with words.", "Second paragraph with words."]
    );
}

#[test]
fn sentence_splitter_is_deterministic() {
    let text = "The quick brown fox jumps over the lazy dog. Pack my box.";
    let config = SplitterConfig::new(30, Arc::new(Utf8Length)).unwrap();
    let splitter = SentenceSplitter::new(Language::English, config);

    assert_eq!(splitter.split(text), splitter.split(text));
}
