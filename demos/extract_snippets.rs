//! Extract Snippets
//!
//! Split a German document into snippets. Sizes are measured in tokens when a
//! tokenizer file is given, in bytes otherwise.
//!
//! ```bash
//! cargo run --example extract_snippets -- assets/tokenizer.json
//! ```

use std::sync::Arc;

use snippet_extractor::{Config, Language, SnippetExtractor, Utf8Length};

fn main() -> Result<(), snippet_extractor::Error> {
    tracing_subscriber::fmt::init();

    let document = "Dr. Müller kam am 3. Oktober nach Berlin. Er blieb bis zum 5. November, \
        z. B. wegen der Messe.\n\n\
        Die Stadt war voll. Jeder Zug, jede Straße und jedes Hotel war ausgebucht, \
        und niemand wusste so recht, wie lange das noch so weitergehen würde.";

    let config = Config {
        language: Language::German,
        chunk_size: 60,
        hard_chunk_size_limit: 70,
        ..Config::default()
    };

    let extractor = match std::env::args().nth(1) {
        Some(tokenizer_file) => SnippetExtractor::new(Config {
            tokenizer_file: tokenizer_file.into(),
            ..config
        })?,
        None => SnippetExtractor::with_length_function(config, Arc::new(Utf8Length))?,
    };

    let snippets = extractor.extract_snippets(document);
    println!("Document: {} bytes", document.len());
    println!("Snippets: {}\n", snippets.len());

    for snippet in &snippets {
        let start = snippet
            .start
            .map_or_else(|| "-".to_string(), |start| start.to_string());
        println!("[{}] @{}: {:?}", snippet.index, start, snippet.text);
    }

    Ok(())
}
