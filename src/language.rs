//! Language-aware sentence boundaries.
//!
//! ## The Hard Part: Finding Sentences
//!
//! Unicode Standard Annex #29 (UAX #29) gives a language-neutral baseline, and
//! it breaks far too often for real documents:
//!
//! ```text
//! "Dr. Müller kam am 3. Oktober.\nEr blieb."
//!      ^            ^             ^
//!      abbreviation ordinal       line feed inside a paragraph
//! ```
//!
//! Each UAX #29 boundary is therefore checked against language rules before
//! it is accepted:
//!
//! - A boundary after `.` is dropped when the word before the period is a
//!   known abbreviation of the language ("Dr.", "bzw.") or an initialism
//!   ("e.g.", "U.S.").
//! - Some abbreviations are also ordinary words or letters ("no.", "etc.",
//!   "Plan A."). Those only hold the sentence together when the next word
//!   starts in lowercase, with a digit, or is itself a single letter with a
//!   period ("z. B.").
//! - German writes ordinals with a period, so a one- or two-digit number
//!   before `.` does not end a sentence there ("am 3. Oktober").
//! - A boundary that only exists because of a line feed is dropped; a blank
//!   line always ends a sentence.
//!
//! The same text can thus split differently per language:
//!
//! ```rust
//! use snippet_extractor::Language;
//!
//! let text = "Sie kam am 3. Oktober. Er blieb.";
//! assert_eq!(Language::German.sentences(text), ["Sie kam am 3. Oktober.", "Er blieb."]);
//! assert_eq!(Language::English.sentences(text).len(), 3);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::Error;

/// Languages with sentence boundary rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    English,
    /// German
    German,
    /// French
    French,
    /// Spanish
    Spanish,
    /// Italian
    Italian,
    /// Dutch
    Dutch,
}

const ENGLISH_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "vs", "etc", "inc", "ltd", "co", "corp",
    "no", "fig", "approx", "dept", "est", "gen", "gov", "sen", "rep", "rev", "jan", "feb", "mar",
    "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "mt", "vol", "pp",
];

const GERMAN_ABBREVIATIONS: &[&str] = &[
    "dr", "prof", "hr", "hrn", "fr", "frl", "nr", "str", "abs", "art", "bzw", "ca", "vgl", "usw",
    "ggf", "evtl", "inkl", "exkl", "zzgl", "bspw", "sog", "gem", "geb", "gest", "tel", "jh",
    "jhd", "mio", "mrd", "bzgl", "ff", "s", "z", "d", "u", "o", "a", "v", "dt", "allg", "betr",
    "ehem", "einschl", "max", "min", "mind", "urspr", "verh", "zt", "ua", "uä", "dh", "zb",
];

const FRENCH_ABBREVIATIONS: &[&str] = &[
    "m", "mm", "mme", "mmes", "mlle", "dr", "pr", "me", "st", "ste", "etc", "cf", "env", "av",
    "bd", "fig", "p", "vol", "no", "janv", "févr", "avr", "juil", "sept", "oct", "nov", "déc",
];

const SPANISH_ABBREVIATIONS: &[&str] = &[
    "sr", "sra", "srta", "dr", "dra", "d", "dña", "ud", "uds", "etc", "pág", "núm", "no", "av",
    "avda", "cía", "ej", "aprox", "ene", "feb", "abr", "jun", "jul", "ago", "sept", "oct", "nov",
    "dic",
];

const ITALIAN_ABBREVIATIONS: &[&str] = &[
    "sig", "sigg", "sig.ra", "dott", "dr", "prof", "avv", "ing", "arch", "geom", "ecc", "pag",
    "n", "nr", "es", "cfr", "ca", "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set",
    "ott", "nov", "dic",
];

const DUTCH_ABBREVIATIONS: &[&str] = &[
    "dhr", "mevr", "mr", "dr", "prof", "ir", "ing", "drs", "bijv", "bv", "enz", "etc", "nl", "nr",
    "blz", "ca", "jl", "vgl", "resp", "zgn", "mv", "evt", "jan", "feb", "mrt", "apr", "jun", "jul",
    "aug", "sep", "okt", "nov", "dec",
];

// Abbreviations that also end sentences as plain words. Single letters are
// always treated this way.
const ENGLISH_AMBIGUOUS: &[&str] = &["no", "etc", "est", "gen", "mar"];
const GERMAN_AMBIGUOUS: &[&str] = &["art", "usw", "max", "min", "mind"];
const FRENCH_AMBIGUOUS: &[&str] = &["etc", "env"];
const SPANISH_AMBIGUOUS: &[&str] = &["no", "etc"];
const ITALIAN_AMBIGUOUS: &[&str] = &["ecc"];
const DUTCH_AMBIGUOUS: &[&str] = &["enz", "etc"];

/// Closing punctuation that may follow a sentence terminator.
const CLOSING: &[char] = &['"', '\'', ')', ']', '}', '»', '«', '“', '”', '‘', '’'];

impl Language {
    /// All languages with sentence rules.
    pub const ALL: [Self; 6] = [
        Self::English,
        Self::German,
        Self::French,
        Self::Spanish,
        Self::Italian,
        Self::Dutch,
    ];

    /// The lowercase English name, as used in configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::German => "german",
            Self::French => "french",
            Self::Spanish => "spanish",
            Self::Italian => "italian",
            Self::Dutch => "dutch",
        }
    }

    /// ISO 639-1 code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::German => "de",
            Self::French => "fr",
            Self::Spanish => "es",
            Self::Italian => "it",
            Self::Dutch => "nl",
        }
    }

    fn abbreviations(self) -> &'static [&'static str] {
        match self {
            Self::English => ENGLISH_ABBREVIATIONS,
            Self::German => GERMAN_ABBREVIATIONS,
            Self::French => FRENCH_ABBREVIATIONS,
            Self::Spanish => SPANISH_ABBREVIATIONS,
            Self::Italian => ITALIAN_ABBREVIATIONS,
            Self::Dutch => DUTCH_ABBREVIATIONS,
        }
    }

    fn ambiguous_abbreviations(self) -> &'static [&'static str] {
        match self {
            Self::English => ENGLISH_AMBIGUOUS,
            Self::German => GERMAN_AMBIGUOUS,
            Self::French => FRENCH_AMBIGUOUS,
            Self::Spanish => SPANISH_AMBIGUOUS,
            Self::Italian => ITALIAN_AMBIGUOUS,
            Self::Dutch => DUTCH_AMBIGUOUS,
        }
    }

    fn has_ordinal_dots(self) -> bool {
        matches!(self, Self::German)
    }

    /// Split `text` into trimmed, non-empty sentences in source order.
    ///
    /// Whitespace inside a sentence, including line feeds, is preserved.
    pub fn sentences(self, text: &str) -> Vec<&str> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for (offset, bound) in text.split_sentence_bound_indices() {
            let end = offset + bound.len();
            if end < text.len() && !self.ends_sentence(&text[start..end], &text[end..]) {
                continue;
            }
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = end;
        }

        sentences
    }

    /// Whether the text up to a UAX #29 boundary is a complete sentence.
    ///
    /// `rest` is the text after the boundary.
    fn ends_sentence(self, candidate: &str, rest: &str) -> bool {
        let content = candidate.trim_end();
        let trailing = &candidate[content.len()..];
        if trailing.matches('\n').count() >= 2 {
            return true;
        }

        let content = content.trim_end_matches(CLOSING);
        match content.chars().next_back() {
            Some('.') => !self.is_abbreviation(&content[..content.len() - 1], rest),
            Some('!' | '?' | '…' | '‽' | '。' | '！' | '？') => true,
            // Only a line feed broke the text here.
            _ => false,
        }
    }

    /// Whether the word right before a period marks an abbreviation.
    fn is_abbreviation(self, before_period: &str, rest: &str) -> bool {
        let word = before_period
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or_default()
            .trim_start_matches(|c: char| !c.is_alphanumeric());
        if word.is_empty() {
            return false;
        }

        // e.g / U.S / z.B
        if word.contains('.') && word.split('.').all(|part| part.chars().count() == 1) {
            return true;
        }

        if self.has_ordinal_dots() && word.len() <= 2 && word.chars().all(|c| c.is_ascii_digit()) {
            return true;
        }

        let word = word.to_lowercase();
        if word.chars().count() == 1 || self.ambiguous_abbreviations().contains(&word.as_str()) {
            return continues_sentence(rest);
        }
        self.abbreviations().contains(&word.as_str())
    }
}

/// Whether the word after an ambiguous abbreviation continues the sentence.
fn continues_sentence(rest: &str) -> bool {
    let Some(next) = rest.split_whitespace().next() else {
        return false;
    };
    let next = next.trim_start_matches(|c: char| !c.is_alphanumeric());
    let mut chars = next.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(first), _, _) if first.is_lowercase() || first.is_numeric() => true,
        // "z. B.", "d. h."
        (Some(letter), Some('.'), None) => letter.is_alphabetic(),
        _ => false,
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|language| language.as_str() == wanted || language.code() == wanted)
            .ok_or_else(|| Error::UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_sentences() {
        let sentences = Language::English.sentences("Hello world. How are you? I am fine.");
        assert_eq!(sentences, ["Hello world.", "How are you?", "I am fine."]);
    }

    #[test]
    fn test_abbreviation_keeps_sentence() {
        assert_eq!(Language::German.sentences("Dr. Müller kam."), ["Dr. Müller kam."]);
        assert_eq!(Language::English.sentences("Dr. Smith came."), ["Dr. Smith came."]);
    }

    #[test]
    fn test_german_ordinals() {
        let text = "Dr. Müller kam am 3. Oktober. Er blieb.";
        assert_eq!(
            Language::German.sentences(text),
            ["Dr. Müller kam am 3. Oktober.", "Er blieb."]
        );
        assert_eq!(
            Language::English.sentences(text),
            ["Dr. Müller kam am 3.", "Oktober.", "Er blieb."]
        );
    }

    #[test]
    fn test_single_letter_ends_sentence_before_capital() {
        let sentences = Language::German.sentences("Wir nehmen Plan A. Dann geht es los.");
        assert_eq!(sentences, ["Wir nehmen Plan A.", "Dann geht es los."]);
    }

    #[test]
    fn test_ambiguous_word_ends_sentence_before_capital() {
        let sentences = Language::English.sentences("The answer is no. We left early.");
        assert_eq!(sentences, ["The answer is no.", "We left early."]);

        let sentences = Language::English.sentences("Bring pens, paper etc. The rest is here.");
        assert_eq!(sentences, ["Bring pens, paper etc.", "The rest is here."]);
    }

    #[test]
    fn test_ambiguous_abbreviation_before_number() {
        let sentences = Language::English.sentences("See no. 5 on the list. Then stop.");
        assert_eq!(sentences, ["See no. 5 on the list.", "Then stop."]);
    }

    #[test]
    fn test_spaced_german_abbreviations() {
        let sentences = Language::German.sentences("Das gilt z. B. für alle. Danach nicht.");
        assert_eq!(sentences, ["Das gilt z. B. für alle.", "Danach nicht."]);
    }

    #[test]
    fn test_year_still_ends_german_sentence() {
        let sentences = Language::German.sentences("Das war 2023. Danach nicht mehr.");
        assert_eq!(sentences, ["Das war 2023.", "Danach nicht mehr."]);
    }

    #[test]
    fn test_initialisms() {
        let sentences = Language::English.sentences("Use a tool, e.g. A hammer. Done.");
        assert_eq!(sentences, ["Use a tool, e.g. A hammer.", "Done."]);
    }

    #[test]
    fn test_line_feed_inside_sentence() {
        let text = "Die Unternehmen sind vor der\nErteilung zu benennen. Danach folgt mehr.";
        assert_eq!(
            Language::German.sentences(text),
            [
                "Die Unternehmen sind vor der\nErteilung zu benennen.",
                "Danach folgt mehr."
            ]
        );
    }

    #[test]
    fn test_blank_line_ends_sentence() {
        let sentences = Language::English.sentences("A heading\n\nBody text here.");
        assert_eq!(sentences, ["A heading", "Body text here."]);
    }

    #[test]
    fn test_quotes_after_terminator() {
        let sentences = Language::English.sentences("He said \"stop.\" Then he left.");
        assert_eq!(sentences, ["He said \"stop.\"", "Then he left."]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(Language::English.sentences("").is_empty());
        assert!(Language::English.sentences("  \n\t ").is_empty());
    }

    #[test]
    fn test_parse_names_and_codes() {
        assert_eq!("german".parse::<Language>().unwrap(), Language::German);
        assert_eq!("DE".parse::<Language>().unwrap(), Language::German);
        assert_eq!(" English ".parse::<Language>().unwrap(), Language::English);
        assert!(matches!(
            "klingon".parse::<Language>(),
            Err(Error::UnknownLanguage(name)) if name == "klingon"
        ));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for language in Language::ALL {
            assert_eq!(language.to_string().parse::<Language>().unwrap(), language);
        }
    }
}
