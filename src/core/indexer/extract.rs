//! Title and text extraction from HTML markup.
//!
//! Extraction is pattern-based, not a structural parse: script,
//! style and title blocks are removed first, remaining tags are
//! stripped, character entities are decoded, and whitespace is
//! collapsed. Malformed markup never fails; unmatched constructs
//! are simply left as text.
//!
//! The stage order is a contract: script/style removal must
//! precede generic tag stripping so embedded code and CSS never
//! leak into the index, and entity decoding runs after stripping
//! so `&lt;b&gt;` decodes to literal text instead of being eaten
//! as a tag.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Regex patterns compiled once at startup
static TITLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title>(.*?)</title>").unwrap());

// Elements whose entire content is dropped from the body text:
// script and style carry code, title is reported separately.
static NON_CONTENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script.*?</script>|<style.*?</style>|<title.*?</title>").unwrap()
});

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

static ENTITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(?:#[xX](?P<hex>[0-9a-fA-F]+)|#(?P<dec>[0-9]+)|(?P<named>[a-zA-Z][a-zA-Z0-9]*));")
        .unwrap()
});

/// Extract the document title.
///
/// Takes the inner content of the first `<title>...</title>`
/// element (case-insensitive, content may span lines), trimmed.
/// Returns the empty string when the document has no title.
pub fn extract_title(html: &str) -> String {
    TITLE_PATTERN
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Extract whitespace-normalized plain text from markup.
///
/// Pipeline, in order:
///
/// 1. Remove entire `<script>`, `<style>` and `<title>` blocks,
///    each replaced by a single space
/// 2. Strip all remaining `<...>` tags, each replaced by a
///    single space
/// 3. Decode character entities (`&amp;` → `&`)
/// 4. Collapse every whitespace run to one ASCII space and trim
pub fn extract_text(html: &str) -> String {
    let without_blocks = NON_CONTENT_PATTERN.replace_all(html, " ");
    let without_tags = TAG_PATTERN.replace_all(&without_blocks, " ");
    let decoded = decode_entities(&without_tags);

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode HTML/XML character entities into literal text.
///
/// Handles numeric references in decimal (`&#233;`) and hex
/// (`&#xE9;`) form plus the named entities in [`named_entity`].
/// Unknown names and invalid code points pass through untouched.
pub fn decode_entities(text: &str) -> String {
    ENTITY_PATTERN
        .replace_all(text, |caps: &Captures| {
            let decoded = if let Some(hex) = caps.name("hex") {
                u32::from_str_radix(hex.as_str(), 16)
                    .ok()
                    .and_then(char::from_u32)
                    .map(String::from)
            } else if let Some(dec) = caps.name("dec") {
                dec.as_str()
                    .parse::<u32>()
                    .ok()
                    .and_then(char::from_u32)
                    .map(String::from)
            } else {
                named_entity(&caps["named"]).map(String::from)
            };

            decoded.unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Look up a named entity. Names are case-sensitive, per the
/// HTML entity tables.
fn named_entity(name: &str) -> Option<&'static str> {
    let decoded = match name {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => "\u{a0}",
        "shy" => "\u{ad}",
        "copy" => "\u{a9}",
        "reg" => "\u{ae}",
        "trade" => "\u{2122}",
        "sect" => "\u{a7}",
        "para" => "\u{b6}",
        "deg" => "\u{b0}",
        "plusmn" => "\u{b1}",
        "times" => "\u{d7}",
        "divide" => "\u{f7}",
        "middot" => "\u{b7}",
        "bull" => "\u{2022}",
        "hellip" => "\u{2026}",
        "ndash" => "\u{2013}",
        "mdash" => "\u{2014}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "ldquo" => "\u{201c}",
        "rdquo" => "\u{201d}",
        "laquo" => "\u{ab}",
        "raquo" => "\u{bb}",
        "prime" => "\u{2032}",
        "Prime" => "\u{2033}",
        "dagger" => "\u{2020}",
        "Dagger" => "\u{2021}",
        "permil" => "\u{2030}",
        "minus" => "\u{2212}",
        "larr" => "\u{2190}",
        "rarr" => "\u{2192}",
        "cent" => "\u{a2}",
        "pound" => "\u{a3}",
        "yen" => "\u{a5}",
        "euro" => "\u{20ac}",
        _ => return None,
    };
    Some(decoded)
}
