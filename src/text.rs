//! Text post-processing helpers
//!
//! Character-boundary truncation, sentence splitting, and paragraph
//! filtering shared by the summarizer and answer selector.

use regex::Regex;
use std::sync::OnceLock;

/// Matches sentence-terminal punctuation followed by whitespace
fn sentence_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]\s+").expect("valid sentence boundary pattern"))
}

/// Truncate text to at most `max_chars` characters (not bytes)
///
/// Article bodies are multilingual, so slicing by byte index could split a
/// multi-byte character. The cut is a raw character prefix, not sentence or
/// word aware.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Split text into sentences on `.`, `!` or `?` followed by whitespace
///
/// Each returned sentence keeps its terminal punctuation. Text after the
/// last boundary is returned as a final sentence even without punctuation.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut last = 0;
    for boundary in sentence_boundary().find_iter(text) {
        // The punctuation character is single-byte, include it in the sentence
        sentences.push(&text[last..boundary.start() + 1]);
        last = boundary.end();
    }
    if last < text.len() {
        sentences.push(&text[last..]);
    }

    sentences
}

/// Split text on line breaks, keeping trimmed paragraphs longer than `min_chars`
///
/// A length heuristic, not a semantic boundary: paragraphs without a line
/// break between them are never split further.
pub fn split_paragraphs(text: &str, min_chars: usize) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|p| p.chars().count() > min_chars)
        .collect()
}
