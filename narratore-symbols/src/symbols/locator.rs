//! Whole-word symbol position locator
//!
//! Offsets are counted in characters. Matching is case-insensitive through a
//! per-character fold that never changes the character count, so offsets found
//! in the folded text index the original text directly.

use crate::models::{ExtractedSymbol, SymbolOccurrence};
use std::collections::HashSet;

/// Punctuation accepted as a word boundary (in addition to whitespace)
const BOUNDARY_PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '"', '\'', '(', ')', '[', ']', '{', '}',
];

/// True if `c` may sit immediately before or after a whole-word match
pub fn is_boundary(c: char) -> bool {
    c.is_whitespace() || BOUNDARY_PUNCTUATION.contains(&c)
}

/// Lowercase a single character, keeping it unchanged when its lowercase
/// form spans several characters
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// Case-fold text into characters, one output character per input character
pub fn fold(text: &str) -> Vec<char> {
    text.chars().map(fold_char).collect()
}

/// Start offsets of every whole-word occurrence of `needle` in `haystack`
///
/// Every start position is tried, so a candidate rejected for boundary
/// reasons does not hide a valid one starting a character later.
pub fn find_word_starts(haystack: &[char], needle: &[char]) -> Vec<usize> {
    let n = needle.len();
    if n == 0 || n > haystack.len() {
        return Vec::new();
    }

    (0..=haystack.len() - n)
        .filter(|&start| {
            let end = start + n;
            haystack[start..end] == *needle
                && (start == 0 || is_boundary(haystack[start - 1]))
                && (end == haystack.len() || is_boundary(haystack[end]))
        })
        .collect()
}

/// True if `needle` occurs as a whole word anywhere in `haystack`
pub fn contains_word(haystack: &[char], needle: &[char]) -> bool {
    !find_word_starts(haystack, needle).is_empty()
}

/// Locate every whole-word occurrence of each symbol in `text`
///
/// Result is sorted by `start` ascending; equal starts put the longer match
/// first, then keep symbol order. Symbols repeated with different casing are
/// scanned once.
pub fn locate(text: &str, symbols: &[ExtractedSymbol]) -> Vec<SymbolOccurrence> {
    let folded_text = fold(text);
    let mut seen = HashSet::new();
    let mut occurrences = Vec::new();

    for entry in symbols {
        let needle = fold(&entry.symbol);
        if needle.is_empty() || !seen.insert(needle.clone()) {
            continue;
        }

        for start in find_word_starts(&folded_text, &needle) {
            occurrences.push(SymbolOccurrence {
                symbol: entry.symbol.clone(),
                start,
                end: start + needle.len(),
            });
        }
    }

    occurrences.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    tracing::debug!(
        symbols = symbols.len(),
        occurrences = occurrences.len(),
        "Located symbol occurrences"
    );

    occurrences
}
