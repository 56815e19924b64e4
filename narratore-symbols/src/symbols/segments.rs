//! Highlight segmentation
//!
//! Partitions the source text into ordered plain and symbol segments whose
//! concatenation reproduces the text exactly.

use crate::models::{ExtractedSymbol, SymbolOccurrence, TextSegment};

/// Build the segment sequence for `text`
///
/// Occurrences are sorted here (start ascending, longer first on equal start).
/// Overlaps are resolved first-wins: an occurrence starting before the end of
/// the previously emitted one is dropped, as is any occurrence outside the
/// text. An occurrence whose symbol is missing from `symbol_data` is emitted
/// as plain text.
pub fn build(
    text: &str,
    occurrences: &[SymbolOccurrence],
    symbol_data: &[ExtractedSymbol],
) -> Vec<TextSegment> {
    let chars: Vec<char> = text.chars().collect();
    let slice = |start: usize, end: usize| chars[start..end].iter().collect::<String>();

    let mut sorted: Vec<&SymbolOccurrence> = occurrences.iter().collect();
    sorted.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut segments = Vec::new();
    let mut last_end = 0;

    for occurrence in sorted {
        if occurrence.start >= occurrence.end || occurrence.end > chars.len() {
            tracing::debug!(
                symbol = %occurrence.symbol,
                start = occurrence.start,
                end = occurrence.end,
                "Dropping out-of-range occurrence"
            );
            continue;
        }

        if occurrence.start < last_end {
            tracing::debug!(
                symbol = %occurrence.symbol,
                start = occurrence.start,
                last_end,
                "Dropping overlapping occurrence"
            );
            continue;
        }

        if occurrence.start > last_end {
            segments.push(TextSegment::plain(slice(last_end, occurrence.start)));
        }

        let span = slice(occurrence.start, occurrence.end);
        match find_symbol(symbol_data, &occurrence.symbol) {
            Some(data) => segments.push(TextSegment::symbol(span, data)),
            None => {
                tracing::debug!(symbol = %occurrence.symbol, "No symbol data, emitting plain span");
                segments.push(TextSegment::plain(span));
            }
        }

        last_end = occurrence.end;
    }

    if last_end < chars.len() {
        segments.push(TextSegment::plain(slice(last_end, chars.len())));
    }

    segments
}

fn find_symbol<'a>(symbol_data: &'a [ExtractedSymbol], name: &str) -> Option<&'a ExtractedSymbol> {
    let name = name.to_lowercase();
    symbol_data.iter().find(|s| s.symbol.to_lowercase() == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::locator::locate;

    fn occ(symbol: &str, start: usize, end: usize) -> SymbolOccurrence {
        SymbolOccurrence {
            symbol: symbol.to_string(),
            start,
            end,
        }
    }

    fn joined(segments: &[TextSegment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_two_symbols_four_segments() {
        let text = "Ho visto un serpente vicino all'acqua";
        let symbols = vec![
            ExtractedSymbol::new("Serpente", "Trasformazione."),
            ExtractedSymbol::new("Acqua", "Emozioni."),
        ];
        let occurrences = locate(text, &symbols);
        let segments = build(text, &occurrences, &symbols);

        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0], TextSegment::plain("Ho visto un "));
        assert_eq!(segments[1].text, "serpente");
        assert!(segments[1].is_symbol);
        assert_eq!(segments[1].symbol.as_deref(), Some("Serpente"));
        assert_eq!(segments[1].brief_description.as_deref(), Some("Trasformazione."));
        assert_eq!(segments[2], TextSegment::plain(" vicino all'"));
        assert_eq!(segments[3].text, "acqua");
        assert!(segments[3].is_symbol);
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn test_no_occurrences_single_plain_segment() {
        let segments = build("un sogno tranquillo", &[], &[]);
        assert_eq!(segments, vec![TextSegment::plain("un sogno tranquillo")]);
    }

    #[test]
    fn test_empty_text_yields_no_segments() {
        assert!(build("", &[], &[]).is_empty());
    }

    #[test]
    fn test_unknown_symbol_emitted_as_plain() {
        let text = "una luna piena";
        let segments = build(text, &[occ("luna", 4, 8)], &[]);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1], TextSegment::plain("luna"));
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let text = "casa e mare";
        let symbols = vec![ExtractedSymbol::new("casa", "c"), ExtractedSymbol::new("mare", "m")];
        let segments = build(text, &[occ("mare", 7, 11), occ("casa", 0, 4)], &symbols);

        let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["casa", " e ", "mare"]);
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn test_overlap_first_wins() {
        let text = "mare nostrum blu";
        let symbols = vec![
            ExtractedSymbol::new("mare", "m"),
            ExtractedSymbol::new("mare nostrum", "mn"),
            ExtractedSymbol::new("nostrum", "n"),
        ];
        let occurrences = vec![occ("mare", 0, 4), occ("nostrum", 5, 12), occ("mare nostrum", 0, 12)];
        let segments = build(text, &occurrences, &symbols);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].symbol.as_deref(), Some("mare nostrum"));
        assert_eq!(segments[1], TextSegment::plain(" blu"));
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn test_out_of_range_occurrences_dropped() {
        let text = "breve";
        let symbols = vec![ExtractedSymbol::new("x", "")];
        let segments = build(text, &[occ("x", 2, 40), occ("x", 3, 3)], &symbols);
        assert_eq!(segments, vec![TextSegment::plain("breve")]);
    }

    #[test]
    fn test_symbol_lookup_case_insensitive() {
        let text = "il Mare";
        let symbols = vec![ExtractedSymbol::new("MARE", "m")];
        let segments = build(text, &[occ("mare", 3, 7)], &symbols);

        assert_eq!(segments[1].text, "Mare");
        assert_eq!(segments[1].symbol.as_deref(), Some("MARE"));
    }

    #[test]
    fn test_coverage_with_multibyte_text() {
        let text = "Città sull'acqua, perché no? Acqua ovunque è";
        let symbols = vec![ExtractedSymbol::new("acqua", "a"), ExtractedSymbol::new("città", "c")];
        let segments = build(text, &locate(text, &symbols), &symbols);

        assert_eq!(joined(&segments), text);
        assert_eq!(segments.iter().filter(|s| s.is_symbol).count(), 3);
    }
}
