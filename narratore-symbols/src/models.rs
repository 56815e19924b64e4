//! Request-scoped data types exchanged by the symbol pipeline
//!
//! JSON field names are camelCase to match the web client.

use serde::{Deserialize, Serialize};

/// A symbol extracted from dream text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedSymbol {
    /// Display name, original case as produced by the extractor
    pub symbol: String,
    /// Short description (one sentence)
    #[serde(default)]
    pub brief_description: String,
}

impl ExtractedSymbol {
    pub fn new(symbol: impl Into<String>, brief_description: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            brief_description: brief_description.into(),
        }
    }
}

/// A whole-word occurrence of a symbol in the source text
///
/// `start`/`end` are character (Unicode scalar) offsets, `0 <= start < end <= len`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolOccurrence {
    pub symbol: String,
    pub start: usize,
    pub end: usize,
}

/// A contiguous slice of the source text, plain or symbol-bearing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSegment {
    pub text: String,
    pub is_symbol: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief_description: Option<String>,
}

impl TextSegment {
    /// Plain (non-symbol) segment
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_symbol: false,
            symbol: None,
            brief_description: None,
        }
    }

    /// Symbol segment carrying the data needed for hover rendering
    pub fn symbol(text: impl Into<String>, symbol: &ExtractedSymbol) -> Self {
        Self {
            text: text.into(),
            is_symbol: true,
            symbol: Some(symbol.symbol.clone()),
            brief_description: Some(symbol.brief_description.clone()),
        }
    }
}

/// Which path produced an extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractionSource {
    /// Generative-text collaborator
    Generated,
    /// Deterministic keyword table
    #[default]
    Fallback,
}

/// Result of symbol extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub main_symbols: Vec<ExtractedSymbol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_positions: Option<Vec<SymbolOccurrence>>,
    #[serde(skip)]
    pub source: ExtractionSource,
}

impl ExtractionResult {
    pub fn empty(source: ExtractionSource) -> Self {
        Self {
            main_symbols: Vec::new(),
            symbol_positions: None,
            source,
        }
    }
}

/// Interpretive meanings of a symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolMeanings {
    pub general: String,
    pub psychological: String,
    #[serde(default)]
    pub cultural: Vec<String>,
}

/// Detailed dictionary entry for a symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    pub symbol: String,
    pub meanings: SymbolMeanings,
    #[serde(default)]
    pub related_symbols: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Extracted symbols together with the highlight segmentation of the text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightResult {
    pub main_symbols: Vec<ExtractedSymbol>,
    pub segments: Vec<TextSegment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_segment_omits_symbol_fields() {
        let value = serde_json::to_value(TextSegment::plain("ciao")).unwrap();
        assert_eq!(value, json!({ "text": "ciao", "isSymbol": false }));
    }

    #[test]
    fn test_extraction_result_omits_missing_positions() {
        let result = ExtractionResult {
            main_symbols: vec![ExtractedSymbol::new("Acqua", "Emozioni.")],
            symbol_positions: None,
            source: ExtractionSource::Fallback,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({ "mainSymbols": [{ "symbol": "Acqua", "briefDescription": "Emozioni." }] })
        );
    }

    #[test]
    fn test_symbol_info_tolerates_missing_lists() {
        let info: SymbolInfo = serde_json::from_value(json!({
            "symbol": "Luna",
            "meanings": { "general": "g", "psychological": "p" }
        }))
        .unwrap();
        assert!(info.related_symbols.is_empty());
        assert!(info.categories.is_empty());
        assert!(info.meanings.cultural.is_empty());
    }
}
