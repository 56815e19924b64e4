//! Dream-symbol extraction
//!
//! Primary path asks the generative-text collaborator for up to
//! [`MAX_SYMBOLS`] symbols. Any collaborator failure (missing credentials,
//! network, quota, malformed output) is recovered here by the deterministic
//! keyword scan over the static catalog.

use crate::models::{ExtractedSymbol, ExtractionResult, ExtractionSource};
use crate::services::{parse_json_object, GenerationError, TextGenerator};
use crate::symbols::catalog::{self, KEYWORDS};
use crate::symbols::locator::{contains_word, fold, is_boundary, locate};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Upper bound on symbols returned by the primary path
pub const MAX_SYMBOLS: usize = 7;

/// Description attached to the generic symbol when no keyword matches
pub const GENERIC_SYMBOL_DESCRIPTION: &str =
    "Elemento che rappresenta aspetti della tua personalità o situazioni nella tua vita.";

/// Shape the collaborator is asked to produce
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedSymbols {
    main_symbols: Vec<ExtractedSymbol>,
}

/// Prompt for the primary extraction path
pub fn extraction_prompt(dream_text: &str) -> String {
    format!(
        r#"Analizza il seguente testo di un sogno ed estrai i simboli principali presenti. Identifica solo gli elementi significativi che potrebbero avere un valore simbolico nell'interpretazione dei sogni.

Per ogni simbolo, fornisci una brevissima descrizione (massimo 10-15 parole).

Testo del sogno:
"{dream_text}"

Rispondi in formato JSON con la seguente struttura:
{{
  "mainSymbols": [
    {{
      "symbol": "nome del simbolo",
      "briefDescription": "breve descrizione"
    }}
  ]
}}

Limita la risposta a massimo {MAX_SYMBOLS} simboli, selezionando quelli più significativi."#
    )
}

/// Extract symbols from `text`, optionally with their positions
///
/// Never fails: blank text yields an empty list and collaborator errors fall
/// back to the keyword scan.
pub async fn extract(
    generator: Option<&dyn TextGenerator>,
    text: &str,
    include_positions: bool,
) -> ExtractionResult {
    if text.trim().is_empty() {
        return ExtractionResult::empty(ExtractionSource::Fallback);
    }

    let (main_symbols, source) = match generator {
        None => {
            info!("No text generator configured, using fallback symbol data");
            (fallback_symbols(text), ExtractionSource::Fallback)
        }
        Some(generator) => match generate_symbols(generator, text).await {
            Ok(symbols) => {
                debug!(generator = generator.name(), count = symbols.len(), "Symbols generated");
                (symbols, ExtractionSource::Generated)
            }
            Err(e) => {
                warn!(
                    generator = generator.name(),
                    error = %e,
                    "Text generator unavailable, using fallback symbol data"
                );
                (fallback_symbols(text), ExtractionSource::Fallback)
            }
        },
    };

    with_positions(text, main_symbols, source, include_positions)
}

/// Deterministic extraction from the static catalog only
pub fn fallback_extract(text: &str, include_positions: bool) -> ExtractionResult {
    if text.trim().is_empty() {
        return ExtractionResult::empty(ExtractionSource::Fallback);
    }
    with_positions(
        text,
        fallback_symbols(text),
        ExtractionSource::Fallback,
        include_positions,
    )
}

fn with_positions(
    text: &str,
    main_symbols: Vec<ExtractedSymbol>,
    source: ExtractionSource,
    include_positions: bool,
) -> ExtractionResult {
    let symbol_positions = if include_positions && !main_symbols.is_empty() {
        Some(locate(text, &main_symbols))
    } else {
        None
    };

    ExtractionResult {
        main_symbols,
        symbol_positions,
        source,
    }
}

async fn generate_symbols(
    generator: &dyn TextGenerator,
    text: &str,
) -> Result<Vec<ExtractedSymbol>, GenerationError> {
    let response = generator.generate(&extraction_prompt(text)).await?;
    let parsed: GeneratedSymbols = parse_json_object(&response)?;

    Ok(parsed
        .main_symbols
        .into_iter()
        .filter_map(|mut s| {
            s.symbol = s.symbol.trim().to_string();
            (!s.symbol.is_empty()).then_some(s)
        })
        .take(MAX_SYMBOLS)
        .collect())
}

/// Keyword scan over the static catalog
///
/// Each catalog entry is emitted once, in order of its first matching keyword.
/// When nothing matches, the first word longer than three characters becomes a
/// generic symbol.
pub fn fallback_symbols(text: &str) -> Vec<ExtractedSymbol> {
    let folded = fold(text);
    let mut keys: Vec<&str> = Vec::new();

    for (keyword, key) in KEYWORDS {
        if !keys.contains(key) && contains_word(&folded, &fold(keyword)) {
            keys.push(*key);
        }
    }

    let symbols: Vec<ExtractedSymbol> = keys
        .into_iter()
        .filter_map(catalog::find_by_key)
        .map(|entry| ExtractedSymbol::new(entry.symbol, entry.brief_description()))
        .collect();

    if !symbols.is_empty() {
        return symbols;
    }

    generic_symbol(text).into_iter().collect()
}

fn generic_symbol(text: &str) -> Option<ExtractedSymbol> {
    let word = text
        .split_whitespace()
        .map(|w| w.trim_matches(is_boundary))
        .find(|w| w.chars().count() > 3)?;

    let mut chars = word.chars();
    let first = chars.next()?;
    let name: String = first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect();

    Some(ExtractedSymbol::new(name, GENERIC_SYMBOL_DESCRIPTION))
}
