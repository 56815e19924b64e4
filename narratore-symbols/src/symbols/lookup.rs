//! Symbol detail lookup
//!
//! Resolution order: catalog exact match, catalog near match, generative
//! collaborator, generic template. The lookup never fails.

use crate::models::{SymbolInfo, SymbolMeanings};
use crate::services::{parse_json_object, TextGenerator};
use crate::symbols::catalog::{self, FallbackSymbol, FALLBACK_SYMBOLS};
use tracing::{debug, info, warn};

/// Minimum normalized Levenshtein similarity for a near catalog match
pub const SIMILARITY_THRESHOLD: f64 = 0.8;

/// Catalog entry for `name`, exact (case-insensitive) first, then nearest
/// display name at or above [`SIMILARITY_THRESHOLD`]
pub fn catalog_match(name: &str) -> Option<&'static FallbackSymbol> {
    if let Some(entry) = catalog::find_by_name(name) {
        return Some(entry);
    }

    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    FALLBACK_SYMBOLS
        .iter()
        .map(|entry| {
            let score = strsim::normalized_levenshtein(&normalized, &entry.symbol.to_lowercase());
            (entry, score)
        })
        .filter(|(_, score)| *score >= SIMILARITY_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(entry, score)| {
            debug!(requested = %name, matched = entry.symbol, score, "Near catalog match");
            entry
        })
}

/// Boilerplate entry interpolating the requested name
pub fn generic_info(name: &str) -> SymbolInfo {
    SymbolInfo {
        symbol: name.to_string(),
        meanings: SymbolMeanings {
            general: format!(
                "Il simbolo \"{name}\" rappresenta concetti e significati che variano in base al contesto personale e culturale."
            ),
            psychological: format!(
                "Nella psicologia dei sogni, \"{name}\" può rappresentare aspetti della tua psiche o esperienze emotive."
            ),
            cultural: vec![
                format!(
                    "In molte culture occidentali, \"{name}\" è associato a concetti di trasformazione e cambiamento."
                ),
                "Nelle tradizioni orientali, potrebbe simboleggiare equilibrio o armonia.".to_string(),
                "In varie mitologie, questo simbolo appare come rappresentazione di forze naturali o divine."
                    .to_string(),
            ],
        },
        related_symbols: vec!["Oggetto".into(), "Concetto".into(), "Immagine".into()],
        categories: vec!["Generale".into(), "Simboli".into()],
    }
}

/// Prompt for the detail lookup
pub fn detail_prompt(name: &str) -> String {
    format!(
        r#"Fornisci un'analisi dettagliata del simbolo "{name}" nel contesto dell'interpretazione dei sogni.

Includi:
1. Un significato generale
2. Interpretazione psicologica (approccio junghiano o freudiano)
3. Variazioni culturali (almeno 3 diverse culture)
4. Simboli correlati (almeno 3)
5. Categorie a cui appartiene (es. natura, animali, oggetti quotidiani)

Rispondi in formato JSON con la seguente struttura:
{{
  "symbol": "{name}",
  "meanings": {{
    "general": "significato generale",
    "psychological": "interpretazione psicologica",
    "cultural": ["interpretazione cultura 1", "interpretazione cultura 2", "interpretazione cultura 3"]
  }},
  "relatedSymbols": ["simbolo1", "simbolo2", "simbolo3"],
  "categories": ["categoria1", "categoria2"]
}}"#
    )
}

/// Detailed information about `name`
pub async fn symbol_info(generator: Option<&dyn TextGenerator>, name: &str) -> SymbolInfo {
    let name = name.trim();

    if let Some(entry) = catalog_match(name) {
        info!(symbol = %name, "Symbol served from fallback catalog");
        return entry.to_info();
    }

    let Some(generator) = generator else {
        info!(symbol = %name, "No text generator configured, using generic symbol info");
        return generic_info(name);
    };

    let generated = match generator.generate(&detail_prompt(name)).await {
        Ok(response) => parse_json_object::<SymbolInfo>(&response),
        Err(e) => Err(e),
    };

    match generated {
        Ok(mut info) => {
            if info.symbol.trim().is_empty() {
                info.symbol = name.to_string();
            }
            info
        }
        Err(e) => {
            warn!(
                symbol = %name,
                generator = generator.name(),
                error = %e,
                "Text generator unavailable, using generic symbol info"
            );
            generic_info(name)
        }
    }
}
