//! Dream-symbol pipeline
//!
//! Text → [`extractor`] → symbols (+ positions via [`locator`]) →
//! [`segments`] → ordered highlight segments. [`lookup`] serves dictionary
//! details; [`catalog`] holds the static fallback data.

pub mod catalog;
pub mod extractor;
pub mod locator;
pub mod lookup;
pub mod segments;

use crate::models::{ExtractionResult, HighlightResult, SymbolInfo};
use crate::services::TextGenerator;
use std::sync::Arc;

/// Entry point for the symbol operations
///
/// Holds the optional generative-text collaborator; every operation is
/// otherwise a pure function of its inputs and the static catalog.
#[derive(Clone, Default)]
pub struct SymbolService {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl SymbolService {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator }
    }

    /// Service that only uses static fallback data
    pub fn fallback_only() -> Self {
        Self::default()
    }

    /// Name of the configured collaborator, or `"fallback"`
    pub fn generator_name(&self) -> &'static str {
        self.generator.as_deref().map_or("fallback", |g| g.name())
    }

    pub async fn extract(&self, text: &str, include_positions: bool) -> ExtractionResult {
        extractor::extract(self.generator.as_deref(), text, include_positions).await
    }

    pub async fn symbol_info(&self, name: &str) -> SymbolInfo {
        lookup::symbol_info(self.generator.as_deref(), name).await
    }

    /// Extract symbols and segment `text` for highlighting
    pub async fn highlight(&self, text: &str) -> HighlightResult {
        let extraction = self.extract(text, true).await;
        let occurrences = extraction.symbol_positions.unwrap_or_default();
        let segments = segments::build(text, &occurrences, &extraction.main_symbols);

        HighlightResult {
            main_symbols: extraction.main_symbols,
            segments,
        }
    }
}
