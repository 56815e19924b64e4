//! Configuration resolution for narratore-symbols
//!
//! Gemini API key priority: command line → `GEMINI_API_KEY` → TOML.
//! Without a key the service runs on static fallback data only.

use narratore_common::config::{is_valid_key, TomlConfig};
use std::sync::Arc;
use tracing::{info, warn};

use crate::services::{GeminiClient, TextGenerator};
use crate::SymbolService;

/// Environment variable holding the Gemini API key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Resolve the Gemini API key from command line, environment and TOML
pub fn resolve_gemini_api_key(
    cli_key: Option<&str>,
    env_key: Option<&str>,
    toml_config: &TomlConfig,
) -> Option<String> {
    let candidates = [
        ("command line", cli_key),
        ("environment", env_key),
        ("TOML", toml_config.gemini.api_key.as_deref()),
    ];

    let sources: Vec<&str> = candidates
        .iter()
        .filter(|(_, key)| key.is_some_and(is_valid_key))
        .map(|(source, _)| *source)
        .collect();

    if sources.len() > 1 {
        warn!(
            "Gemini API key found in multiple sources: {}. Using {} (highest priority).",
            sources.join(", "),
            sources[0]
        );
    }

    let (source, key) = candidates
        .into_iter()
        .find_map(|(source, key)| key.filter(|k| is_valid_key(k)).map(|k| (source, k)))?;

    info!("Gemini API key loaded from {}", source);
    Some(key.trim().to_string())
}

/// Build the symbol service, with a Gemini client when a key is available
pub fn build_symbol_service(api_key: Option<&str>, toml_config: &TomlConfig) -> SymbolService {
    let Some(api_key) = api_key else {
        warn!("Gemini API key not configured; symbol extraction uses fallback data only");
        return SymbolService::fallback_only();
    };

    match GeminiClient::from_config(&toml_config.gemini, api_key) {
        Ok(client) => {
            info!(model = client.model(), "Gemini text generator enabled");
            let generator: Arc<dyn TextGenerator> = Arc::new(client);
            SymbolService::new(Some(generator))
        }
        Err(e) => {
            warn!(error = %e, "Failed to create Gemini client; using fallback data only");
            SymbolService::fallback_only()
        }
    }
}
