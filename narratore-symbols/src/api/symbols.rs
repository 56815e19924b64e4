//! Dream-symbol endpoints
//!
//! Request bodies accept the dream text under several field names used by
//! different clients (`text`, `testo`, `content`, `sogno`); they are
//! normalized once into [`DreamTextInput`] before reaching the pipeline.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::models::{ExtractionResult, HighlightResult, SymbolInfo};
use crate::symbols::catalog::CATEGORIES;
use crate::AppState;

/// Raw request body as sent by clients
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamTextRequest {
    #[serde(default, alias = "testo", alias = "content", alias = "sogno")]
    pub text: Option<String>,
    /// Only a JSON `true` enables positions
    #[serde(default)]
    pub include_positions: Option<Value>,
}

/// Canonical, validated request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DreamTextInput {
    pub text: String,
    pub include_positions: bool,
}

impl TryFrom<DreamTextRequest> for DreamTextInput {
    type Error = ApiError;

    fn try_from(request: DreamTextRequest) -> Result<Self, Self::Error> {
        let text = request
            .text
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ApiError::BadRequest("Dream text is required".to_string()))?;

        Ok(Self {
            text,
            include_positions: request.include_positions == Some(Value::Bool(true)),
        })
    }
}

fn parse_body(body: Result<Json<DreamTextRequest>, JsonRejection>) -> ApiResult<DreamTextInput> {
    let Json(request) = body?;
    DreamTextInput::try_from(request)
}

/// POST /api/simboli-sogno/estrai
///
/// Extract main symbols, with positions when `includePositions` is `true`.
pub async fn extract_symbols(
    State(state): State<AppState>,
    body: Result<Json<DreamTextRequest>, JsonRejection>,
) -> ApiResult<Json<ExtractionResult>> {
    let input = parse_body(body)?;
    tracing::info!(
        chars = input.text.chars().count(),
        include_positions = input.include_positions,
        "Extracting dream symbols"
    );

    let result = state
        .symbols
        .extract(&input.text, input.include_positions)
        .await;
    Ok(Json(result))
}

/// POST /api/simboli-sogno/evidenzia
///
/// Extract symbols and return the highlight segmentation of the text.
pub async fn highlight_symbols(
    State(state): State<AppState>,
    body: Result<Json<DreamTextRequest>, JsonRejection>,
) -> ApiResult<Json<HighlightResult>> {
    let input = parse_body(body)?;
    Ok(Json(state.symbols.highlight(&input.text).await))
}

/// GET /api/simboli-sogno/:simbolo
pub async fn get_symbol_info(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<SymbolInfo>> {
    if name.trim().is_empty() {
        return Err(ApiError::BadRequest("Symbol name is required".to_string()));
    }

    Ok(Json(state.symbols.symbol_info(&name).await))
}

/// GET /api/simboli-sogno/categorie
pub async fn list_categories() -> Json<&'static [&'static str]> {
    Json(CATEGORIES)
}

/// Build dream-symbol routes
pub fn symbol_routes() -> Router<AppState> {
    Router::new()
        .route("/api/simboli-sogno/estrai", post(extract_symbols))
        .route("/api/simboli-sogno/evidenzia", post(highlight_symbols))
        .route("/api/simboli-sogno/categorie", get(list_categories))
        .route("/api/simboli-sogno/:simbolo", get(get_symbol_info))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: Value) -> DreamTextRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_field_aliases_normalize() {
        for field in ["text", "testo", "content", "sogno"] {
            let mut body = serde_json::Map::new();
            body.insert(field.to_string(), json!("volo"));
            let input = DreamTextInput::try_from(request(Value::Object(body))).unwrap();
            assert_eq!(input.text, "volo");
            assert!(!input.include_positions);
        }
    }

    #[test]
    fn test_include_positions_requires_true() {
        let input =
            DreamTextInput::try_from(request(json!({ "testo": "x", "includePositions": true }))).unwrap();
        assert!(input.include_positions);

        let input =
            DreamTextInput::try_from(request(json!({ "testo": "x", "includePositions": "true" }))).unwrap();
        assert!(!input.include_positions);
    }

    #[test]
    fn test_missing_or_blank_text_rejected() {
        assert!(DreamTextInput::try_from(request(json!({}))).is_err());
        assert!(DreamTextInput::try_from(request(json!({ "testo": "  " }))).is_err());
    }
}
