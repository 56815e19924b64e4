//! Integration tests for narratore-symbols API endpoints
//!
//! Tests cover:
//! - Symbol extraction (fallback and generated paths)
//! - Highlight segmentation
//! - Symbol detail lookup and categories
//! - Request validation
//! - Health and build info endpoints

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use narratore_symbols::services::{GenerationError, TextGenerator};
use narratore_symbols::{build_router, AppState, SymbolService};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot` method

/// Generator returning a fixed response, or failing when `None`
struct StubGenerator(Option<&'static str>);

#[async_trait]
impl TextGenerator for StubGenerator {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        self.0
            .map(str::to_string)
            .ok_or(GenerationError::RateLimitExceeded)
    }
}

/// Test helper: app running on static fallback data
fn fallback_app() -> axum::Router {
    build_router(AppState::new(SymbolService::fallback_only()))
}

/// Test helper: app with a stub generator
fn stub_app(response: Option<&'static str>) -> axum::Router {
    let generator: Arc<dyn TextGenerator> = Arc::new(StubGenerator(response));
    build_router(AppState::new(SymbolService::new(Some(generator))))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Health / build info
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let response = fallback_app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "narratore-symbols");
    assert_eq!(body["textGenerator"], "fallback");
    assert!(body["uptimeSeconds"].is_number());
}

#[tokio::test]
async fn test_health_reports_generator() {
    let response = stub_app(None).oneshot(get("/health")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["textGenerator"], "stub");
}

#[tokio::test]
async fn test_buildinfo_endpoint() {
    let response = fallback_app().oneshot(get("/api/buildinfo")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert!(body["version"].is_string());
    assert!(body["git_hash"].is_string());
}

// =============================================================================
// Extraction
// =============================================================================

#[tokio::test]
async fn test_extract_fallback_with_positions() {
    let request = post_json(
        "/api/simboli-sogno/estrai",
        json!({ "testo": "Ho visto un serpente vicino all'acqua", "includePositions": true }),
    );
    let response = fallback_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["mainSymbols"][0]["symbol"], "Acqua");
    assert_eq!(body["mainSymbols"][1]["symbol"], "Serpente");

    let positions = body["symbolPositions"].as_array().unwrap();
    assert_eq!(positions.len(), 2);
    assert_eq!(positions[0], json!({ "symbol": "Serpente", "start": 12, "end": 20 }));
    assert_eq!(positions[1], json!({ "symbol": "Acqua", "start": 32, "end": 37 }));
}

#[tokio::test]
async fn test_extract_without_positions_omits_field() {
    let request = post_json("/api/simboli-sogno/estrai", json!({ "text": "Stavo per cadere" }));
    let response = fallback_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["mainSymbols"][0]["symbol"], "Cadere");
    assert!(body.get("symbolPositions").is_none());
}

#[tokio::test]
async fn test_extract_generated_symbols() {
    let app = stub_app(Some(
        r#"{"mainSymbols": [{"symbol": "Labirinto", "briefDescription": "Ricerca di sé."}]}"#,
    ));
    let request = post_json(
        "/api/simboli-sogno/estrai",
        json!({ "testo": "Ero perso in un labirinto.", "includePositions": true }),
    );
    let response = app.oneshot(request).await.unwrap();
    let body = extract_json(response.into_body()).await;

    assert_eq!(
        body["mainSymbols"],
        json!([{ "symbol": "Labirinto", "briefDescription": "Ricerca di sé." }])
    );
    assert_eq!(
        body["symbolPositions"],
        json!([{ "symbol": "Labirinto", "start": 16, "end": 25 }])
    );
}

#[tokio::test]
async fn test_extract_generator_failure_is_not_surfaced() {
    let request = post_json("/api/simboli-sogno/estrai", json!({ "testo": "Un neonato piangeva" }));
    let response = stub_app(None).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["mainSymbols"][0]["symbol"], "Bambino");
}

#[tokio::test]
async fn test_extract_rejects_missing_text() {
    let request = post_json("/api/simboli-sogno/estrai", json!({ "includePositions": true }));
    let response = fallback_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_extract_rejects_non_string_text() {
    let request = post_json("/api/simboli-sogno/estrai", json!({ "testo": 42 }));
    let response = fallback_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_extract_rejects_blank_text() {
    let request = post_json("/api/simboli-sogno/estrai", json!({ "testo": "   " }));
    let response = fallback_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_extract_rejects_invalid_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/simboli-sogno/estrai")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = fallback_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Highlighting
// =============================================================================

#[tokio::test]
async fn test_highlight_segments_cover_text() {
    let text = "Ho visto un serpente vicino all'acqua";
    let request = post_json("/api/simboli-sogno/evidenzia", json!({ "testo": text }));
    let response = fallback_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let segments = body["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 4);

    let joined: String = segments
        .iter()
        .map(|s| s["text"].as_str().unwrap())
        .collect();
    assert_eq!(joined, text);

    assert_eq!(segments[0], json!({ "text": "Ho visto un ", "isSymbol": false }));
    assert_eq!(segments[1]["isSymbol"], true);
    assert_eq!(segments[1]["symbol"], "Serpente");
    assert!(segments[1]["briefDescription"].as_str().unwrap().ends_with('.'));
    assert_eq!(segments[3]["text"], "acqua");
}

// =============================================================================
// Symbol details
// =============================================================================

#[tokio::test]
async fn test_symbol_info_from_catalog() {
    let response = fallback_app()
        .oneshot(get("/api/simboli-sogno/volare"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["symbol"], "Volare");
    assert_eq!(body["meanings"]["cultural"].as_array().unwrap().len(), 3);
    assert_eq!(body["relatedSymbols"][0], "Uccelli");
}

#[tokio::test]
async fn test_symbol_info_unknown_is_generic() {
    let response = fallback_app()
        .oneshot(get("/api/simboli-sogno/simbolo-inesistente-xyz"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["symbol"], "simbolo-inesistente-xyz");
    assert!(body["meanings"]["general"].is_string());
    assert!(body["meanings"]["psychological"].is_string());
    assert_eq!(body["categories"], json!(["Generale", "Simboli"]));
}

#[tokio::test]
async fn test_symbol_info_percent_encoded_name() {
    let response = fallback_app()
        .oneshot(get("/api/simboli-sogno/Competizione%20"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["symbol"], "Competizione");
}

#[tokio::test]
async fn test_symbol_info_blank_name_rejected() {
    let response = fallback_app()
        .oneshot(get("/api/simboli-sogno/%20"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_categories() {
    let response = fallback_app()
        .oneshot(get("/api/simboli-sogno/categorie"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let categories = body.as_array().unwrap();
    assert_eq!(categories.len(), 14);
    assert_eq!(categories[0], "Natura");
    assert_eq!(categories[13], "Viaggio");
}
