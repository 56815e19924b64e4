//! Outbound collaborators

pub mod gemini_client;

pub use gemini_client::{parse_json_object, GeminiClient, GenerationError, TextGenerator};
