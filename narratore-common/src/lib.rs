//! # Narratore Common Library
//!
//! Shared code for the Narratore di Sogni services:
//! - Error types
//! - Bootstrap configuration loading (TOML file, environment, compiled defaults)

pub mod config;
pub mod error;

pub use error::{Error, Result};
