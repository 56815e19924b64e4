//! HTTP API handlers for narratore-symbols

pub mod buildinfo;
pub mod health;
pub mod symbols;

pub use buildinfo::{buildinfo_routes, BuildInfo};
pub use health::health_routes;
pub use symbols::symbol_routes;
