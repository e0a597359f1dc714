//! REST API server for the Skyfare fare-calendar engine.
//!
//! This crate provides an HTTP API over the deterministic pricing kernel,
//! exposing month-calendar generation plus health and readiness probes.

pub mod config;
pub mod routes;
pub mod server;

// Re-export engine dependencies for integration
pub use fare_core;
pub use fare_pricing;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
