//! Structured error types for the CLI.
//!
//! `CliError` wraps the foundation- and kernel-layer error types so that any
//! error encountered while parsing arguments or generating output can be
//! propagated with `?` and mapped to a process exit by `main`.

use thiserror::Error;

use fare_core::types::{CabinError, DateError, MonthError, RouteError};
use fare_pricing::PolicyError;

/// Convenience alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors produced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// An argument supplied on the command line was invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A referenced file could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// An error from loading or validating the pricing policy.
    #[error(transparent)]
    Policy(#[from] PolicyError),

    /// An error constructing a route.
    #[error(transparent)]
    Route(#[from] RouteError),

    /// An error parsing a cabin class.
    #[error(transparent)]
    Cabin(#[from] CabinError),

    /// An error parsing a date.
    #[error(transparent)]
    Date(#[from] DateError),

    /// An error parsing a month.
    #[error(transparent)]
    Month(#[from] MonthError),

    /// An error serialising output to JSON.
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}
