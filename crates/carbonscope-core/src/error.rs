//! Error types for the fallible edges of the library
//!
//! Calculation, advice and formatting never fail. Errors only arise when
//! loading factor sets or settings from disk, and from opt-in input validation.

use thiserror::Error;

/// Errors that can occur while loading configuration or validating input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarbonError {
    /// A factor or settings file could not be read
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed JSON or an out-of-range setting
    #[error("Parse error: {0}")]
    Parse(String),

    /// A coefficient is negative, non-finite, too large, or non-zero where
    /// it must be zero
    #[error("Invalid emission factor '{name}': {value}")]
    InvalidFactor {
        /// Dotted coefficient name, e.g. `transport.car`
        name: String,
        /// Rejected value
        value: f64,
    },

    /// Opt-in validation found a negative quantity
    #[error("Negative value for '{field}': {value}")]
    NegativeInput {
        /// Dotted field name, e.g. `businessTravel.carKm`
        field: String,
        /// Rejected value
        value: f64,
    },
}

impl From<std::io::Error> for CarbonError {
    fn from(e: std::io::Error) -> Self {
        CarbonError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CarbonError {
    fn from(e: serde_json::Error) -> Self {
        CarbonError::Parse(e.to_string())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CarbonError>;
