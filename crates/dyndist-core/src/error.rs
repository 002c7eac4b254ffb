//! Error types for distribution construction
//!
//! Provides a unified error type for all dyndist crates. Errors only occur at
//! construction time: evaluation never fails, it reports NaN or infinity
//! through the sentinel policy instead (see [`crate::sentinel`]).

use thiserror::Error;

/// Core error type for distribution construction
#[derive(Error, Debug)]
pub enum Error {
    /// The requested distribution name matches no registered family
    #[error("Unknown distribution name: {0:?}")]
    UnknownDistribution(String),

    /// A required parameter was absent under every accepted spelling
    #[error("Missing required parameter '{parameter}' for {distribution}")]
    MissingParameter {
        distribution: &'static str,
        parameter: &'static str,
    },

    /// A parameter was present but outside its valid range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The underlying distribution backend rejected the parameters
    #[error("Construction failed: {0}")]
    Construction(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a parameter that must be strictly positive
    pub fn non_positive(distribution: &str, parameter: &str, value: f64) -> Self {
        Self::InvalidParameter(format!(
            "{distribution}: {parameter} must be positive and finite, got {value}"
        ))
    }

    /// Create an error for an inverted or degenerate support interval
    pub fn bad_interval(distribution: &str, lower: f64, upper: f64) -> Self {
        Self::InvalidParameter(format!(
            "{distribution}: lower bound {lower} must be strictly below upper bound {upper}"
        ))
    }

    /// Wrap a backend construction failure
    pub fn construction<E: std::fmt::Display>(err: E) -> Self {
        Self::Construction(err.to_string())
    }
}
