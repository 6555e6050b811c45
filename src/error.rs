//! Error types for the fallible edges of the crate.
//!
//! Resolution itself never fails. Only parsing listings and loading
//! settings files can go wrong.

use thiserror::Error;

/// Errors from parsing listings or reading settings.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Settings file extension not recognised (or its feature is disabled).
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A listing response that is neither an array nor a known envelope.
    #[error("Invalid listing: {0}")]
    InvalidListing(String),
}

impl ResolverError {
    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Create a YAML error.
    pub fn yaml(message: impl Into<String>) -> Self {
        Self::Yaml(message.into())
    }

    /// Create an unsupported format error.
    pub fn unsupported(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat(format.into())
    }

    /// Create an invalid listing error.
    pub fn invalid_listing(message: impl Into<String>) -> Self {
        Self::InvalidListing(message.into())
    }
}

impl From<serde_json::Error> for ResolverError {
    fn from(err: serde_json::Error) -> Self {
        Self::json(err.to_string())
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for ResolverError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::yaml(err.to_string())
    }
}
