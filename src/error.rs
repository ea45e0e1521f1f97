//! Error handling module for shoplist
//!
//! Provides the crate error type using thiserror. Storage failures
//! (`Decode`, `Encode`, `Io`) are absorbed and logged by the list store;
//! the remaining variants only surface at the binary's top level.

use thiserror::Error;

/// Main error type for shoplist
#[derive(Error, Debug)]
pub enum ShopListError {
    /// Stored bytes could not be decoded into a list of items
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// The in-memory list could not be serialized
    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// IO errors (storage files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Raw mode or alternate screen could not be entered
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for shoplist operations
pub type Result<T> = std::result::Result<T, ShopListError>;

impl ShopListError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}
