//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding input validation, session persistence and configuration
/// failures.
#[derive(Debug)]
pub enum ParliamentError {
    /// An error from the underlying API client.
    Api(parliament_api::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
    /// The chat session store could not be read or written.
    Session(String),
    /// Settings could not be loaded.
    Config(String),
}

impl fmt::Display for ParliamentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "{}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Session(msg) => write!(f, "Session error: {}", msg),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ParliamentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<parliament_api::Error> for ParliamentError {
    fn from(e: parliament_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<toml::de::Error> for ParliamentError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}
