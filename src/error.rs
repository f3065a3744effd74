//! Error types for the payriff client

use thiserror::Error;

/// Result type alias for payriff operations
pub type Result<T> = std::result::Result<T, PayriffError>;

/// Main error type for payriff operations
///
/// Business failures reported by the gateway (invalid parameters, bad token,
/// ...) are not errors: they arrive inside a successfully decoded envelope and
/// must be checked through [`crate::ApiResponse::code`].
#[derive(Error, Debug)]
pub enum PayriffError {
    /// Request body could not be serialized
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The HTTP exchange itself failed (DNS, connect, timeout, body read)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body or its payload did not have the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl PayriffError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether the error came from serializing the request
    pub fn is_encode(&self) -> bool {
        matches!(self, Self::Encode(_))
    }

    /// Whether the error came from the network call
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Whether the error came from decoding the gateway's answer
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
