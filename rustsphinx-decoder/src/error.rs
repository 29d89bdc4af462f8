//! Error types for decoder session operations

use thiserror::Error;

use rustsphinx_config::ConfigError;

/// Result type for decoder session operations
pub type Result<T> = std::result::Result<T, DecoderError>;

/// Decoder session error types
#[derive(Error, Debug)]
pub enum DecoderError {
    /// Configuration store error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Option value the front end cannot run with
    #[error("Invalid value for {name}: {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl DecoderError {
    pub fn invalid_parameter<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
