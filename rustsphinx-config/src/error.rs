//! Error types for configuration operations

use thiserror::Error;

use crate::value::ArgKind;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Lookup of an option that was never defined
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// Accessor kind does not match the option's declared kind
    #[error("Type mismatch for {name}: declared {declared}, requested {requested}")]
    TypeMismatch {
        name: String,
        declared: ArgKind,
        requested: ArgKind,
    },

    /// Malformed configuration-file line
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub fn unknown_option<S: Into<String>>(name: S) -> Self {
        Self::UnknownOption(name.into())
    }

    pub fn type_mismatch<S: Into<String>>(name: S, declared: ArgKind, requested: ArgKind) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            declared,
            requested,
        }
    }

    pub fn parse<S: Into<String>>(line: usize, message: S) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
