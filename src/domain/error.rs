//! Domain error types

use thiserror::Error;

/// Errors that can occur while generating, filtering or exporting a waveform
#[derive(Error, Debug)]
pub enum HarmonicError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Empty input: cannot filter a zero-length sequence")]
    EmptyInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl HarmonicError {
    /// Shorthand for building an `InvalidParameter` from anything printable
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

/// Result type alias for noisy-harmonic operations
pub type HarmonicResult<T> = Result<T, HarmonicError>;
