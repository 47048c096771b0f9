//! Error types for tincture-color

use thiserror::Error;

/// Errors that can occur during color engine operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// Core library error (malformed hex, out-of-range component, bad buffer)
    #[error("core error: {0}")]
    Core(#[from] tincture_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Gradient needs at least two stops
    #[error("gradient needs at least 2 stops, got {stops}")]
    EmptyGradient { stops: usize },

    /// Caller raised the cancellation flag during a long-running scan
    #[error("operation cancelled")]
    Cancelled,
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
