//! Error types for tincture-core
//!
//! Conversions over well-formed input are total. Malformed input fails
//! fast with a typed error instead of being coerced to a default color.

use thiserror::Error;

/// Tincture core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed hex or color string
    #[error("invalid color format: {0:?}")]
    InvalidFormat(String),

    /// Numeric component outside its valid domain
    #[error("{what} out of range: {value}")]
    InvalidRange { what: &'static str, value: f64 },

    /// Invalid bitmap dimensions
    #[error("invalid bitmap dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Raw pixel buffer does not match the declared dimensions
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Pixel coordinate outside the bitmap
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result type alias for tincture-core operations
pub type Result<T> = std::result::Result<T, Error>;
