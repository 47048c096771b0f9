//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Color comparison failed
    #[error("color comparison failed at index {index}: expected {expected}, got {actual}")]
    ColorMismatch {
        index: usize,
        expected: String,
        actual: String,
    },

    /// String comparison failed
    #[error("string comparison failed at index {index}: expected {expected:?}, got {actual:?}")]
    StringMismatch {
        index: usize,
        expected: String,
        actual: String,
    },

    /// Bitmap comparison failed
    #[error("bitmap comparison failed at index {index}")]
    BitmapMismatch { index: usize },

    /// One or more checks failed
    #[error("{test_name}_reg failed {count} check(s)")]
    Failed { test_name: String, count: usize },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
