//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use tincture_core::{Bitmap, Color};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare results and record failures (default)
    #[default]
    Compare,
    /// Display mode - report mismatches without failing
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test: its name, the index of the
/// current check, the mode, and every failure seen so far.
pub struct RegParams {
    /// Name of the test (e.g., "palette")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Recorded failures
    failures: Vec<TestError>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record(&mut self, failure: TestError) -> bool {
        eprintln!("Failure in {}_reg: {}", self.test_name, failure);
        if !self.display() {
            self.failures.push(failure);
        }
        false
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `actual` is within `delta` of `expected`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        // NaN never compares within delta
        if diff <= delta {
            true
        } else {
            self.record(TestError::ValueMismatch {
                index: self.index,
                expected,
                actual,
                delta,
            })
        }
    }

    /// Compare two colors by their RGB channels
    pub fn compare_colors(&mut self, expected: &Color, actual: &Color) -> bool {
        self.index += 1;

        if expected.rgb() == actual.rgb() {
            true
        } else {
            self.record(TestError::ColorMismatch {
                index: self.index,
                expected: expected.hex(),
                actual: actual.hex(),
            })
        }
    }

    /// Compare two bitmaps for exact equality of size and pixels
    pub fn compare_bitmaps(&mut self, expected: &Bitmap, actual: &Bitmap) -> bool {
        self.index += 1;

        if expected == actual {
            return true;
        }

        if expected.width() == actual.width() && expected.height() == actual.height() {
            let first = expected
                .pixels()
                .zip(actual.pixels())
                .position(|(a, b)| a != b);
            if let Some(i) = first {
                let w = expected.width() as usize;
                eprintln!("  first pixel mismatch at ({}, {})", i % w, i / w);
            }
        } else {
            eprintln!(
                "  size mismatch: {}x{} vs {}x{}",
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            );
        }

        self.record(TestError::BitmapMismatch { index: self.index })
    }

    /// Compare two strings for equality
    pub fn compare_strings(&mut self, expected: &str, actual: &str) -> bool {
        self.index += 1;

        if expected == actual {
            true
        } else {
            self.record(TestError::StringMismatch {
                index: self.index,
                expected: expected.to_string(),
                actual: actual.to_string(),
            })
        }
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        let success = self.failures.is_empty();
        if success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        success
    }

    /// Report results as a `Result`, for tests that propagate with `?`.
    ///
    /// # Errors
    ///
    /// Returns [`TestError::Failed`] with the failure count if any check failed.
    pub fn finish(self) -> TestResult<()> {
        let test_name = self.test_name.clone();
        let count = self.failures.len();
        if self.cleanup() {
            Ok(())
        } else {
            Err(TestError::Failed { test_name, count })
        }
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Get list of failures
    pub fn failures(&self) -> &[TestError] {
        &self.failures
    }
}
