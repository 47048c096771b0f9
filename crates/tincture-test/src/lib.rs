//! tincture-test - Regression test helpers
//!
//! Integration tests across the workspace record their checks through
//! [`RegParams`], which numbers every check, reports mismatches on stderr
//! and summarizes at the end.
//!
//! # Usage
//!
//! ```ignore
//! use tincture_test::RegParams;
//!
//! let mut rp = RegParams::new("contrast");
//! rp.compare_values(21.0, result.ratio, 1e-9);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display". Display mode
//!   reports mismatches without failing the test.

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
