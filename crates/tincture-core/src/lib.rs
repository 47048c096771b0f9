//! Tincture Core - Color model and pixel buffer
//!
//! This crate provides the fundamental value types shared by the rest of
//! the tincture workspace:
//!
//! - [`Color`] - Immutable color value holding RGB, HSL and HSV at once
//! - [`Rgb`] / [`Hsl`] / [`Hsv`] - Numeric color representations
//! - [`Bitmap`] - Decoded RGBA8 pixel buffer
//! - [`pixel`] - Packing helpers for 24-bit color keys
//!
//! # Example
//!
//! ```
//! use tincture_core::Color;
//!
//! let c = Color::from_hex("#3366CC").unwrap();
//! assert_eq!(c.rgb().g, 0x66);
//! assert_eq!(c.hsl().rounded().h, 220.0);
//! ```

pub mod bitmap;
pub mod color;
pub mod error;
pub mod model;
pub mod pixel;

pub use bitmap::{Bitmap, Rgba};
pub use color::Color;
pub use error::{Error, Result};
pub use model::{
    Hsl, Hsv, Rgb, hsl_to_rgb, hsv_to_rgb, parse_hex, rgb_to_hex, rgb_to_hsl, rgb_to_hsv,
};
