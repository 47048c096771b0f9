//! Tincture - Color engine for Rust
//!
//! # Overview
//!
//! - Color model conversions between RGB, HEX, HSL and HSV
//! - Harmonies (complementary, analogous, triadic, tetradic, monochromatic)
//! - WCAG contrast ratio and rating
//! - Linear RGB gradients
//! - Ranked palette extraction from RGBA bitmaps
//! - Gradient and logo compositing, PNG I/O
//!
//! # Example
//!
//! ```
//! use tincture::Color;
//! use tincture::color::{HarmonyKind, evaluate, generate_kind};
//!
//! let base = Color::from_hex("#3366CC").unwrap();
//! let set = generate_kind(&base, HarmonyKind::Complementary, 2).unwrap();
//! assert_eq!(set.colors[1].hex(), "#CC9933");
//!
//! let result = evaluate(&Color::BLACK, &Color::WHITE);
//! assert_eq!(result.rating.to_string(), "AAA");
//! ```

// Re-export core types (primary data structures used everywhere)
pub use tincture_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use tincture_color as color;
pub use tincture_io as io;
