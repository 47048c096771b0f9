//! Tincture Color - Color relationships and image palettes
//!
//! This crate builds on the color model in [`tincture_core`]:
//!
//! - **Harmonies** ([`harmony`]): Complementary, analogous, triadic, tetradic, monochromatic
//! - **Contrast** ([`contrast`]): WCAG relative luminance, contrast ratio and rating
//! - **Gradients** ([`gradient`]): Linear RGB interpolation over ordered stops
//! - **Palette extraction** ([`palette`]): Ranked dominant colors of an RGBA bitmap
//! - **Naming** ([`names`]): Nearest entry in a fixed table of named colors
//! - **Compositing** ([`composite`]): Gradient fill of dark pixels, centered logo overlay

pub mod composite;
pub mod contrast;
pub mod error;
pub mod gradient;
pub mod harmony;
pub mod names;
pub mod palette;

// Re-export core types
pub use tincture_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export harmony types and functions
pub use harmony::{HarmonyKind, HarmonyOptions, HarmonySet, generate, generate_kind};

// Re-export contrast types and functions
pub use contrast::{
    AA_LARGE_RATIO, AA_RATIO, AAA_RATIO, ContrastRating, ContrastResult, best_text_color,
    contrast_ratio, evaluate, relative_luminance,
};

// Re-export gradient types and functions
pub use gradient::{Gradient, GradientStop, interpolate};

// Re-export palette types and functions
pub use palette::{
    // Types
    Palette,
    PaletteOptions,
    PaletteSwatch,
    // Functions
    extract_palette,
    extract_palette_cancellable,
    extract_palette_from_rgba,
    extract_palette_simple,
};

// Re-export naming
pub use names::{NAMED_COLORS, NamedColor, nearest, nearest_name, nearest_name_for_hex};

// Re-export compositing
pub use composite::{
    CompositeOptions, dark_pixel_mask, fill_dark_with_gradient, fill_masked_with_gradient,
    overlay_centered_logo,
};
