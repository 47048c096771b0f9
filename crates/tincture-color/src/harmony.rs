//! Color harmonies
//!
//! Generates sets of colors related to a base color by hue rotation or
//! lightness variation:
//! - Complementary (2 colors, +180°)
//! - Analogous (`count` colors, +30° steps)
//! - Triadic (3 colors, +120° steps)
//! - Tetradic (4 colors, +90° steps)
//! - Monochromatic (`count` colors, lightness steps of 20%)
//!
//! The first color of every set is the base color itself.

use crate::gradient::Gradient;
use crate::{ColorError, ColorResult};
use tincture_core::Color;

/// Lightness bounds for monochromatic variants, in percent
const MONO_MIN_LIGHTNESS: f64 = 10.0;
const MONO_MAX_LIGHTNESS: f64 = 90.0;
const MONO_LIGHTNESS_STEP: f64 = 20.0;

/// Harmony kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyKind {
    Complementary,
    Analogous,
    Triadic,
    Tetradic,
    Monochromatic,
}

impl HarmonyKind {
    /// All kinds, in generation order
    pub const ALL: [HarmonyKind; 5] = [
        HarmonyKind::Complementary,
        HarmonyKind::Analogous,
        HarmonyKind::Triadic,
        HarmonyKind::Tetradic,
        HarmonyKind::Monochromatic,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            HarmonyKind::Complementary => "Complementary",
            HarmonyKind::Analogous => "Analogous",
            HarmonyKind::Triadic => "Triadic",
            HarmonyKind::Tetradic => "Tetradic",
            HarmonyKind::Monochromatic => "Monochromatic",
        }
    }

    /// Number of colors this kind always produces, or `None` if it follows
    /// the requested count.
    pub fn fixed_len(self) -> Option<usize> {
        match self {
            HarmonyKind::Complementary => Some(2),
            HarmonyKind::Triadic => Some(3),
            HarmonyKind::Tetradic => Some(4),
            HarmonyKind::Analogous | HarmonyKind::Monochromatic => None,
        }
    }
}

/// Options for harmony generation
#[derive(Debug, Clone)]
pub struct HarmonyOptions {
    /// Palette size for the count-driven kinds (analogous, monochromatic)
    pub count: usize,
    /// Whether [`generate`] includes the tetradic set
    pub include_tetradic: bool,
}

impl HarmonyOptions {
    /// Smallest accepted `count`
    pub const MIN_COUNT: usize = 2;
    /// Largest accepted `count`
    pub const MAX_COUNT: usize = 12;

    /// Check option ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidParameters`] if `count` is outside
    /// [`MIN_COUNT`](Self::MIN_COUNT)..=[`MAX_COUNT`](Self::MAX_COUNT).
    pub fn validate(&self) -> ColorResult<()> {
        if !(Self::MIN_COUNT..=Self::MAX_COUNT).contains(&self.count) {
            return Err(ColorError::InvalidParameters(format!(
                "harmony count must be between {} and {}, got {}",
                Self::MIN_COUNT,
                Self::MAX_COUNT,
                self.count
            )));
        }
        Ok(())
    }
}

impl Default for HarmonyOptions {
    fn default() -> Self {
        Self {
            count: 5,
            include_tetradic: true,
        }
    }
}

/// A harmony kind and its colors, base color first
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonySet {
    pub kind: HarmonyKind,
    pub colors: Vec<Color>,
}

impl HarmonySet {
    /// The base color the set was generated from
    pub fn base(&self) -> &Color {
        &self.colors[0]
    }

    /// Number of colors in the set
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; every set holds at least its base color.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Evenly spaced gradient through the set's colors.
    ///
    /// # Errors
    ///
    /// Never fails for generated sets, which hold at least two colors.
    pub fn to_gradient(&self) -> ColorResult<Gradient> {
        Gradient::evenly_spaced(&self.colors)
    }
}

fn hue_steps(base: &Color, len: usize, step: f64) -> ColorResult<Vec<Color>> {
    let mut colors = Vec::with_capacity(len);
    colors.push(*base);
    for k in 1..len {
        colors.push(base.rotate_hue(k as f64 * step)?);
    }
    Ok(colors)
}

fn lightness_steps(base: &Color, len: usize) -> ColorResult<Vec<Color>> {
    let l = base.hsl().l;
    let mut colors = Vec::with_capacity(len);
    colors.push(*base);
    for k in 1..len {
        let target = (l + (k as f64 - 2.0) * MONO_LIGHTNESS_STEP)
            .clamp(MONO_MIN_LIGHTNESS, MONO_MAX_LIGHTNESS);
        colors.push(base.with_lightness(target)?);
    }
    Ok(colors)
}

/// Generate a single harmony set.
///
/// Complementary, triadic and tetradic sets ignore `count` and always
/// return 2, 3 and 4 colors respectively.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] if `count` is outside [2, 12]
/// for a count-driven kind.
pub fn generate_kind(base: &Color, kind: HarmonyKind, count: usize) -> ColorResult<HarmonySet> {
    let len = match kind.fixed_len() {
        Some(len) => len,
        None => {
            HarmonyOptions {
                count,
                include_tetradic: true,
            }
            .validate()?;
            count
        }
    };
    let colors = match kind {
        HarmonyKind::Complementary => hue_steps(base, len, 180.0)?,
        HarmonyKind::Analogous => hue_steps(base, len, 30.0)?,
        HarmonyKind::Triadic => hue_steps(base, len, 120.0)?,
        HarmonyKind::Tetradic => hue_steps(base, len, 90.0)?,
        HarmonyKind::Monochromatic => lightness_steps(base, len)?,
    };

    Ok(HarmonySet { kind, colors })
}

/// Generate every harmony set for a base color, in [`HarmonyKind::ALL`]
/// order (tetradic omitted when `include_tetradic` is off).
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] if the options are invalid.
pub fn generate(base: &Color, options: &HarmonyOptions) -> ColorResult<Vec<HarmonySet>> {
    options.validate()?;

    HarmonyKind::ALL
        .into_iter()
        .filter(|&kind| options.include_tetradic || kind != HarmonyKind::Tetradic)
        .map(|kind| generate_kind(base, kind, options.count))
        .collect()
}
