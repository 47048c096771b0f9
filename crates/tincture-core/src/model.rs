//! Color representations and conversions
//!
//! Provides the three numeric color models the engine works in and the
//! conversions between them:
//! - RGB (8-bit channels)
//! - HSL (hue in degrees, saturation and lightness in percent)
//! - HSV (hue in degrees, saturation and value in percent)
//! - HEX (`#RRGGBB` strings)
//!
//! HSL and HSV carry full `f64` precision so that RGB -> HSL -> RGB lands
//! within one unit per channel. [`Hsl::rounded`] and [`Hsv::rounded`] give
//! the whole-number display form.

use crate::error::{Error, Result};
use crate::pixel;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into a 24-bit `0xRRGGBB` integer.
    pub fn to_packed(self) -> u32 {
        pixel::compose_rgb24(self.r, self.g, self.b)
    }

    /// Unpack from a 24-bit `0xRRGGBB` integer (upper byte ignored).
    pub fn from_packed(value: u32) -> Self {
        let (r, g, b) = pixel::extract_rgb24(value);
        Self { r, g, b }
    }
}

/// HSL color representation
///
/// - `h`: Hue in degrees, [0.0, 360.0)
/// - `s`: Saturation in percent, [0.0, 100.0]
/// - `l`: Lightness in percent, [0.0, 100.0]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL color, validating every component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `h` is outside [0, 360) or `s`/`l`
    /// are outside [0, 100].
    pub fn new(h: f64, s: f64, l: f64) -> Result<Self> {
        check_hue(h)?;
        check_percent("saturation", s)?;
        check_percent("lightness", l)?;
        Ok(Self { h, s, l })
    }

    /// Whole-number form: integer degrees and integer percent.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            h: round_hue(self.h),
            s: self.s.round(),
            l: self.l.round(),
        }
    }

    /// Convert to HSV without passing through RGB, so hue survives for
    /// achromatic colors.
    pub fn to_hsv(self) -> Hsv {
        let s = self.s / 100.0;
        let l = self.l / 100.0;
        let v = l + s * l.min(1.0 - l);
        let sv = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
        Hsv {
            h: self.h,
            s: sv * 100.0,
            v: v * 100.0,
        }
    }
}

/// HSV color representation
///
/// - `h`: Hue in degrees, [0.0, 360.0)
/// - `s`: Saturation in percent, [0.0, 100.0]
/// - `v`: Value in percent, [0.0, 100.0]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    /// Create a new HSV color, validating every component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `h` is outside [0, 360) or `s`/`v`
    /// are outside [0, 100].
    pub fn new(h: f64, s: f64, v: f64) -> Result<Self> {
        check_hue(h)?;
        check_percent("saturation", s)?;
        check_percent("value", v)?;
        Ok(Self { h, s, v })
    }

    /// Whole-number form: integer degrees and integer percent.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            h: round_hue(self.h),
            s: self.s.round(),
            v: self.v.round(),
        }
    }

    /// Convert to HSL without passing through RGB.
    pub fn to_hsl(self) -> Hsl {
        let s = self.s / 100.0;
        let v = self.v / 100.0;
        let l = v * (1.0 - s / 2.0);
        let sl = if l == 0.0 || l == 1.0 {
            0.0
        } else {
            (v - l) / l.min(1.0 - l)
        };
        Hsl {
            h: self.h,
            s: sl * 100.0,
            l: l * 100.0,
        }
    }
}

fn check_hue(h: f64) -> Result<()> {
    if (0.0..360.0).contains(&h) {
        Ok(())
    } else {
        Err(Error::InvalidRange {
            what: "hue",
            value: h,
        })
    }
}

fn check_percent(what: &'static str, value: f64) -> Result<()> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidRange { what, value })
    }
}

fn round_hue(h: f64) -> f64 {
    h.round().rem_euclid(360.0)
}

/// Hue in degrees for an RGB triple, normalized to [0, 360).
///
/// The sector is picked by which channel is the maximum. Gray input
/// (r = g = b) has hue 0.
fn hue_degrees(r: u8, g: u8, b: u8) -> f64 {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max == min {
        return 0.0;
    }

    let delta = f64::from(max - min);
    let (rf, gf, bf) = (f64::from(r), f64::from(g), f64::from(b));
    let sector = if max == r {
        (gf - bf) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (bf - rf) / delta + 2.0
    } else {
        (rf - gf) / delta + 4.0
    };

    (sector * 60.0).rem_euclid(360.0)
}

/// Convert RGB values to HSL
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let max = f64::from(r.max(g).max(b)) / 255.0;
    let min = f64::from(r.min(g).min(b)) / 255.0;
    let delta = max - min;
    let l = (max + min) / 2.0;

    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    Hsl {
        h: hue_degrees(r, g, b),
        s: (s * 100.0).min(100.0),
        l: l * 100.0,
    }
}

/// Convert RGB values to HSV
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let max = f64::from(r.max(g).max(b)) / 255.0;
    let min = f64::from(r.min(g).min(b)) / 255.0;
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsv {
        h: hue_degrees(r, g, b),
        s: s * 100.0,
        v: max * 100.0,
    }
}

/// Map chroma, hue and match value to rounded RGB channels.
fn chroma_to_rgb(h: f64, c: f64, m: f64) -> Rgb {
    let hp = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());

    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb::new(channel(r1), channel(g1), channel(b1))
}

/// Convert HSL to RGB
///
/// Channels are rounded to the nearest integer, not truncated.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    chroma_to_rgb(hsl.h, c, l - c / 2.0)
}

/// Convert HSV to RGB
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let s = hsv.s / 100.0;
    let v = hsv.v / 100.0;
    let c = v * s;
    chroma_to_rgb(hsv.h, c, v - c)
}

/// Format RGB channels as `#RRGGBB` (uppercase).
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Parse a hex color of the form `#RRGGBB` or `RRGGBB`.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] unless the input is exactly six hex
/// digits with an optional leading `#`.
pub fn parse_hex(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidFormat(hex.to_string()));
    }
    let value =
        u32::from_str_radix(digits, 16).map_err(|_| Error::InvalidFormat(hex.to_string()))?;
    Ok(Rgb::from_packed(value))
}
