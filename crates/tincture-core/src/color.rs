//! Color - the immutable color value
//!
//! A [`Color`] is built from any one representation (HEX, RGB, HSL or HSV)
//! and derives the others at construction. It is never mutated in place;
//! operations such as [`Color::rotate_hue`] return a new value.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::model::{Hsl, Hsv, Rgb, hsl_to_rgb, hsv_to_rgb, parse_hex, rgb_to_hex, rgb_to_hsl};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single color held in RGB, HSL and HSV form at once.
///
/// All three representations denote the same color within one unit of
/// rounding. The hex form is derived from the RGB channels on demand.
///
/// With the `serde` feature, a `Color` serializes as its `#RRGGBB` string.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Color {
    rgb: Rgb,
    hsl: Hsl,
    hsv: Hsv,
}

impl Color {
    /// Black, `#000000`
    pub const BLACK: Color = Color {
        rgb: Rgb::new(0, 0, 0),
        hsl: Hsl {
            h: 0.0,
            s: 0.0,
            l: 0.0,
        },
        hsv: Hsv {
            h: 0.0,
            s: 0.0,
            v: 0.0,
        },
    };

    /// White, `#FFFFFF`
    pub const WHITE: Color = Color {
        rgb: Rgb::new(255, 255, 255),
        hsl: Hsl {
            h: 0.0,
            s: 0.0,
            l: 100.0,
        },
        hsv: Hsv {
            h: 0.0,
            s: 0.0,
            v: 100.0,
        },
    };

    /// Create a color from RGB channels.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let rgb = Rgb::new(r, g, b);
        let hsl = rgb_to_hsl(r, g, b);
        Self {
            rgb,
            hsl,
            hsv: hsl.to_hsv(),
        }
    }

    /// Create a color from a hex string (`#RRGGBB` or `RRGGBB`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] on malformed input. There is no
    /// silent fallback to black.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let rgb = parse_hex(hex)?;
        Ok(Self::from_rgb(rgb.r, rgb.g, rgb.b))
    }

    /// Create a color from HSL components (degrees, percent, percent).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if a component is out of its domain.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Result<Self> {
        Ok(Self::from_hsl_value(Hsl::new(h, s, l)?))
    }

    /// Create a color from HSV components (degrees, percent, percent).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if a component is out of its domain.
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Result<Self> {
        let hsv = Hsv::new(h, s, v)?;
        Ok(Self {
            rgb: hsv_to_rgb(hsv),
            hsl: hsv.to_hsl(),
            hsv,
        })
    }

    /// Build from an already validated HSL value.
    fn from_hsl_value(hsl: Hsl) -> Self {
        Self {
            rgb: hsl_to_rgb(hsl),
            hsl,
            hsv: hsl.to_hsv(),
        }
    }

    /// RGB channels
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Full-precision HSL
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// Full-precision HSV
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// Hex string, `#RRGGBB` uppercase
    pub fn hex(&self) -> String {
        rgb_to_hex(self.rgb.r, self.rgb.g, self.rgb.b)
    }

    /// Packed 24-bit `0xRRGGBB` value
    pub fn to_packed(&self) -> u32 {
        self.rgb.to_packed()
    }

    /// CSS `rgb(r, g, b)` string
    pub fn to_rgb_string(&self) -> String {
        let Rgb { r, g, b } = self.rgb;
        format!("rgb({r}, {g}, {b})")
    }

    /// CSS `hsl(h, s%, l%)` string in whole units
    pub fn to_hsl_string(&self) -> String {
        let Hsl { h, s, l } = self.hsl.rounded();
        format!("hsl({h}, {s}%, {l}%)")
    }

    /// Same saturation and lightness, hue rotated by `degrees` (mod 360).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `degrees` is NaN or infinite.
    pub fn rotate_hue(&self, degrees: f64) -> Result<Self> {
        if !degrees.is_finite() {
            return Err(Error::InvalidRange {
                what: "hue rotation",
                value: degrees,
            });
        }
        let mut h = (self.hsl.h + degrees).rem_euclid(360.0);
        if h >= 360.0 {
            h = 0.0;
        }
        Ok(Self::from_hsl_value(Hsl { h, ..self.hsl }))
    }

    /// Same hue and saturation, new lightness in percent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `lightness` is outside [0, 100].
    pub fn with_lightness(&self, lightness: f64) -> Result<Self> {
        Ok(Self::from_hsl_value(Hsl::new(
            self.hsl.h, self.hsl.s, lightness,
        )?))
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb.r, rgb.g, rgb.b)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s.trim())
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_derives_all_forms() {
        let c = Color::from_hex("#FF0000").unwrap();
        assert_eq!(c.rgb(), Rgb::new(255, 0, 0));
        assert_eq!(c.hsl().rounded(), Hsl::new(0.0, 100.0, 50.0).unwrap());
        assert_eq!(c.hsv().rounded(), Hsv::new(0.0, 100.0, 100.0).unwrap());
        assert_eq!(c.hex(), "#FF0000");
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        for bad in ["", "#", "#12345", "#1234567", "xyzxyz", "#12 456"] {
            assert!(
                matches!(Color::from_hex(bad), Err(Error::InvalidFormat(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_lowercase_hex_is_displayed_uppercase() {
        let c: Color = "#abcdef".parse().unwrap();
        assert_eq!(c.to_string(), "#ABCDEF");
    }

    #[test]
    fn test_from_hsl_keeps_hue_for_gray() {
        let c = Color::from_hsl(200.0, 0.0, 50.0).unwrap();
        assert_eq!(c.hsl().h, 200.0);
        assert_eq!(c.hsv().h, 200.0);
        assert_eq!(c.rgb(), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_from_hsv() {
        let c = Color::from_hsv(240.0, 100.0, 100.0).unwrap();
        assert_eq!(c.hex(), "#0000FF");
        assert!((c.hsl().l - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_hsl_range_errors() {
        assert!(matches!(
            Color::from_hsl(400.0, 50.0, 50.0),
            Err(Error::InvalidRange { what: "hue", .. })
        ));
        assert!(Color::from_hsv(0.0, 0.0, 101.0).is_err());
    }

    #[test]
    fn test_rotate_hue_wraps() {
        let c = Color::from_hsl(300.0, 80.0, 40.0).unwrap();
        let rotated = c.rotate_hue(90.0).unwrap();
        assert_eq!(rotated.hsl().h, 30.0);
        assert_eq!(rotated.hsl().s, 80.0);
        assert_eq!(rotated.hsl().l, 40.0);
        assert_eq!(c.rotate_hue(-330.0).unwrap().hsl().h, 330.0);
    }

    #[test]
    fn test_rotate_hue_rejects_non_finite() {
        let c = Color::from_hex("#3366CC").unwrap();
        for degrees in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            assert!(matches!(
                c.rotate_hue(degrees),
                Err(Error::InvalidRange {
                    what: "hue rotation",
                    ..
                })
            ));
        }
        let huge = c.rotate_hue(1.0e12).unwrap();
        assert!(huge.hsl().h.is_finite());
        assert!(huge.hsv().h.is_finite());
        assert_eq!(hsl_to_rgb(huge.hsl()), huge.rgb());
    }

    #[test]
    fn test_with_lightness() {
        let c = Color::from_hex("#336699").unwrap();
        let lighter = c.with_lightness(80.0).unwrap();
        assert_eq!(lighter.hsl().h, c.hsl().h);
        assert_eq!(lighter.hsl().l, 80.0);
        assert!(c.with_lightness(120.0).is_err());
    }

    #[test]
    fn test_css_strings() {
        let c = Color::from_rgb(255, 128, 0);
        assert_eq!(c.to_rgb_string(), "rgb(255, 128, 0)");
        assert_eq!(c.to_hsl_string(), "hsl(30, 100%, 50%)");
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde_hex_string() {
        let c = Color::from_hex("#3366CC").unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#3366CC\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);

        let lower: Color = serde_json::from_str("\"#3366cc\"").unwrap();
        assert_eq!(lower, c);
        assert!(serde_json::from_str::<Color>("\"#12\"").is_err());
        assert!(serde_json::from_str::<Color>("42").is_err());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde_components() {
        let rgb: Rgb = serde_json::from_str(r#"{"r":1,"g":2,"b":3}"#).unwrap();
        assert_eq!(rgb, Rgb::new(1, 2, 3));
        let hsl = Hsl::new(210.0, 40.0, 50.0).unwrap();
        let back: Hsl = serde_json::from_str(&serde_json::to_string(&hsl).unwrap()).unwrap();
        assert_eq!(back, hsl);
    }

    #[test]
    fn test_constants_match_constructors() {
        assert_eq!(Color::BLACK, Color::from_rgb(0, 0, 0));
        assert_eq!(Color::WHITE, Color::from_rgb(255, 255, 255));
    }
}
