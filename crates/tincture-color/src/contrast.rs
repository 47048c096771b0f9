//! WCAG contrast evaluation
//!
//! Relative luminance follows WCAG 2.x: each sRGB channel is linearized
//! (`c/12.92` up to 0.03928, `((c+0.055)/1.055)^2.4` above) and weighted
//! 0.2126 / 0.7152 / 0.0722. The contrast ratio of two luminances is
//! `(lighter + 0.05) / (darker + 0.05)`, which lies in [1, 21].

use std::fmt;

use tincture_core::Color;

/// Ratio at or above which a pair rates AAA
pub const AAA_RATIO: f64 = 7.0;
/// Ratio at or above which a pair rates AA
pub const AA_RATIO: f64 = 4.5;
/// Ratio at or above which large text (18pt, or 14pt bold) passes AA
pub const AA_LARGE_RATIO: f64 = 3.0;

/// WCAG conformance rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContrastRating {
    Aaa,
    Aa,
    Fail,
}

impl ContrastRating {
    /// Rate a contrast ratio. Each band includes its lower bound.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= AAA_RATIO {
            ContrastRating::Aaa
        } else if ratio >= AA_RATIO {
            ContrastRating::Aa
        } else {
            ContrastRating::Fail
        }
    }

    /// Human-readable explanation of the rating
    pub fn description(self) -> &'static str {
        match self {
            ContrastRating::Aaa => "Excellent contrast, readable at any text size",
            ContrastRating::Aa => "Good contrast, meets the minimum for body text",
            ContrastRating::Fail => "Insufficient contrast for body text",
        }
    }
}

impl fmt::Display for ContrastRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContrastRating::Aaa => "AAA",
            ContrastRating::Aa => "AA",
            ContrastRating::Fail => "Fail",
        })
    }
}

/// Contrast between a foreground and a background color
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastResult {
    /// Contrast ratio, always >= 1.0
    pub ratio: f64,
    pub rating: ContrastRating,
    pub description: &'static str,
}

impl ContrastResult {
    /// Whether the pair passes AA for large text.
    pub fn passes_large_text(&self) -> bool {
        self.ratio >= AA_LARGE_RATIO
    }
}

#[inline]
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance in [0, 1]
pub fn relative_luminance(color: &Color) -> f64 {
    let rgb = color.rgb();
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// Contrast ratio between two colors, symmetric in its arguments.
pub fn contrast_ratio(a: &Color, b: &Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Evaluate a foreground/background pair.
pub fn evaluate(foreground: &Color, background: &Color) -> ContrastResult {
    let ratio = contrast_ratio(foreground, background);
    let rating = ContrastRating::from_ratio(ratio);
    ContrastResult {
        ratio,
        rating,
        description: rating.description(),
    }
}

/// Black or white, whichever contrasts more with `background`.
///
/// Ties go to black.
pub fn best_text_color(background: &Color) -> Color {
    if contrast_ratio(&Color::BLACK, background) >= contrast_ratio(&Color::WHITE, background) {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_on_white() {
        let result = evaluate(&Color::BLACK, &Color::WHITE);
        assert!((result.ratio - 21.0).abs() < 1e-9);
        assert_eq!(result.rating, ContrastRating::Aaa);
    }

    #[test]
    fn test_same_color() {
        let gray = Color::from_hex("#777777").unwrap();
        let result = evaluate(&gray, &gray);
        assert_eq!(result.ratio, 1.0);
        assert_eq!(result.rating, ContrastRating::Fail);
        assert_eq!(result.description, ContrastRating::Fail.description());
    }

    #[test]
    fn test_rating_bands_include_lower_bound() {
        assert_eq!(ContrastRating::from_ratio(7.0), ContrastRating::Aaa);
        assert_eq!(ContrastRating::from_ratio(6.999), ContrastRating::Aa);
        assert_eq!(ContrastRating::from_ratio(4.5), ContrastRating::Aa);
        assert_eq!(ContrastRating::from_ratio(4.499), ContrastRating::Fail);
        assert_eq!(ContrastRating::from_ratio(1.0), ContrastRating::Fail);
    }

    #[test]
    fn test_luminance_endpoints() {
        assert_eq!(relative_luminance(&Color::BLACK), 0.0);
        assert!((relative_luminance(&Color::WHITE) - 1.0).abs() < 1e-12);
        let red = Color::from_rgb(255, 0, 0);
        assert!((relative_luminance(&red) - 0.2126).abs() < 1e-12);
    }

    #[test]
    fn test_large_text() {
        // #949494 on white is about 3.03:1
        let fg = Color::from_hex("#949494").unwrap();
        let result = evaluate(&fg, &Color::WHITE);
        assert_eq!(result.rating, ContrastRating::Fail);
        assert!(result.passes_large_text());
    }

    #[test]
    fn test_best_text_color() {
        assert_eq!(best_text_color(&Color::from_hex("#FFFF00").unwrap()), Color::BLACK);
        assert_eq!(best_text_color(&Color::from_hex("#000080").unwrap()), Color::WHITE);
    }

    #[test]
    fn test_rating_display() {
        assert_eq!(ContrastRating::Aaa.to_string(), "AAA");
        assert_eq!(ContrastRating::Aa.to_string(), "AA");
        assert_eq!(ContrastRating::Fail.to_string(), "Fail");
    }
}
