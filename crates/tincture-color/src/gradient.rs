//! Linear RGB gradients
//!
//! Interpolation is per channel and linear in sRGB, not in a perceptually
//! uniform space, so midpoints between saturated complements come out
//! darker than either end.
//!
//! # Example
//!
//! ```
//! use tincture_color::gradient::{Gradient, interpolate};
//! use tincture_core::Color;
//!
//! let red = Color::from_hex("#FF0000").unwrap();
//! let blue = Color::from_hex("#0000FF").unwrap();
//! assert_eq!(interpolate(&red, &blue, 0.5).hex(), "#800080");
//!
//! let g = Gradient::evenly_spaced(&[red, blue]).unwrap();
//! assert_eq!(g.at(0.25).hex(), "#BF0040");
//! ```

use crate::{ColorError, ColorResult};
use tincture_core::{Color, Error};

/// A color at a position in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub color: Color,
    pub position: f64,
}

impl GradientStop {
    /// Create a new stop
    pub fn new(color: Color, position: f64) -> Self {
        Self { color, position }
    }
}

/// Ordered sequence of at least two stops with non-decreasing positions
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Create a gradient from explicit stops.
    ///
    /// # Errors
    ///
    /// - [`ColorError::EmptyGradient`] with fewer than two stops
    /// - [`ColorError::Core`] (`InvalidRange`) if a position is outside [0, 1]
    /// - [`ColorError::InvalidParameters`] if positions decrease
    pub fn new(stops: Vec<GradientStop>) -> ColorResult<Self> {
        if stops.len() < 2 {
            return Err(ColorError::EmptyGradient { stops: stops.len() });
        }
        for stop in &stops {
            if !(0.0..=1.0).contains(&stop.position) {
                return Err(Error::InvalidRange {
                    what: "gradient stop position",
                    value: stop.position,
                }
                .into());
            }
        }
        if stops.windows(2).any(|w| w[1].position < w[0].position) {
            return Err(ColorError::InvalidParameters(
                "gradient stop positions must not decrease".to_string(),
            ));
        }
        Ok(Self { stops })
    }

    /// Spread colors evenly from position 0 to position 1.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::EmptyGradient`] with fewer than two colors.
    pub fn evenly_spaced(colors: &[Color]) -> ColorResult<Self> {
        if colors.len() < 2 {
            return Err(ColorError::EmptyGradient {
                stops: colors.len(),
            });
        }
        let last = (colors.len() - 1) as f64;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| GradientStop::new(color, i as f64 / last))
            .collect();
        Self::new(stops)
    }

    /// The stops, in position order
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Color at `t`, clamped to [0, 1].
    ///
    /// The bracketing pair of stops is found by position and `t` is
    /// renormalized within that segment.
    pub fn at(&self, t: f64) -> Color {
        let t = clamp_unit(t);
        let first = &self.stops[0];
        let last = &self.stops[self.stops.len() - 1];
        if t <= first.position {
            return first.color;
        }
        if t >= last.position {
            return last.color;
        }

        // first.position < t < last.position, so a bracketing segment exists
        let i = self
            .stops
            .windows(2)
            .position(|w| t <= w[1].position)
            .unwrap_or(self.stops.len() - 2);
        let (lo, hi) = (&self.stops[i], &self.stops[i + 1]);
        let span = hi.position - lo.position;
        if span <= 0.0 {
            return hi.color;
        }
        interpolate(&lo.color, &hi.color, (t - lo.position) / span)
    }

    /// `n` colors sampled at even intervals from 0 to 1 inclusive.
    ///
    /// `n == 1` samples the start only.
    pub fn sample(&self, n: usize) -> Vec<Color> {
        match n {
            0 => Vec::new(),
            1 => vec![self.at(0.0)],
            _ => {
                let last = (n - 1) as f64;
                (0..n).map(|i| self.at(i as f64 / last)).collect()
            }
        }
    }
}

fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Linear interpolation between two colors, per RGB channel.
///
/// `t` is clamped to [0, 1]. The endpoints return the inputs unchanged.
pub fn interpolate(from: &Color, to: &Color, t: f64) -> Color {
    let t = clamp_unit(t);
    if t <= 0.0 {
        return *from;
    }
    if t >= 1.0 {
        return *to;
    }

    let (a, b) = (from.rgb(), to.rgb());
    let lerp = |x: u8, y: u8| {
        let x = f64::from(x);
        (x + (f64::from(y) - x) * t).round() as u8
    };
    Color::from_rgb(lerp(a.r, b.r), lerp(a.g, b.g), lerp(a.b, b.b))
}
