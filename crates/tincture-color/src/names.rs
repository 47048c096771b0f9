//! Named color table
//!
//! A fixed table of canonical colors and a nearest-name lookup.
//!
//! Lookup tries an exact match first, then scans the whole table with a
//! [`Distance`] metric. The default metric, [`packed_distance`], compares
//! the colors as packed 24-bit integers. That is not a perceptual distance:
//! a step in red outweighs any change in green or blue. It is kept because
//! names produced by it must stay stable; pass another metric to
//! [`nearest_by`] to compare differently.

use tincture_core::{Color, Result, Rgb, parse_hex};

/// A canonical color and its display name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    /// Packed `0xRRGGBB`
    pub value: u32,
    /// Display name
    pub name: &'static str,
}

impl NamedColor {
    const fn new(value: u32, name: &'static str) -> Self {
        Self { value, name }
    }

    /// The entry as a [`Color`]
    pub fn color(&self) -> Color {
        Color::from(Rgb::from_packed(self.value))
    }
}

/// Distance metric between two packed `0xRRGGBB` colors
pub type Distance = fn(u32, u32) -> u32;

/// Every named color, in lookup order.
///
/// Ties in [`nearest`] go to the entry that appears first here.
pub const NAMED_COLORS: &[NamedColor] = &[
    NamedColor::new(0x000000, "Black"),
    NamedColor::new(0xFFFFFF, "White"),
    NamedColor::new(0xFF0000, "Red"),
    NamedColor::new(0x00FF00, "Lime"),
    NamedColor::new(0x0000FF, "Blue"),
    NamedColor::new(0xFFFF00, "Yellow"),
    NamedColor::new(0x00FFFF, "Cyan"),
    NamedColor::new(0xFF00FF, "Magenta"),
    NamedColor::new(0xC0C0C0, "Silver"),
    NamedColor::new(0x808080, "Gray"),
    NamedColor::new(0x800000, "Maroon"),
    NamedColor::new(0x808000, "Olive"),
    NamedColor::new(0x008000, "Green"),
    NamedColor::new(0x800080, "Purple"),
    NamedColor::new(0x008080, "Teal"),
    NamedColor::new(0x000080, "Navy"),
    NamedColor::new(0xFFA500, "Orange"),
    NamedColor::new(0xFFC0CB, "Pink"),
    NamedColor::new(0xA52A2A, "Brown"),
    NamedColor::new(0xFFD700, "Gold"),
    NamedColor::new(0xFF7F50, "Coral"),
    NamedColor::new(0xFA8072, "Salmon"),
    NamedColor::new(0xFF6347, "Tomato"),
    NamedColor::new(0xDC143C, "Crimson"),
    NamedColor::new(0x4B0082, "Indigo"),
    NamedColor::new(0xEE82EE, "Violet"),
    NamedColor::new(0xDA70D6, "Orchid"),
    NamedColor::new(0xDDA0DD, "Plum"),
    NamedColor::new(0xE6E6FA, "Lavender"),
    NamedColor::new(0xF5F5DC, "Beige"),
    NamedColor::new(0xFFFFF0, "Ivory"),
    NamedColor::new(0xF0E68C, "Khaki"),
    NamedColor::new(0xD2B48C, "Tan"),
    NamedColor::new(0xD2691E, "Chocolate"),
    NamedColor::new(0xA0522D, "Sienna"),
    NamedColor::new(0xCD853F, "Peru"),
    NamedColor::new(0xF5DEB3, "Wheat"),
    NamedColor::new(0x40E0D0, "Turquoise"),
    NamedColor::new(0x7FFFD4, "Aquamarine"),
    NamedColor::new(0x87CEEB, "Sky Blue"),
    NamedColor::new(0x4682B4, "Steel Blue"),
    NamedColor::new(0x4169E1, "Royal Blue"),
    NamedColor::new(0x1E90FF, "Dodger Blue"),
    NamedColor::new(0x00BFFF, "Deep Sky Blue"),
    NamedColor::new(0x191970, "Midnight Blue"),
    NamedColor::new(0x6A5ACD, "Slate Blue"),
    NamedColor::new(0x708090, "Slate Gray"),
    NamedColor::new(0xA9A9A9, "Dark Gray"),
    NamedColor::new(0xD3D3D3, "Light Gray"),
    NamedColor::new(0x696969, "Dim Gray"),
    NamedColor::new(0x228B22, "Forest Green"),
    NamedColor::new(0x2E8B57, "Sea Green"),
    NamedColor::new(0x6B8E23, "Olive Drab"),
    NamedColor::new(0x32CD32, "Lime Green"),
    NamedColor::new(0x00FF7F, "Spring Green"),
    NamedColor::new(0x7FFF00, "Chartreuse"),
    NamedColor::new(0x9ACD32, "Yellow Green"),
    NamedColor::new(0x006400, "Dark Green"),
    NamedColor::new(0xFF69B4, "Hot Pink"),
    NamedColor::new(0xFF1493, "Deep Pink"),
    NamedColor::new(0xB22222, "Firebrick"),
    NamedColor::new(0x8B0000, "Dark Red"),
    NamedColor::new(0xFF4500, "Orange Red"),
    NamedColor::new(0xFF8C00, "Dark Orange"),
    NamedColor::new(0xDAA520, "Goldenrod"),
    NamedColor::new(0xF5FFFA, "Mint Cream"),
    NamedColor::new(0xFFFAFA, "Snow"),
];

/// Absolute difference of the packed 24-bit values.
pub fn packed_distance(a: u32, b: u32) -> u32 {
    a.abs_diff(b)
}

/// Exact match on the packed value.
pub fn lookup_exact(color: &Color) -> Option<&'static NamedColor> {
    let value = color.to_packed();
    NAMED_COLORS.iter().find(|entry| entry.value == value)
}

/// Nearest table entry under `metric`; an exact match always wins.
///
/// The first entry reaching the minimum distance is returned.
pub fn nearest_by(color: &Color, metric: Distance) -> &'static NamedColor {
    if let Some(entry) = lookup_exact(color) {
        return entry;
    }

    let value = color.to_packed();
    let mut best = &NAMED_COLORS[0];
    let mut best_distance = metric(value, best.value);
    for entry in &NAMED_COLORS[1..] {
        let d = metric(value, entry.value);
        if d < best_distance {
            best = entry;
            best_distance = d;
        }
    }
    best
}

/// Nearest table entry under [`packed_distance`].
pub fn nearest(color: &Color) -> &'static NamedColor {
    nearest_by(color, packed_distance)
}

/// Name of the nearest table entry for a color.
pub fn nearest_name(color: &Color) -> &'static str {
    nearest(color).name
}

/// Name of the nearest table entry for a hex string (case-insensitive).
///
/// # Errors
///
/// Returns `InvalidFormat` if `hex` is not a six-digit hex color.
pub fn nearest_name_for_hex(hex: &str) -> Result<&'static str> {
    let rgb = parse_hex(hex)?;
    Ok(nearest_name(&Color::from(rgb)))
}
