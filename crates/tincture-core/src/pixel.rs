//! Packed pixel helpers
//!
//! Opaque colors are packed as 24-bit `0xRRGGBB` integers wherever they are
//! used as keys (named-color table, palette buckets).

/// Compose a 24-bit `0xRRGGBB` value.
#[inline]
pub fn compose_rgb24(r: u8, g: u8, b: u8) -> u32 {
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// Extract RGB channels from a 24-bit `0xRRGGBB` value.
#[inline]
pub fn extract_rgb24(value: u32) -> (u8, u8, u8) {
    (
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    )
}

/// Mean of the three color channels, as an unrounded float.
#[inline]
pub fn brightness(r: u8, g: u8, b: u8) -> f64 {
    (f64::from(r) + f64::from(g) + f64::from(b)) / 3.0
}
