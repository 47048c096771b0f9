//! Gradient and logo compositing for rendered bitmaps
//!
//! Used to style a rendered two-tone bitmap such as a QR code:
//!
//! - Dark pixels are recolored along a [`Gradient`] using diagonal
//!   progress `t = (x + y) / (2 * width)`
//! - A logo is placed in the center on a padded background plate
//!
//! Bitmap generation itself happens elsewhere; these functions only
//! rewrite pixels of an existing [`Bitmap`].

use crate::gradient::Gradient;
use crate::{ColorError, ColorResult};
use tincture_core::{Bitmap, Color, Error, pixel};

/// Options for compositing
#[derive(Debug, Clone)]
pub struct CompositeOptions {
    /// Opaque pixels with brightness below this count as dark
    pub dark_threshold: u8,
    /// Width of the plate border around a centered logo, in pixels
    pub logo_padding: u32,
    /// Plate color behind a centered logo
    pub logo_background: Color,
}

impl Default for CompositeOptions {
    fn default() -> Self {
        Self {
            dark_threshold: 128,
            logo_padding: 4,
            logo_background: Color::WHITE,
        }
    }
}

/// Diagonal progress of a pixel across the bitmap.
///
/// Values past 1.0 on tall bitmaps are clamped by [`Gradient::at`].
#[inline]
pub fn diagonal_progress(x: u32, y: u32, width: u32) -> f64 {
    (f64::from(x) + f64::from(y)) / (2.0 * f64::from(width))
}

/// Mark pixels that are opaque (alpha >= 128) and darker than `threshold`.
///
/// The mask is row-major, one entry per pixel.
pub fn dark_pixel_mask(bitmap: &Bitmap, threshold: u8) -> Vec<bool> {
    bitmap
        .pixels()
        .map(|[r, g, b, a]| a >= 128 && pixel::brightness(r, g, b) < f64::from(threshold))
        .collect()
}

/// Recolor every masked pixel from `gradient`, keeping its alpha.
///
/// Returns the number of pixels written.
///
/// # Errors
///
/// Returns [`ColorError::Core`] (`BufferSize`) if `mask` does not have one
/// entry per pixel.
pub fn fill_masked_with_gradient(
    bitmap: &mut Bitmap,
    mask: &[bool],
    gradient: &Gradient,
) -> ColorResult<usize> {
    if mask.len() != bitmap.pixel_count() {
        return Err(Error::BufferSize {
            expected: bitmap.pixel_count(),
            actual: mask.len(),
        }
        .into());
    }

    let width = bitmap.width();
    let mut written = 0;
    for (i, _) in mask.iter().enumerate().filter(|&(_, &dark)| dark) {
        let x = (i % width as usize) as u32;
        let y = (i / width as usize) as u32;
        let rgb = gradient.at(diagonal_progress(x, y, width)).rgb();
        let alpha = bitmap.get_pixel(x, y).map_or(255, |p| p[3]);
        bitmap.set_pixel(x, y, [rgb.r, rgb.g, rgb.b, alpha])?;
        written += 1;
    }

    log::trace!("composite: {} of {} pixels tinted", written, mask.len());
    Ok(written)
}

/// Recolor the dark pixels of `bitmap` from `gradient`.
///
/// # Errors
///
/// Propagates errors from [`fill_masked_with_gradient`].
pub fn fill_dark_with_gradient(
    bitmap: &mut Bitmap,
    gradient: &Gradient,
    options: &CompositeOptions,
) -> ColorResult<usize> {
    let mask = dark_pixel_mask(bitmap, options.dark_threshold);
    fill_masked_with_gradient(bitmap, &mask, gradient)
}

/// Source-over blend of one channel, rounded.
#[inline]
fn blend_channel(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = u32::from(alpha);
    ((u32::from(src) * a + u32::from(dst) * (255 - a) + 127) / 255) as u8
}

/// Place `logo` in the center of `base` on an opaque padded plate.
///
/// The plate is filled with `options.logo_background`, then the logo is
/// alpha-blended over it.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] if the logo plus padding does
/// not fit inside `base`.
pub fn overlay_centered_logo(
    base: &mut Bitmap,
    logo: &Bitmap,
    options: &CompositeOptions,
) -> ColorResult<()> {
    let pad = options.logo_padding;
    let (base_w, base_h) = (base.width(), base.height());
    let does_not_fit = || {
        ColorError::InvalidParameters(format!(
            "logo {}x{} with padding {} does not fit in {}x{}",
            logo.width(),
            logo.height(),
            pad,
            base_w,
            base_h
        ))
    };
    let border = pad.checked_mul(2).ok_or_else(does_not_fit)?;
    let plate_w = logo.width().checked_add(border).ok_or_else(does_not_fit)?;
    let plate_h = logo.height().checked_add(border).ok_or_else(does_not_fit)?;
    if plate_w > base_w || plate_h > base_h {
        return Err(does_not_fit());
    }

    let plate_x = (base_w - plate_w) / 2;
    let plate_y = (base_h - plate_h) / 2;
    let bg = options.logo_background.rgb();
    for y in plate_y..plate_y + plate_h {
        for x in plate_x..plate_x + plate_w {
            base.set_pixel(x, y, [bg.r, bg.g, bg.b, 255])?;
        }
    }

    let (x0, y0) = (plate_x + pad, plate_y + pad);
    for y in 0..logo.height() {
        for x in 0..logo.width() {
            let (Some([r, g, b, a]), Some([dr, dg, db, _])) =
                (logo.get_pixel(x, y), base.get_pixel(x0 + x, y0 + y))
            else {
                continue;
            };
            let out = [
                blend_channel(r, dr, a),
                blend_channel(g, dg, a),
                blend_channel(b, db, a),
                255,
            ];
            base.set_pixel(x0 + x, y0 + y, out)?;
        }
    }

    Ok(())
}
