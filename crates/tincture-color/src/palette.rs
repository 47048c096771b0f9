//! Palette extraction
//!
//! Builds a ranked palette of representative colors from an RGBA8 bitmap.
//!
//! # Algorithm
//!
//! 1. Skip pixels with alpha below `alpha_threshold`.
//! 2. Skip pixels whose brightness `(R+G+B)/3` is below `min_brightness` or
//!    above `max_brightness` (shadows and highlights).
//! 3. Quantize each channel to the nearest multiple of `quant_step` and
//!    count pixels per quantized color.
//! 4. Score each quantized color from its whole-number HSL:
//!    `(s/100) * (min(l, 100-l)/50) * ln(count+1)`.
//! 5. Merge quantized colors into groups keyed by
//!    `(round(h/hue_bin), round(s/saturation_bin), round(l/lightness_bin))`.
//!    A group is represented by its most frequent member and scored by its
//!    best member.
//! 6. Sort groups by score, highest first, and keep `max_colors`.
//!
//! Every tie (representative choice, equal scores) goes to whichever
//! quantized color was seen first in row-major scan order, so the output
//! for a given bitmap and options is fully deterministic.
//!
//! The thresholds, step and bin sizes are empirical. [`PaletteOptions`]
//! exposes them; the defaults must be kept to reproduce existing palettes.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::{ColorError, ColorResult};
use tincture_core::{Bitmap, Color, Error, Rgb, pixel, rgb_to_hsl};

/// Options for palette extraction
#[derive(Debug, Clone)]
pub struct PaletteOptions {
    /// Maximum number of swatches returned
    pub max_colors: usize,
    /// Pixels with alpha below this are ignored
    pub alpha_threshold: u8,
    /// Pixels darker than this mean brightness are ignored
    pub min_brightness: f64,
    /// Pixels brighter than this mean brightness are ignored
    pub max_brightness: f64,
    /// Channel quantization step
    pub quant_step: u8,
    /// Hue bin width in degrees
    pub hue_bin: f64,
    /// Saturation bin width in percent
    pub saturation_bin: f64,
    /// Lightness bin width in percent
    pub lightness_bin: f64,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            max_colors: 8,
            alpha_threshold: 128,
            min_brightness: 30.0,
            max_brightness: 240.0,
            quant_step: 16,
            hue_bin: 30.0,
            saturation_bin: 20.0,
            lightness_bin: 20.0,
        }
    }
}

impl PaletteOptions {
    /// Check option ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidParameters`] if `max_colors` or
    /// `quant_step` is zero, a bin width is not positive, or the brightness
    /// bounds are inverted.
    pub fn validate(&self) -> ColorResult<()> {
        if self.max_colors == 0 {
            return Err(ColorError::InvalidParameters(
                "max_colors must be at least 1".to_string(),
            ));
        }
        if self.quant_step == 0 {
            return Err(ColorError::InvalidParameters(
                "quant_step must be at least 1".to_string(),
            ));
        }
        let bins = [self.hue_bin, self.saturation_bin, self.lightness_bin];
        if bins.iter().any(|&b| !(b > 0.0)) {
            return Err(ColorError::InvalidParameters(
                "bin widths must be positive".to_string(),
            ));
        }
        if !(self.min_brightness <= self.max_brightness) {
            return Err(ColorError::InvalidParameters(format!(
                "min_brightness {} exceeds max_brightness {}",
                self.min_brightness, self.max_brightness
            )));
        }
        Ok(())
    }
}

/// One palette entry
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteSwatch {
    /// Representative color of the group
    pub color: Color,
    /// Pixel count of the representative quantized color
    pub weight: u64,
    /// Group score the palette is ranked by
    pub score: f64,
}

/// Swatches ordered by descending score
pub type Palette = Vec<PaletteSwatch>;

/// Quantized color and the number of pixels that fell into it
#[derive(Debug, Clone, Copy)]
struct Bucket {
    rgb: Rgb,
    count: u64,
}

/// Pixel counts per quantized color, in first-seen order
#[derive(Debug, Default)]
struct BucketCounter {
    index: HashMap<u32, usize>,
    buckets: Vec<Bucket>,
    seen: usize,
}

impl BucketCounter {
    fn add(&mut self, rgb: Rgb) {
        match self.index.entry(rgb.to_packed()) {
            Entry::Occupied(e) => self.buckets[*e.get()].count += 1,
            Entry::Vacant(e) => {
                e.insert(self.buckets.len());
                self.buckets.push(Bucket { rgb, count: 1 });
            }
        }
    }

    /// Count the qualifying pixels of one row of RGBA8 bytes.
    fn add_row(&mut self, row: &[u8], options: &PaletteOptions) {
        for px in row.chunks_exact(4) {
            self.seen += 1;
            let (r, g, b, a) = (px[0], px[1], px[2], px[3]);
            if a < options.alpha_threshold {
                continue;
            }
            let brightness = pixel::brightness(r, g, b);
            if brightness < options.min_brightness || brightness > options.max_brightness {
                continue;
            }
            let step = options.quant_step;
            self.add(Rgb::new(
                quantize_channel(r, step),
                quantize_channel(g, step),
                quantize_channel(b, step),
            ));
        }
    }

    fn kept(&self) -> u64 {
        self.buckets.iter().map(|b| b.count).sum()
    }
}

/// Round to the nearest multiple of `step`, saturating at 255.
#[inline]
fn quantize_channel(c: u8, step: u8) -> u8 {
    let step = f64::from(step);
    ((f64::from(c) / step).round() * step).min(255.0) as u8
}

/// Score a quantized color from its whole-number saturation and lightness.
fn score(saturation: f64, lightness: f64, count: u64) -> f64 {
    (saturation / 100.0) * (lightness.min(100.0 - lightness) / 50.0) * (count.saturating_add(1) as f64).ln()
}

/// A merged group of visually similar quantized colors
#[derive(Debug, Clone, Copy)]
struct Group {
    representative: Bucket,
    score: f64,
}

fn rank(counter: &BucketCounter, options: &PaletteOptions) -> Palette {
    let mut index: HashMap<(i64, i64, i64), usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for &bucket in &counter.buckets {
        let hsl = rgb_to_hsl(bucket.rgb.r, bucket.rgb.g, bucket.rgb.b).rounded();
        let bucket_score = score(hsl.s, hsl.l, bucket.count);
        let key = (
            (hsl.h / options.hue_bin).round() as i64,
            (hsl.s / options.saturation_bin).round() as i64,
            (hsl.l / options.lightness_bin).round() as i64,
        );

        match index.entry(key) {
            Entry::Occupied(e) => {
                let group = &mut groups[*e.get()];
                // Strictly greater, so the earliest bucket keeps a tie
                if bucket.count > group.representative.count {
                    group.representative = bucket;
                }
                group.score = group.score.max(bucket_score);
            }
            Entry::Vacant(e) => {
                e.insert(groups.len());
                groups.push(Group {
                    representative: bucket,
                    score: bucket_score,
                });
            }
        }
    }

    // Stable sort: equal scores stay in first-seen order
    groups.sort_by(|a, b| b.score.total_cmp(&a.score));

    log::debug!(
        "palette: {} of {} pixels kept, {} buckets, {} groups",
        counter.kept(),
        counter.seen,
        counter.buckets.len(),
        groups.len()
    );

    groups
        .into_iter()
        .take(options.max_colors)
        .map(|g| PaletteSwatch {
            color: Color::from(g.representative.rgb),
            weight: g.representative.count,
            score: g.score,
        })
        .collect()
}

fn extract_rows<'a>(
    rows: impl Iterator<Item = &'a [u8]>,
    options: &PaletteOptions,
    cancel: Option<&AtomicBool>,
) -> ColorResult<Palette> {
    options.validate()?;

    let mut counter = BucketCounter::default();
    for row in rows {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            log::debug!("palette: cancelled after {} pixels", counter.seen);
            return Err(ColorError::Cancelled);
        }
        counter.add_row(row, options);
    }

    Ok(rank(&counter, options))
}

/// Extract a ranked palette from a bitmap.
///
/// A bitmap with no qualifying pixels yields an empty palette.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] if the options are invalid.
pub fn extract_palette(bitmap: &Bitmap, options: &PaletteOptions) -> ColorResult<Palette> {
    extract_rows(bitmap.rows(), options, None)
}

/// Extract a palette of at most `max_colors` swatches with default options
pub fn extract_palette_simple(bitmap: &Bitmap, max_colors: usize) -> ColorResult<Palette> {
    extract_palette(
        bitmap,
        &PaletteOptions {
            max_colors,
            ..Default::default()
        },
    )
}

/// Extract a palette straight from a raw RGBA8 buffer.
///
/// # Errors
///
/// Returns [`ColorError::Core`] (`BufferSize`) if `data` is not exactly
/// `width * height * 4` bytes, or [`ColorError::InvalidParameters`] if
/// `max_colors` is zero.
pub fn extract_palette_from_rgba(
    data: &[u8],
    width: u32,
    height: u32,
    max_colors: usize,
) -> ColorResult<Palette> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(Error::InvalidDimension { width, height })?;
    if data.len() != expected {
        return Err(Error::BufferSize {
            expected,
            actual: data.len(),
        }
        .into());
    }

    let row_len = (width as usize * 4).max(1);
    extract_rows(
        data.chunks_exact(row_len),
        &PaletteOptions {
            max_colors,
            ..Default::default()
        },
        None,
    )
}

/// Extract a palette, checking `cancel` before every row.
///
/// # Errors
///
/// Returns [`ColorError::Cancelled`] once `cancel` is observed set, or
/// [`ColorError::InvalidParameters`] if the options are invalid.
pub fn extract_palette_cancellable(
    bitmap: &Bitmap,
    options: &PaletteOptions,
    cancel: &AtomicBool,
) -> ColorResult<Palette> {
    extract_rows(bitmap.rows(), options, Some(cancel))
}
