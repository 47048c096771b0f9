//! Bitmap - decoded RGBA8 pixel buffer
//!
//! Image decoding is the caller's job; the engine only reads and writes
//! already-decoded pixels.
//!
//! # Pixel layout
//!
//! - Row-major, top row first
//! - Four bytes per pixel in R, G, B, A order
//! - No row padding: `data.len() == width * height * 4`
//!
//! Zero-sized bitmaps are allowed. Palette extraction over one simply
//! yields an empty palette.

use crate::error::{Error, Result};

/// One RGBA8 pixel
pub type Rgba = [u8; 4];

/// Owned RGBA8 pixel buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// Create a fully transparent black bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the byte size overflows `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, [0, 0, 0, 0])
    }

    /// Create a bitmap with every pixel set to `pixel`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the byte size overflows `usize`.
    pub fn filled(width: u32, height: u32, pixel: Rgba) -> Result<Self> {
        let len = byte_len(width, height)?;
        let data = pixel.iter().copied().cycle().take(len).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap an existing RGBA8 buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `data` is not exactly
    /// `width * height * 4` bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when the bitmap holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of pixels
    pub fn pixel_count(&self) -> usize {
        self.data.len() / 4
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize * self.width as usize + x as usize) * 4)
        } else {
            None
        }
    }

    /// Get the pixel at `(x, y)`, or `None` outside the bitmap.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let i = self.offset(x, y)?;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Set the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] outside the bitmap.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgba) -> Result<()> {
        let i = self.offset(x, y).ok_or(Error::IndexOutOfBounds {
            index: y as usize * self.width as usize + x as usize,
            len: self.pixel_count(),
        })?;
        self.data[i..i + 4].copy_from_slice(&pixel);
        Ok(())
    }

    /// Iterate over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgba> + '_ {
        self.data
            .chunks_exact(4)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }

    /// Iterate over rows as raw byte slices of `width * 4` bytes.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        // chunks_exact panics on a zero chunk size
        let row_len = (self.width as usize * 4).max(1);
        self.data.chunks_exact(row_len)
    }

    /// Borrow the raw RGBA8 bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Take ownership of the raw RGBA8 bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

fn byte_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(Error::InvalidDimension { width, height })
}
