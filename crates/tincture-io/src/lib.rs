//! Tincture IO - Bitmap file I/O
//!
//! Reads and writes [`Bitmap`]s. PNG is the only format, behind the
//! default `png-format` feature.

pub mod error;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};

use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor};
use std::path::Path;
use tincture_core::Bitmap;

/// Supported image file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
}

impl ImageFormat {
    /// Guess the format from a file extension (case-insensitive)
    pub fn from_path<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("png") => Ok(ImageFormat::Png),
            other => Err(IoError::UnsupportedFormat(format!(
                "unknown extension: {}",
                other.unwrap_or("<none>")
            ))),
        }
    }
}

/// Read a bitmap from a file, choosing the decoder by extension
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Bitmap> {
    let format = ImageFormat::from_path(&path)?;
    let reader = BufReader::new(File::open(path)?);
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(not(feature = "png-format"))]
        ImageFormat::Png => {
            let _ = reader;
            Err(IoError::UnsupportedFormat("png-format feature disabled".to_string()))
        }
    }
}

/// Decode a bitmap from an in-memory PNG
pub fn read_image_mem(data: &[u8]) -> IoResult<Bitmap> {
    #[cfg(feature = "png-format")]
    {
        png::read_png(Cursor::new(data))
    }
    #[cfg(not(feature = "png-format"))]
    {
        let _ = Cursor::new(data);
        Err(IoError::UnsupportedFormat("png-format feature disabled".to_string()))
    }
}

/// Write a bitmap to a file in the given format
pub fn write_image<P: AsRef<Path>>(bitmap: &Bitmap, path: P, format: ImageFormat) -> IoResult<()> {
    let writer = BufWriter::new(File::create(path)?);
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(bitmap, writer),
        #[cfg(not(feature = "png-format"))]
        ImageFormat::Png => {
            let _ = (bitmap, writer);
            Err(IoError::UnsupportedFormat("png-format feature disabled".to_string()))
        }
    }
}

/// Encode a bitmap to an in-memory image
pub fn write_image_mem(bitmap: &Bitmap, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(bitmap, &mut buf)?,
        #[cfg(not(feature = "png-format"))]
        ImageFormat::Png => {
            let _ = bitmap;
            return Err(IoError::UnsupportedFormat(
                "png-format feature disabled".to_string(),
            ));
        }
    }
    Ok(buf)
}
