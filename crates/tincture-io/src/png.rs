//! PNG image format support
//!
//! Every PNG is decoded to an RGBA8 [`Bitmap`]. Palettes, low bit depths
//! and `tRNS` transparency are expanded by the decoder, 16-bit samples are
//! stripped to their high byte.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};
use tincture_core::Bitmap;

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Bitmap> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG format: {:?} {:?}",
            color_type, bit_depth
        )));
    }
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };

    // Read image data
    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
    for row in data.chunks(bytes_per_row).take(height as usize) {
        for px in row.chunks_exact(samples).take(width as usize) {
            let pixel = match *px {
                [g] => [g, g, g, 255],
                [g, a] => [g, g, g, a],
                [r, g, b] => [r, g, b, 255],
                [r, g, b, a] => [r, g, b, a],
                _ => unreachable!(),
            };
            rgba.extend_from_slice(&pixel);
        }
    }

    Ok(Bitmap::from_raw(width, height, rgba)?)
}

/// Write a bitmap as an 8-bit RGBA PNG
pub fn write_png<W: Write>(bitmap: &Bitmap, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, bitmap.width(), bitmap.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(bitmap.as_raw())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_raw(width: u32, height: u32, color: ColorType, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(BitDepth::Eight);
            if color == ColorType::Indexed {
                encoder.set_palette(vec![255, 0, 0, 0, 0, 255]);
            }
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        out
    }

    #[test]
    fn test_png_roundtrip_rgba() {
        let mut bm = Bitmap::new(3, 2).unwrap();
        bm.set_pixel(0, 0, [255, 0, 0, 255]).unwrap();
        bm.set_pixel(2, 1, [10, 20, 30, 40]).unwrap();

        let mut buf = Vec::new();
        write_png(&bm, &mut buf).unwrap();
        let back = read_png(Cursor::new(buf)).unwrap();
        assert_eq!(back, bm);
    }

    #[test]
    fn test_read_gray() {
        let png = encode_raw(2, 1, ColorType::Grayscale, &[0, 200]);
        let bm = read_png(Cursor::new(png)).unwrap();
        assert_eq!(bm.get_pixel(1, 0), Some([200, 200, 200, 255]));
    }

    #[test]
    fn test_read_gray_alpha() {
        let png = encode_raw(1, 1, ColorType::GrayscaleAlpha, &[90, 30]);
        let bm = read_png(Cursor::new(png)).unwrap();
        assert_eq!(bm.get_pixel(0, 0), Some([90, 90, 90, 30]));
    }

    #[test]
    fn test_read_rgb() {
        let png = encode_raw(1, 2, ColorType::Rgb, &[1, 2, 3, 4, 5, 6]);
        let bm = read_png(Cursor::new(png)).unwrap();
        assert_eq!(bm.get_pixel(0, 1), Some([4, 5, 6, 255]));
    }

    #[test]
    fn test_read_indexed() {
        let png = encode_raw(2, 1, ColorType::Indexed, &[1, 0]);
        let bm = read_png(Cursor::new(png)).unwrap();
        assert_eq!(bm.get_pixel(0, 0), Some([0, 0, 255, 255]));
        assert_eq!(bm.get_pixel(1, 0), Some([255, 0, 0, 255]));
    }

    #[test]
    fn test_read_garbage() {
        let result = read_png(Cursor::new(b"not a png".to_vec()));
        assert!(matches!(result, Err(IoError::DecodeError(_))));
    }
}
