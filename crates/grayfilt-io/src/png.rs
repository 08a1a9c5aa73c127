//! PNG image format support
//!
//! Decodes any PNG color type into the matching [`PixelLayout`]; exotic
//! encodings are normalized at decode time (sub-byte grayscale expands
//! to `Gray8`, gray-with-alpha and 16-bit RGB collapse onto the 8-bit
//! RGBA/RGB layouts). Writing always produces 8-bit grayscale.

use crate::{IoError, IoResult};
use grayfilt_color::{ColorImage, PixelLayout};
use grayfilt_core::GrayImage;
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<ColorImage> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let line_size = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let image = match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::One | BitDepth::Two | BitDepth::Four) => {
            let bits = bit_depth as u32;
            // Scale sub-byte samples onto the full 0..=255 range
            let scale = (255 / ((1u16 << bits) - 1)) as u8;
            let mut samples = unpack_bits(data, line_size, width, height, bits);
            for v in &mut samples {
                *v *= scale;
            }
            ColorImage::from_raw(width, height, width as usize, PixelLayout::Gray8, samples)?
        }
        (ColorType::Grayscale, BitDepth::Eight) => {
            ColorImage::from_raw(width, height, line_size, PixelLayout::Gray8, data.to_vec())?
        }
        (ColorType::Grayscale, BitDepth::Sixteen) => {
            ColorImage::from_raw(width, height, line_size, PixelLayout::Gray16, data.to_vec())?
        }
        (ColorType::GrayscaleAlpha, BitDepth::Eight | BitDepth::Sixteen) => {
            // Normalize to RGBA: (g, g, g, a), high bytes for 16-bit
            let (bpp, a_off) = if bit_depth == BitDepth::Sixteen {
                (4, 2)
            } else {
                (2, 1)
            };
            let mut samples = Vec::with_capacity(width as usize * height as usize * 4);
            for y in 0..height as usize {
                let row = &data[y * line_size..];
                for x in 0..width as usize {
                    let g = row[x * bpp];
                    let a = row[x * bpp + a_off];
                    samples.extend_from_slice(&[g, g, g, a]);
                }
            }
            ColorImage::from_raw(
                width,
                height,
                width as usize * 4,
                PixelLayout::Rgba8,
                samples,
            )?
        }
        (ColorType::Rgb, BitDepth::Eight) => {
            ColorImage::from_raw(width, height, line_size, PixelLayout::Rgb8, data.to_vec())?
        }
        (ColorType::Rgb, BitDepth::Sixteen) => {
            // Keep the most significant byte of each channel
            let mut samples = Vec::with_capacity(width as usize * height as usize * 3);
            for y in 0..height as usize {
                let row = &data[y * line_size..];
                for x in 0..width as usize {
                    let px = &row[x * 6..x * 6 + 6];
                    samples.extend_from_slice(&[px[0], px[2], px[4]]);
                }
            }
            ColorImage::from_raw(
                width,
                height,
                width as usize * 3,
                PixelLayout::Rgb8,
                samples,
            )?
        }
        (ColorType::Rgba, BitDepth::Eight) => {
            ColorImage::from_raw(width, height, line_size, PixelLayout::Rgba8, data.to_vec())?
        }
        (ColorType::Rgba, BitDepth::Sixteen) => {
            // 8 big-endian bytes per pixel match the Rgba16 layout as-is
            ColorImage::from_raw(width, height, line_size, PixelLayout::Rgba16, data.to_vec())?
        }
        (ColorType::Indexed, BitDepth::One | BitDepth::Two | BitDepth::Four) => {
            let indices = unpack_bits(data, line_size, width, height, bit_depth as u32);
            let palette = read_palette(reader.info())?;
            ColorImage::from_raw(width, height, width as usize, PixelLayout::Indexed8, indices)?
                .with_palette(palette)
        }
        (ColorType::Indexed, BitDepth::Eight) => {
            let palette = read_palette(reader.info())?;
            ColorImage::from_raw(width, height, line_size, PixelLayout::Indexed8, data.to_vec())?
                .with_palette(palette)
        }
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    Ok(image)
}

/// Expand packed sub-byte samples (MSB first) to one byte each.
fn unpack_bits(data: &[u8], line_size: usize, width: u32, height: u32, bits: u32) -> Vec<u8> {
    let per_byte = 8 / bits;
    let mask = ((1u16 << bits) - 1) as u8;
    let mut out = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height as usize {
        let row = &data[y * line_size..];
        for x in 0..width {
            let byte = row[(x / per_byte) as usize];
            let shift = 8 - bits - (x % per_byte) * bits;
            out.push((byte >> shift) & mask);
        }
    }
    out
}

/// Pull the PLTE chunk into palette entries.
fn read_palette(info: &png::Info<'_>) -> IoResult<Vec<[u8; 3]>> {
    let palette = info
        .palette
        .as_ref()
        .ok_or_else(|| IoError::InvalidData("indexed PNG has no palette".to_string()))?;
    Ok(palette
        .chunks_exact(3)
        .map(|c| [c[0], c[1], c[2]])
        .collect())
}

/// Write a grayscale image as an 8-bit PNG
pub fn write_png<W: Write>(img: &GrayImage, writer: W) -> IoResult<()> {
    if img.is_empty() {
        return Err(IoError::EmptyImage);
    }

    let mut encoder = Encoder::new(writer, img.width(), img.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    // Strip the stride padding into contiguous rows
    let mut data = Vec::with_capacity(img.area());
    for y in 0..img.height() {
        data.extend_from_slice(img.row(y));
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn gray_roundtrip() {
        let mut img = GrayImage::new(10, 7);
        for y in 0..7 {
            for (x, v) in img.row_mut(y).iter_mut().enumerate() {
                *v = (x as u32 * 20 + y * 3) as u8;
            }
        }

        let mut buffer = Vec::new();
        write_png(&img, &mut buffer).unwrap();

        let decoded = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(decoded.layout(), PixelLayout::Gray8);
        assert_eq!(decoded.to_gray().unwrap(), img);
    }

    #[test]
    fn stride_padding_not_encoded() {
        let data = vec![1, 2, 99, 3, 4, 99];
        let img = GrayImage::from_raw(2, 2, 3, data).unwrap();

        let mut buffer = Vec::new();
        write_png(&img, &mut buffer).unwrap();

        let gray = read_png(Cursor::new(buffer)).unwrap().to_gray().unwrap();
        assert_eq!(gray.row(0), &[1, 2]);
        assert_eq!(gray.row(1), &[3, 4]);
    }

    #[test]
    fn one_bit_grayscale_expands_to_black_and_white() {
        // Encode a 1-bpp PNG by hand: 8 pixels 10110000
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 8, 1);
            encoder.set_color(ColorType::Grayscale);
            encoder.set_depth(BitDepth::One);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0b1011_0000]).unwrap();
        }

        let decoded = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(decoded.layout(), PixelLayout::Gray8);
        let gray = decoded.to_gray().unwrap();
        assert_eq!(gray.row(0), &[255, 0, 255, 255, 0, 0, 0, 0]);
    }

    #[test]
    fn rgb_png_decodes_to_rgb_layout() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 2, 1);
            encoder.set_color(ColorType::Rgb);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[64, 128, 64, 0, 0, 0]).unwrap();
        }

        let decoded = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(decoded.layout(), PixelLayout::Rgb8);
        let gray = decoded.to_gray().unwrap();
        assert_eq!(gray.row(0), &[109, 0]);
    }

    #[test]
    fn empty_image_is_rejected() {
        let img = GrayImage::new(0, 4);
        let mut buffer = Vec::new();
        assert!(matches!(
            write_png(&img, &mut buffer),
            Err(IoError::EmptyImage)
        ));
    }
}
