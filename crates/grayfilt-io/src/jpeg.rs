//! JPEG image format support
//!
//! Reads baseline and progressive JPEGs with the `jpeg-decoder` crate
//! and writes grayscale JPEGs with `jpeg-encoder` at maximum quality
//! (the library's outputs feed further processing, so encode losses are
//! kept minimal).

use crate::{IoError, IoResult};
use grayfilt_color::{ColorImage, PixelLayout};
use grayfilt_core::GrayImage;
use jpeg_decoder::{Decoder, PixelFormat};
use jpeg_encoder::{ColorType, Encoder};
use std::io::{Read, Write};

/// Read a JPEG image
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<ColorImage> {
    let mut decoder = Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG decoder returned no info".to_string()))?;

    let width = u32::from(info.width);
    let height = u32::from(info.height);

    let layout = match info.pixel_format {
        PixelFormat::L8 => PixelLayout::Gray8,
        PixelFormat::L16 => PixelLayout::Gray16,
        PixelFormat::RGB24 => PixelLayout::Rgb8,
        PixelFormat::CMYK32 => PixelLayout::Cmyk8,
    };

    let stride = width as usize * layout.bytes_per_pixel();
    Ok(ColorImage::from_raw(width, height, stride, layout, pixels)?)
}

/// Write a grayscale image as a quality-100 JPEG
pub fn write_jpeg<W: Write>(img: &GrayImage, writer: W) -> IoResult<()> {
    if img.is_empty() {
        return Err(IoError::EmptyImage);
    }
    if img.width() > u16::MAX as u32 || img.height() > u16::MAX as u32 {
        return Err(IoError::EncodeError(format!(
            "image too large for JPEG: {}x{}",
            img.width(),
            img.height()
        )));
    }

    let mut data = Vec::with_capacity(img.area());
    for y in 0..img.height() {
        data.extend_from_slice(img.row(y));
    }

    let encoder = Encoder::new(writer, 100);
    encoder
        .encode(
            &data,
            img.width() as u16,
            img.height() as u16,
            ColorType::Luma,
        )
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;

    Ok(())
}
