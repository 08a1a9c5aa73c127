//! GIF image format support
//!
//! Reads single-frame GIFs as indexed images; animated GIFs are
//! rejected. Writing stores the grayscale image with a 256-entry gray
//! global palette, so the encode is lossless.

use crate::{IoError, IoResult};
use gif::{ColorOutput, DecodeOptions, Encoder, Frame};
use grayfilt_color::{ColorImage, PixelLayout};
use grayfilt_core::GrayImage;
use std::io::{Read, Write};

/// Read a GIF image
///
/// Reads the first frame of a GIF image. Animated GIFs (multiple
/// frames) return an error.
pub fn read_gif<R: Read>(reader: R) -> IoResult<ColorImage> {
    let mut options = DecodeOptions::new();
    options.set_color_output(ColorOutput::Indexed);

    let mut decoder = options
        .read_info(reader)
        .map_err(|e| IoError::DecodeError(format!("GIF decode error: {}", e)))?;

    let frame = decoder
        .read_next_frame()
        .map_err(|e| IoError::DecodeError(format!("GIF frame error: {}", e)))?
        .ok_or_else(|| IoError::InvalidData("no frames in GIF".to_string()))?
        .clone();

    if decoder
        .read_next_frame()
        .map_err(|e| IoError::DecodeError(format!("GIF frame error: {}", e)))?
        .is_some()
    {
        return Err(IoError::UnsupportedFormat(
            "animated GIF not supported".to_string(),
        ));
    }

    // Prefer the frame's local palette, fall back to the global one
    let palette: &[u8] = if let Some(ref local) = frame.palette {
        local
    } else if let Some(global) = decoder.global_palette() {
        global
    } else {
        return Err(IoError::InvalidData("GIF has no color map".to_string()));
    };

    let ncolors = palette.len() / 3;
    if ncolors == 0 || ncolors > 256 {
        return Err(IoError::InvalidData(format!(
            "invalid palette size: {}",
            ncolors
        )));
    }
    let palette: Vec<[u8; 3]> = palette
        .chunks_exact(3)
        .map(|c| [c[0], c[1], c[2]])
        .collect();

    let width = u32::from(frame.width);
    let height = u32::from(frame.height);
    let image = ColorImage::from_raw(
        width,
        height,
        width as usize,
        PixelLayout::Indexed8,
        frame.buffer.into_owned(),
    )?;

    Ok(image.with_palette(palette))
}

/// Write a grayscale image as a GIF with a gray global palette
pub fn write_gif<W: Write>(img: &GrayImage, mut writer: W) -> IoResult<()> {
    if img.is_empty() {
        return Err(IoError::EmptyImage);
    }
    if img.width() > u16::MAX as u32 || img.height() > u16::MAX as u32 {
        return Err(IoError::EncodeError(format!(
            "image too large for GIF: {}x{}",
            img.width(),
            img.height()
        )));
    }

    // Identity palette: index i is the gray level i
    let mut palette = Vec::with_capacity(256 * 3);
    for v in 0..=255u8 {
        palette.extend_from_slice(&[v, v, v]);
    }

    let width = img.width() as u16;
    let height = img.height() as u16;

    let mut encoder = Encoder::new(&mut writer, width, height, &palette)
        .map_err(|e| IoError::EncodeError(format!("GIF encoder error: {}", e)))?;

    // Strip the stride padding; pixel bytes double as palette indices
    let mut buffer = Vec::with_capacity(img.area());
    for y in 0..img.height() {
        buffer.extend_from_slice(img.row(y));
    }

    let mut frame = Frame::from_indexed_pixels(width, height, buffer, None);
    frame.palette = None; // use the global palette

    encoder
        .write_frame(&frame)
        .map_err(|e| IoError::EncodeError(format!("GIF frame write error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn gray_roundtrip_is_lossless() {
        let mut img = GrayImage::new(9, 5);
        for y in 0..5 {
            for (x, v) in img.row_mut(y).iter_mut().enumerate() {
                *v = (x as u32 * 31 + y * 7) as u8;
            }
        }

        let mut buffer = Vec::new();
        write_gif(&img, &mut buffer).unwrap();

        let decoded = read_gif(Cursor::new(buffer)).unwrap();
        assert_eq!(decoded.layout(), PixelLayout::Indexed8);
        assert_eq!(decoded.to_gray().unwrap(), img);
    }

    #[test]
    fn empty_image_is_rejected() {
        let img = GrayImage::new(0, 0);
        let mut buffer = Vec::new();
        assert!(matches!(
            write_gif(&img, &mut buffer),
            Err(IoError::EmptyImage)
        ));
    }
}
