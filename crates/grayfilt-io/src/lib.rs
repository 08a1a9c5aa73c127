//! grayfilt-io - Image file reading and writing
//!
//! Bridges the filesystem and the in-memory types: files decode into a
//! [`ColorImage`](grayfilt_color::ColorImage) (whatever the source
//! layout), grayscale results encode back out. The codec is chosen by
//! path extension, falling back to magic-byte sniffing for reads and to
//! PNG for writes.
//!
//! Format support is feature-gated per codec (`png-format`, `jpeg`,
//! `gif-format`); all three are enabled by default.

mod error;
mod format;
#[cfg(feature = "gif-format")]
mod gif;
#[cfg(feature = "jpeg")]
mod jpeg;
#[cfg(feature = "png-format")]
mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
#[cfg(feature = "gif-format")]
pub use gif::{read_gif, write_gif};
#[cfg(feature = "jpeg")]
pub use jpeg::{read_jpeg, write_jpeg};
#[cfg(feature = "png-format")]
pub use png::{read_png, write_png};

use grayfilt_color::ColorImage;
use grayfilt_core::GrayImage;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read an image file into its decoded color form.
///
/// The codec is chosen by the path extension; files with an unknown or
/// missing extension are sniffed by their magic bytes.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<ColorImage> {
    let path = path.as_ref();
    let format = match ImageFormat::from_path(path) {
        Some(format) => format,
        None => detect_format(path)?,
    };

    let file = File::open(path)?;
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(BufReader::new(file)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(BufReader::new(file)),
        #[cfg(feature = "gif-format")]
        ImageFormat::Gif => gif::read_gif(BufReader::new(file)),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{} support not enabled",
            other.extension()
        ))),
    }
}

/// Read an image file and convert it to grayscale in one step.
pub fn read_gray<P: AsRef<Path>>(path: P) -> IoResult<GrayImage> {
    Ok(read_image(path)?.to_gray()?)
}

/// Write a grayscale image to a file.
///
/// The codec is chosen by the path extension; unknown extensions are
/// written as PNG.
pub fn write_image<P: AsRef<Path>>(img: &GrayImage, path: P) -> IoResult<()> {
    let format = ImageFormat::from_path(&path).unwrap_or(ImageFormat::Png);

    let file = File::create(path)?;
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(img, BufWriter::new(file)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(img, BufWriter::new(file)),
        #[cfg(feature = "gif-format")]
        ImageFormat::Gif => gif::write_gif(img, BufWriter::new(file)),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{} support not enabled",
            other.extension()
        ))),
    }
}
