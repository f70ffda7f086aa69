//! Writing rendered pixel buffers to image files.

use image::{ImageFormat, Rgb, RgbImage};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while saving a frame.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported output format '{0}' (expected png, bmp or jpg)")]
    UnsupportedFormat(String),

    #[error("Pixel buffer holds {actual} pixels, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}

pub type OutputResult<T> = std::result::Result<T, OutputError>;

/// Split a packed `0x00RRGGBB` pixel into its channels.
#[inline]
pub fn unpack_color(pixel: u32) -> [u8; 3] {
    [(pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8]
}

/// Output format chosen by the file extension.
fn output_format(path: &Path) -> OutputResult<ImageFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match ImageFormat::from_extension(&extension) {
        Some(format @ (ImageFormat::Png | ImageFormat::Bmp | ImageFormat::Jpeg)) => Ok(format),
        _ => Err(OutputError::UnsupportedFormat(extension)),
    }
}

/// Save a row-major buffer of packed pixels as PNG, BMP or JPEG.
///
/// Missing parent directories are created.
pub fn save_pixels(path: impl AsRef<Path>, width: u32, height: u32, pixels: &[u32]) -> OutputResult<()> {
    let path = path.as_ref();
    let format = output_format(path)?;

    let expected = width as usize * height as usize;
    if pixels.len() != expected {
        return Err(OutputError::SizeMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    let image = RgbImage::from_fn(width, height, |x, y| {
        Rgb(unpack_color(pixels[y as usize * width as usize + x as usize]))
    });

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    image.save_with_format(path, format)?;

    log::info!("Saved {}x{} image to {}", width, height, path.display());
    Ok(())
}
