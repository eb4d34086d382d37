//! Core types for image decoding.

use std::path::PathBuf;

use image::{ColorType, DynamicImage, GenericImageView};
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input path does not exist.
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input exists but could not be read.
    #[error("Failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file format is not recognized or its decoder is not enabled.
    #[error("Invalid or unsupported image format")]
    UnsupportedFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    Corrupted(String),

    /// The image is valid but exceeds the decoder's dimension or memory limits.
    #[error("Image exceeds decoding limits: {0}")]
    TooLarge(String),

    /// The decoder produced an image without any pixels.
    #[error("Image has zero extent ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}

/// A decoded image.
///
/// Unlike a plain RGB buffer this keeps whatever pixel format the source file
/// carried (grayscale, RGB, RGBA, 16-bit), so a crop-and-save round trip does
/// not silently drop an alpha channel.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    image: DynamicImage,
}

impl DecodedImage {
    /// Wrap a decoded `DynamicImage`, rejecting images with zero width or height.
    pub fn from_dynamic(image: DynamicImage) -> Result<Self, DecodeError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(DecodeError::EmptyImage { width, height });
        }
        Ok(Self { image })
    }

    /// Wrap an image produced by a transform. Zero extents are allowed here;
    /// the encoder decides whether it can write them.
    pub(crate) fn from_transformed(image: DynamicImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Width and height in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Pixel format carried over from the source file.
    pub fn color(&self) -> ColorType {
        self.image.color()
    }

    /// Check if this is an empty image.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }
}
