//! Encoding images and writing them to disk.
//!
//! The output format comes from the file extension. The image is encoded
//! into memory first and written in one call, so an encoder failure leaves
//! no output file behind.

use std::ffi::OsStr;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ColorType, ImageError, ImageFormat};
use thiserror::Error;
use tracing::debug;

use crate::decode::DecodedImage;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The output path has no extension or an extension no format uses.
    #[error("Cannot infer an image format from output path {}", .0.display())]
    UnknownExtension(PathBuf),

    /// The format is known but its encoder is not part of this build.
    #[error("Writing {0:?} images is not supported")]
    UnsupportedFormat(ImageFormat),

    /// The encoder cannot store this pixel format.
    #[error("{format:?} cannot store {color:?} pixels: {reason}")]
    UnsupportedColor {
        format: ImageFormat,
        color: ColorType,
        reason: String,
    },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The encoder failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// The encoded bytes could not be written.
    #[error("Failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolve the output format from the extension of `path`.
///
/// # Errors
///
/// Returns `EncodeError::UnknownExtension` if the extension is missing or not
/// an image extension, and `EncodeError::UnsupportedFormat` if the format is
/// recognized but cannot be written by this build.
pub fn output_format(path: &Path) -> Result<ImageFormat, EncodeError> {
    let format = path
        .extension()
        .and_then(OsStr::to_str)
        .and_then(ImageFormat::from_extension)
        .ok_or_else(|| EncodeError::UnknownExtension(path.to_path_buf()))?;

    if !format.writing_enabled() {
        return Err(EncodeError::UnsupportedFormat(format));
    }
    Ok(format)
}

/// Check that `format` can store `color` pixels as they are.
///
/// The `image` crate would otherwise convert on write, dropping alpha or
/// narrowing 16-bit samples without telling anyone.
fn check_color(format: ImageFormat, color: ColorType) -> Result<(), EncodeError> {
    let reason = match format {
        ImageFormat::Jpeg if color.has_alpha() => "JPEG has no alpha channel",
        ImageFormat::Jpeg if color.bytes_per_pixel() != color.channel_count() => {
            "JPEG only stores 8-bit samples"
        }
        ImageFormat::Bmp if color.bytes_per_pixel() != color.channel_count() => {
            "BMP only stores 8-bit samples"
        }
        ImageFormat::Png if matches!(color, ColorType::Rgb32F | ColorType::Rgba32F) => {
            "PNG has no floating point samples"
        }
        _ => return Ok(()),
    };

    Err(EncodeError::UnsupportedColor {
        format,
        color,
        reason: reason.to_string(),
    })
}

/// Encode `image` to bytes in the given format.
///
/// Encoding is deterministic: the same image and format always produce the
/// same bytes. The pixel format is never converted; see [`EncodeError::UnsupportedColor`].
pub fn encode_image(image: &DecodedImage, format: ImageFormat) -> Result<Vec<u8>, EncodeError> {
    if image.is_empty() {
        let (width, height) = image.dimensions();
        return Err(EncodeError::InvalidDimensions { width, height });
    }
    check_color(format, image.color())?;

    let mut buffer = Cursor::new(Vec::new());
    image
        .as_dynamic()
        .write_to(&mut buffer, format)
        .map_err(|e| match e {
            ImageError::Unsupported(reason) => EncodeError::UnsupportedColor {
                format,
                color: image.color(),
                reason: reason.to_string(),
            },
            other => EncodeError::EncodingFailed(other.to_string()),
        })?;

    Ok(buffer.into_inner())
}

/// Encode `image` in the format named by the extension of `path` and write it.
///
/// Returns the format that was written.
pub fn encode_file(image: &DecodedImage, path: impl AsRef<Path>) -> Result<ImageFormat, EncodeError> {
    let path = path.as_ref();
    let format = output_format(path)?;
    let bytes = encode_image(image, format)?;

    fs::write(path, &bytes).map_err(|e| EncodeError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(path = %path.display(), ?format, bytes = bytes.len(), "wrote output file");
    Ok(format)
}
