//! Decoding image files and in-memory buffers.
//!
//! The container format is sniffed from the leading bytes. When the signature
//! is not recognized the file extension is used as a hint, which covers
//! formats without a reliable magic number.

use std::fs;
use std::io::{self, Cursor};
use std::path::Path;

use image::{ImageError, ImageFormat, ImageReader, Limits};
use tracing::debug;

use super::{DecodeError, DecodedImage};

/// Decode the image file at `path`.
///
/// # Errors
///
/// Returns `DecodeError::NotFound` if the path does not exist,
/// `DecodeError::Io` if it cannot be read, `DecodeError::UnsupportedFormat`
/// if the content is not an image format this build can decode,
/// `DecodeError::TooLarge` if the image exceeds the default decoder limits,
/// and `DecodeError::Corrupted` if decoding fails part way.
pub fn decode_file(path: impl AsRef<Path>) -> Result<DecodedImage, DecodeError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DecodeError::NotFound(path.to_path_buf()),
        _ => DecodeError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "read input file");
    decode_with(&bytes, ImageFormat::from_path(path).ok(), Limits::default())
}

/// Decode an image held in memory, detecting the format from its content.
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    decode_with(bytes, None, Limits::default())
}

fn decode_with(
    bytes: &[u8],
    hint: Option<ImageFormat>,
    limits: Limits,
) -> Result<DecodedImage, DecodeError> {
    let mut reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::Corrupted(e.to_string()))?;
    reader.limits(limits);

    if reader.format().is_none() {
        if let Some(format) = hint {
            reader.set_format(format);
        }
    }

    let format = reader.format().ok_or(DecodeError::UnsupportedFormat)?;
    if !format.reading_enabled() {
        return Err(DecodeError::UnsupportedFormat);
    }

    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(_) => DecodeError::UnsupportedFormat,
        ImageError::Limits(limit) => DecodeError::TooLarge(limit.to_string()),
        other => DecodeError::Corrupted(other.to_string()),
    })?;

    debug!(?format, color = ?img.color(), "decoded image");
    DecodedImage::from_dynamic(img)
}
