//! The load, measure, crop, save sequence.

use std::path::Path;

use image::ImageFormat;
use thiserror::Error;
use tracing::info;

use crate::decode::{decode_file, DecodeError};
use crate::encode::{encode_file, EncodeError};
use crate::transform::{apply_crop, bottom_crop_rect, CropRect, TransformError};

/// Any failure of [`crop_bottom`].
#[derive(Debug, Error)]
pub enum CropError {
    #[error("Failed to decode input image")]
    Decode(#[from] DecodeError),

    #[error("Failed to crop image")]
    Transform(#[from] TransformError),

    #[error("Failed to encode output image")]
    Encode(#[from] EncodeError),
}

/// What a successful [`crop_bottom`] run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropSummary {
    pub original_width: u32,
    pub original_height: u32,
    pub rect: CropRect,
    pub format: ImageFormat,
}

/// Shave the bottom rows off the image at `input` and write the rest to `output`.
///
/// The kept region is `(0, 0, width, floor(height * 0.88))`. The output format
/// follows the extension of `output`; the pixel format of the input is kept.
///
/// # Errors
///
/// - `CropError::Decode` if `input` is missing, unreadable or not an image
/// - `CropError::Transform` if the image is only one row tall
/// - `CropError::Encode` if `output` has no usable extension or cannot be written
///
/// Nothing is written to `output` unless every earlier step succeeded.
pub fn crop_bottom(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<CropSummary, CropError> {
    let input = input.as_ref();
    let output = output.as_ref();

    info!(path = %input.display(), "loading image");
    let image = decode_file(input)?;

    let (width, height) = image.dimensions();
    info!(width, height, "original size");

    let rect = bottom_crop_rect(width, height);
    info!(%rect, "cropping to rectangle");
    let cropped = apply_crop(&image, rect)?;
    drop(image);

    let format = encode_file(&cropped, output)?;
    info!(path = %output.display(), "saved");

    Ok(CropSummary {
        original_width: width,
        original_height: height,
        rect,
        format,
    })
}
