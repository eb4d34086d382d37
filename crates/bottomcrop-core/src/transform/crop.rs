//! Bottom cropping in pixel coordinates.
//!
//! The retained region always starts at the top-left corner and spans the
//! full width. Only the bottom edge moves: it is placed at
//! `floor(height * KEEP_PERCENT / 100)`.
//!
//! # Coordinate System
//!
//! - (0, 0) = top-left corner
//! - `right` and `bottom` are exclusive
//!
//! # Example
//!
//! ```ignore
//! // 888x710 keeps rows 0..624
//! let rect = bottom_crop_rect(888, 710);
//! assert_eq!(rect, CropRect::new(0, 0, 888, 624));
//! ```

use std::fmt;

use image::GenericImageView;
use thiserror::Error;

use crate::decode::DecodedImage;

/// Percentage of rows kept, counted from the top.
pub const KEEP_PERCENT: u32 = 88;

/// Errors that can occur while cropping.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The rectangle would produce an image without pixels.
    #[error("Crop rectangle {0} is empty; the image is too small to crop")]
    EmptyCrop(CropRect),

    /// The rectangle reaches past the image edges or is inverted.
    #[error("Crop rectangle {rect} does not fit a {width}x{height} image")]
    OutOfBounds {
        rect: CropRect,
        width: u32,
        height: u32,
    },
}

/// A pixel region given as `(left, top, right, bottom)`, right and bottom exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width of the region; zero if the rectangle is inverted.
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    /// Height of the region; zero if the rectangle is inverted.
    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Check that the rectangle lies inside a `width` x `height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left <= self.right
            && self.top <= self.bottom
            && self.right <= width
            && self.bottom <= height
    }

    /// Check whether the rectangle covers the whole image.
    pub fn is_full(&self, width: u32, height: u32) -> bool {
        *self == Self::new(0, 0, width, height)
    }
}

impl fmt::Display for CropRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Compute the rectangle that keeps the full width and the top
/// [`KEEP_PERCENT`] percent of the rows.
///
/// Integer arithmetic keeps the floor exact for every `u32` height, so the
/// result never exceeds `height` and is zero only when `height` is 0 or 1.
pub fn bottom_crop_rect(width: u32, height: u32) -> CropRect {
    let kept = u64::from(height) * u64::from(KEEP_PERCENT) / 100;
    // kept <= height, so the cast cannot truncate
    CropRect::new(0, 0, width, kept as u32)
}

/// Cut `rect` out of `image`, keeping the source pixel format.
///
/// # Errors
///
/// - `TransformError::EmptyCrop` if the rectangle has no area
/// - `TransformError::OutOfBounds` if it does not fit inside the image
///
/// A rectangle covering the whole image returns a copy.
pub fn apply_crop(image: &DecodedImage, rect: CropRect) -> Result<DecodedImage, TransformError> {
    let (width, height) = image.dimensions();

    if !rect.fits_within(width, height) {
        return Err(TransformError::OutOfBounds {
            rect,
            width,
            height,
        });
    }
    if rect.is_empty() {
        return Err(TransformError::EmptyCrop(rect));
    }

    // Fast path: full crop returns a clone
    if rect.is_full(width, height) {
        return Ok(image.clone());
    }

    let cropped = image
        .as_dynamic()
        .crop_imm(rect.left, rect.top, rect.width(), rect.height());
    debug_assert_eq!(cropped.dimensions(), (rect.width(), rect.height()));

    Ok(DecodedImage::from_transformed(cropped))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
