//! Image transformation operations.
//!
//! Only one transform exists: cutting a pixel rectangle out of a decoded
//! image. The rectangle used by the tool comes from [`bottom_crop_rect`].
//!
//! # Coordinate System
//!
//! - Crop coordinates are integer pixels
//! - Origin is top-left corner

mod crop;

pub use crop::{apply_crop, bottom_crop_rect, CropRect, TransformError, KEEP_PERCENT};
