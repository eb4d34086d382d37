//! Bottomcrop Core - bottom cropping for a single image file
//!
//! This crate decodes an image, keeps the full width and the top 88% of its
//! rows, and encodes the result in the format named by the output extension.
//! The stages are exposed separately in [`decode`], [`transform`] and
//! [`encode`]; [`crop_bottom`] runs them in order.

pub mod decode;
pub mod encode;
mod pipeline;
pub mod transform;

pub use decode::{decode_file, DecodeError, DecodedImage};
pub use encode::{encode_file, EncodeError};
pub use pipeline::{crop_bottom, CropError, CropSummary};
pub use transform::{apply_crop, bottom_crop_rect, CropRect, TransformError, KEEP_PERCENT};
