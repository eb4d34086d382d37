//! Image decoding.
//!
//! This module provides functionality for:
//! - Reading an image file from disk and decoding it
//! - Decoding an in-memory buffer
//! - Rejecting decoded images that have no pixels
//!
//! The pixel format of the source is preserved; nothing is converted to RGB.
//!
//! # Examples
//!
//! ```ignore
//! use bottomcrop_core::decode::decode_file;
//!
//! let image = decode_file("scan.png")?;
//! println!("Decoded {}x{} image", image.width(), image.height());
//! ```

mod file;
mod types;

pub use file::{decode_bytes, decode_file};
pub use types::{DecodeError, DecodedImage};
