//! Image encoding.
//!
//! This module provides functionality for:
//! - Resolving the output format from a file extension
//! - Encoding a decoded image into memory
//! - Writing the encoded bytes to disk
//!
//! # Examples
//!
//! ```ignore
//! use bottomcrop_core::encode::encode_file;
//!
//! let format = encode_file(&image, "cropped.png")?;
//! println!("Wrote {format:?}");
//! ```

mod file;

pub use file::{encode_file, encode_image, output_format, EncodeError};
