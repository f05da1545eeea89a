#![deny(missing_docs)]
//! Image types for masking no-data regions of astronomical images

/// image representation for no-data masking.
pub mod image;

/// Error types for the image module.
pub mod error;

/// conversions between images and `ndarray` arrays.
pub mod array;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
