/// An error type for the image module.
///
/// Variants fall in two kinds: malformed input data (see [`ImageError::is_invalid_input`])
/// and bad operation arguments (see [`ImageError::is_invalid_argument`]).
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when an `ndarray` shape is not valid.
    #[error("Invalid shape")]
    InvalidShape(#[from] ndarray::ShapeError),

    /// Error when nested rows are not all the same length.
    #[error("Row {row} has length {len}, expected {expected}")]
    RaggedRows {
        /// Index of the first offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Length of the first row.
        expected: usize,
    },

    /// Error when an image does not have the expected size.
    #[error("Image size ({0}x{1}) does not match the expected size ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a crop window falls outside the source image.
    #[error("Crop window at ({x}, {y}) of size {width}x{height} is outside the source image ({src_width}x{src_height})")]
    CropOutOfBounds {
        /// Left column of the window.
        x: usize,
        /// Top row of the window.
        y: usize,
        /// Window width.
        width: usize,
        /// Window height.
        height: usize,
        /// Source image width.
        src_width: usize,
        /// Source image height.
        src_height: usize,
    },

    /// Error when a pixel value cannot be cast to the target type.
    #[error("Failed to cast image data to {0}")]
    CastError(String),

    /// Error when the border width is not positive.
    #[error("Border width must be positive, got {0}")]
    InvalidBorderWidth(usize),

    /// Error when the border is wider than half of the smallest image dimension.
    #[error("Border width {border} is too large for an image of size {width}x{height}")]
    BorderTooLarge {
        /// Requested border width.
        border: usize,
        /// Image width.
        width: usize,
        /// Image height.
        height: usize,
    },
}

impl ImageError {
    /// Whether the error comes from malformed image data or buffers.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ImageError::InvalidChannelShape(..)
                | ImageError::InvalidShape(_)
                | ImageError::RaggedRows { .. }
                | ImageError::InvalidImageSize(..)
                | ImageError::CropOutOfBounds { .. }
                | ImageError::CastError(_)
        )
    }

    /// Whether the error comes from an out of range operation argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            ImageError::InvalidBorderWidth(_) | ImageError::BorderTooLarge { .. }
        )
    }
}
