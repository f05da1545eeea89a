use astromask_image::{Image, ImageError, ImageSize};

/// Represents 2D padding with top, bottom, left, and right values (in pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding2D {
    /// Amount of padding to add on the top side.
    pub top: usize,
    /// Amount of padding to add on the bottom side.
    pub bottom: usize,
    /// Amount of padding to add on the left side.
    pub left: usize,
    /// Amount of padding to add on the right side.
    pub right: usize,
}

impl Padding2D {
    /// The same amount of padding on all four sides.
    pub fn uniform(pad: usize) -> Self {
        Self {
            top: pad,
            bottom: pad,
            left: pad,
            right: pad,
        }
    }

    /// Size of an image of `size` once this padding is applied.
    pub fn padded_size(&self, size: ImageSize) -> ImageSize {
        ImageSize {
            width: size.width + self.left + self.right,
            height: size.height + self.top + self.bottom,
        }
    }

    /// Validates that a new image size correctly matches the expected dimensions
    /// after applying this padding to an existing image.
    ///
    /// # Example
    /// ```rust
    /// use astromask_image::ImageSize;
    /// use astromask_imgproc::padding::Padding2D;
    /// let padding = Padding2D { top: 1, bottom: 1, left: 2, right: 2 };
    /// let old_size = ImageSize { width: 4, height: 4 };
    /// let new_size = ImageSize { width: 8, height: 6 };
    ///
    /// assert!(padding.validate_size(old_size, new_size));
    /// ```
    pub fn validate_size(&self, old_size: ImageSize, new_size: ImageSize) -> bool {
        self.padded_size(old_size) == new_size
    }
}

/// Fills `dst` with `constant_value` and copies `src` into its center,
/// offset by the top and left padding.
///
/// # Arguments
///
/// * `src` - The source image to pad.
/// * `dst` - The destination image where the padded output will be stored.
/// * `padding` - The amount of padding (in pixels) for all four sides.
/// * `constant_value` - The pixel value written to the padded region.
///
/// # Errors
///
/// Returns an error if the size of `dst` does not match the size of `src`
/// once `padding` is applied.
///
/// # Example
///
/// ```rust
/// use astromask_image::{Image, ImageSize};
/// use astromask_imgproc::padding::{spatial_padding, Padding2D};
///
/// let src = Image::from_size_val(ImageSize { width: 2, height: 2 }, 1.0f32).unwrap();
/// let mut dst = Image::from_size_val(ImageSize { width: 4, height: 4 }, 0.0f32).unwrap();
///
/// spatial_padding(&src, &mut dst, Padding2D::uniform(1), f32::NAN).unwrap();
///
/// assert!(dst.get([0, 0]).unwrap().is_nan());
/// assert_eq!(dst.get([1, 1]), Some(&1.0));
/// ```
pub fn spatial_padding<T: Copy>(
    src: &Image<T>,
    dst: &mut Image<T>,
    padding: Padding2D,
    constant_value: T,
) -> Result<(), ImageError> {
    if !padding.validate_size(src.size(), dst.size()) {
        let expected = padding.padded_size(src.size());
        return Err(ImageError::InvalidImageSize(
            dst.width(),
            dst.height(),
            expected.width,
            expected.height,
        ));
    }

    let old_stride = src.width();
    let new_stride = dst.width();

    let new_data = dst.as_slice_mut();
    new_data.fill(constant_value);

    // nothing to copy and chunks_exact rejects a zero stride
    if old_stride == 0 || src.height() == 0 {
        return Ok(());
    }

    // copy old image data as center of new image data
    let row_offset = padding.top * new_stride + padding.left;

    for (src_row, dst_row) in src
        .as_slice()
        .chunks_exact(old_stride)
        .zip(new_data[row_offset..].chunks_mut(new_stride))
    {
        dst_row[..old_stride].copy_from_slice(src_row);
    }

    Ok(())
}

/// Allocates a padded copy of `src` with the border filled with `constant_value`.
///
/// # Example
///
/// ```rust
/// use astromask_image::Image;
/// use astromask_imgproc::padding::{pad_constant, Padding2D};
///
/// let src = Image::from_rows(&[[1.0f64, 2.0]]).unwrap();
/// let padded = pad_constant(&src, Padding2D { top: 1, bottom: 0, left: 0, right: 1 }, -1.0).unwrap();
///
/// assert_eq!(padded.as_slice(), &[-1.0, -1.0, -1.0, 1.0, 2.0, -1.0]);
/// ```
pub fn pad_constant<T: Copy>(
    src: &Image<T>,
    padding: Padding2D,
    constant_value: T,
) -> Result<Image<T>, ImageError> {
    let mut dst = Image::from_size_val(padding.padded_size(src.size()), constant_value)?;
    spatial_padding(src, &mut dst, padding, constant_value)?;
    Ok(dst)
}
