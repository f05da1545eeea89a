use astromask_image::{Image, ImageError};

/// Crop an image to a specified region.
///
/// The region has the size of `dst` and its top-left corner at `(x, y)` in `src`.
///
/// # Arguments
///
/// * `src` - The source image to crop.
/// * `dst` - The destination image to store the cropped image.
/// * `x` - The x-coordinate (column) of the top-left corner of the region to crop.
/// * `y` - The y-coordinate (row) of the top-left corner of the region to crop.
///
/// # Errors
///
/// Returns [`ImageError::CropOutOfBounds`] if the region does not fit inside `src`.
///
/// # Examples
///
/// ```rust
/// use astromask_image::{Image, ImageSize};
/// use astromask_imgproc::crop::crop_image;
///
/// let image = Image::new(ImageSize { width: 4, height: 4 }, vec![
///     0.0f32, 1.0, 2.0, 3.0,
///     4.0, 5.0, 6.0, 7.0,
///     8.0, 9.0, 10.0, 11.0,
///     12.0, 13.0, 14.0, 15.0,
/// ]).unwrap();
///
/// let mut cropped = Image::from_size_val(ImageSize { width: 2, height: 2 }, 0.0f32).unwrap();
///
/// crop_image(&image, &mut cropped, 1, 1).unwrap();
///
/// assert_eq!(cropped.as_slice(), &[5.0, 6.0, 9.0, 10.0]);
/// ```
pub fn crop_image<T: Copy>(
    src: &Image<T>,
    dst: &mut Image<T>,
    x: usize,
    y: usize,
) -> Result<(), ImageError> {
    let dst_cols = dst.cols();

    if x + dst_cols > src.cols() || y + dst.rows() > src.rows() {
        return Err(ImageError::CropOutOfBounds {
            x,
            y,
            width: dst_cols,
            height: dst.rows(),
            src_width: src.cols(),
            src_height: src.rows(),
        });
    }

    if dst_cols == 0 {
        return Ok(());
    }

    let src_cols = src.cols();
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .chunks_exact_mut(dst_cols)
        .enumerate()
        .for_each(|(i, dst_row)| {
            // get the slice at the top left corner
            let offset = (y + i) * src_cols + x;
            let src_slice = &src_data[offset..offset + dst_cols];

            // copy the slice to the destination
            dst_row.copy_from_slice(src_slice);
        });

    Ok(())
}
