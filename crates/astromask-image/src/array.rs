use ndarray::{Array2, ArrayView2};

use crate::{Image, ImageError, ImageSize};

impl<T: Copy> Image<T> {
    /// Create an image from a 2D array view of any memory layout.
    ///
    /// The view is read in logical `[row, col]` order, so transposed, strided or
    /// Fortran-ordered views all produce a densely packed row-major image.
    ///
    /// # Examples
    ///
    /// ```
    /// use astromask_image::Image;
    /// use ndarray::array;
    ///
    /// let array = array![[1.0f32, 2.0], [3.0, 4.0], [5.0, 6.0]];
    /// let image = Image::from_array_view(array.t()).unwrap();
    ///
    /// assert_eq!(image.width(), 3);
    /// assert_eq!(image.height(), 2);
    /// assert_eq!(image.as_slice(), &[1.0, 3.0, 5.0, 2.0, 4.0, 6.0]);
    /// ```
    pub fn from_array_view(view: ArrayView2<T>) -> Result<Self, ImageError> {
        let (height, width) = view.dim();
        let data = view.iter().copied().collect();

        Image::new(ImageSize { width, height }, data)
    }

    /// Convert the image into a standard (C-contiguous) layout `ndarray::Array2`.
    pub fn into_array2(self) -> Result<Array2<T>, ImageError> {
        let (height, width) = (self.height(), self.width());
        Ok(Array2::from_shape_vec((height, width), self.into_vec())?)
    }
}

impl<T: Copy> TryFrom<Array2<T>> for Image<T> {
    type Error = ImageError;

    fn try_from(array: Array2<T>) -> Result<Self, Self::Error> {
        Image::from_array_view(array.view())
    }
}
