use num_traits::{Float, NumCast};

use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use astromask_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// assert_eq!(image_size.num_pixels(), 200);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Total number of pixels covered by the size.
    pub fn num_pixels(&self) -> usize {
        self.width * self.height
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents a single-channel image with pixel data.
///
/// The pixels are stored row-major in one densely packed buffer of length
/// `width * height`, addressed by `[row, col]`. No-data pixels are marked with NaN.
#[derive(Clone, Debug)]
pub struct Image<T> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T> Image<T> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image, row-major.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use astromask_image::{Image, ImageSize};
    ///
    /// let image = Image::<f32>::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0.0f32; 10 * 20],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        // check if the data length matches the image size
        if data.len() != size.num_pixels() {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.num_pixels(),
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and every pixel set to `val`.
    ///
    /// # Examples
    ///
    /// ```
    /// use astromask_image::{Image, ImageSize};
    ///
    /// let image = Image::from_size_val(ImageSize { width: 3, height: 2 }, f64::NAN).unwrap();
    ///
    /// assert_eq!(image.as_slice().len(), 6);
    /// assert!(image.as_slice().iter().all(|v| v.is_nan()));
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.num_pixels()];
        Image::new(size, data)
    }

    /// Create a new image from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::RaggedRows`] if the rows do not all have the same length.
    ///
    /// # Examples
    ///
    /// ```
    /// use astromask_image::Image;
    ///
    /// let image = Image::from_rows(&[
    ///     vec![1.0f32, 2.0, 3.0],
    ///     vec![4.0f32, f32::NAN, 6.0],
    /// ]).unwrap();
    ///
    /// assert_eq!(image.width(), 3);
    /// assert_eq!(image.height(), 2);
    /// assert!(image.get([1, 1]).unwrap().is_nan());
    /// ```
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, ImageError>
    where
        R: AsRef<[T]>,
        T: Copy,
    {
        let width = rows.first().map_or(0, |r| r.as_ref().len());

        let mut data = Vec::with_capacity(width * rows.len());
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(ImageError::RaggedRows {
                    row,
                    len: values.len(),
                    expected: width,
                });
            }
            data.extend_from_slice(values);
        }

        Image::new(
            ImageSize {
                width,
                height: rows.len(),
            },
            data,
        )
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the pixel data as a contiguous row-major slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a mutable contiguous row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return its row-major pixel buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get a reference to the pixel at `[row, col]`, or `None` if out of bounds.
    pub fn get(&self, index: [usize; 2]) -> Option<&T> {
        let [row, col] = index;
        if row >= self.height() || col >= self.width() {
            return None;
        }
        self.data.get(row * self.width() + col)
    }

    /// Get a mutable reference to the pixel at `[row, col]`, or `None` if out of bounds.
    pub fn get_mut(&mut self, index: [usize; 2]) -> Option<&mut T> {
        let [row, col] = index;
        if row >= self.height() || col >= self.width() {
            return None;
        }
        let width = self.width();
        self.data.get_mut(row * width + col)
    }

    /// Get one row of pixels, or `None` if out of bounds.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.height() {
            return None;
        }
        let start = row * self.width();
        self.data.get(start..start + self.width())
    }

    /// Cast the pixel data of the image to a different type.
    ///
    /// # Returns
    ///
    /// A new image with the pixel data cast to the given type.
    ///
    /// # Examples
    ///
    /// ```
    /// use astromask_image::Image;
    ///
    /// let image = Image::from_rows(&[[1.5f64, f64::NAN]]).unwrap();
    /// let image_f32 = image.cast::<f32>().unwrap();
    ///
    /// assert_eq!(image_f32.get([0, 0]), Some(&1.5f32));
    /// assert!(image_f32.get([0, 1]).unwrap().is_nan());
    /// ```
    pub fn cast<U>(&self) -> Result<Image<U>, ImageError>
    where
        T: Copy + NumCast,
        U: NumCast,
    {
        let casted_data = self
            .data
            .iter()
            .map(|&x| {
                let xu = U::from(x)
                    .ok_or_else(|| ImageError::CastError(std::any::type_name::<U>().to_string()))?;
                Ok(xu)
            })
            .collect::<Result<Vec<U>, ImageError>>()?;

        Image::new(self.size, casted_data)
    }
}

impl<T: Float> Image<T> {
    /// Count the no-data (NaN) pixels of the image.
    pub fn count_nan(&self) -> usize {
        self.data.iter().filter(|v| v.is_nan()).count()
    }
}
