use astromask_image::{Image, ImageSize};
use num_traits::Float;

/// Per-pixel validity of an image: `true` for data, `false` for no-data (NaN).
///
/// Infinite samples count as valid data; only NaN marks no-data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidityMask {
    size: ImageSize,
    data: Vec<bool>,
}

impl ValidityMask {
    /// Compute the validity mask of an image.
    ///
    /// # Examples
    ///
    /// ```
    /// use astromask_image::Image;
    /// use astromask_imgproc::validity::ValidityMask;
    ///
    /// let image = Image::from_rows(&[[1.0f32, f32::NAN], [f32::INFINITY, 0.0]]).unwrap();
    /// let mask = ValidityMask::from_image(&image);
    ///
    /// assert_eq!(mask.as_slice(), &[true, false, true, true]);
    /// assert_eq!(mask.count_valid(), 3);
    /// ```
    pub fn from_image<T: Float>(image: &Image<T>) -> Self {
        Self {
            size: image.size(),
            data: image.as_slice().iter().map(|v| !v.is_nan()).collect(),
        }
    }

    /// Size of the mask, equal to the size of the source image.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Validity at `[row, col]`, or `None` if out of bounds.
    pub fn get(&self, index: [usize; 2]) -> Option<bool> {
        let [row, col] = index;
        if row >= self.size.height || col >= self.size.width {
            return None;
        }
        self.data.get(row * self.size.width + col).copied()
    }

    /// Row-major validity flags.
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }

    /// Number of valid pixels.
    pub fn count_valid(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }
}
