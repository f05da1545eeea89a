use astromask_image::{Image, ImageError, ImageSize};
use log::{debug, trace};
use num_traits::Float;

use crate::crop::crop_image;
use crate::padding::{pad_constant, Padding2D};
use crate::transition::{find_transitions, Axis};
use crate::validity::ValidityMask;

/// Border width used by [`BorderMasker::default`].
pub const DEFAULT_BORDER_WIDTH: usize = 10;

/// Masks a band of pixels around every data/no-data boundary of an image.
///
/// No-data pixels are NaN. For each pair of adjacent pixels whose validity
/// differs, `border` pixels on each side of the pair are set to NaN along the
/// axis of the pair. True image edges are treated as boundaries with no-data
/// outside the image.
///
/// The band is computed per axis, so the resulting boundary is blocky rather
/// than a distance-based contour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderMasker {
    border: usize,
}

impl Default for BorderMasker {
    fn default() -> Self {
        Self {
            border: DEFAULT_BORDER_WIDTH,
        }
    }
}

impl BorderMasker {
    /// Create a masker with the given border width in pixels.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidBorderWidth`] if `border` is zero.
    pub fn new(border: usize) -> Result<Self, ImageError> {
        if border == 0 {
            return Err(ImageError::InvalidBorderWidth(border));
        }
        Ok(Self { border })
    }

    /// The border width in pixels.
    pub fn border(&self) -> usize {
        self.border
    }

    /// Mask the borders of `src`, returning a new densely packed image of the same size.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::BorderTooLarge`] if twice the border width is larger
    /// than the smallest image dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// use astromask_image::Image;
    /// use astromask_imgproc::border_mask::BorderMasker;
    ///
    /// let image = Image::from_size_val([6, 6].into(), 1.0f32).unwrap();
    /// let masked = BorderMasker::new(1).unwrap().mask(&image).unwrap();
    ///
    /// // the outer ring is masked, the inner 4x4 block is kept
    /// assert_eq!(masked.count_nan(), 36 - 16);
    /// assert!(masked.get([0, 3]).unwrap().is_nan());
    /// assert_eq!(masked.get([1, 1]), Some(&1.0));
    /// ```
    pub fn mask<T: Float>(&self, src: &Image<T>) -> Result<Image<T>, ImageError> {
        let border = self.border;
        check_border(border, src.size())?;

        // pad with no-data so the true edges become ordinary transitions
        let mut padded = pad_constant(src, Padding2D::uniform(border), T::nan())?;
        trace!("padded {} to {}", src.size(), padded.size());

        let validity = ValidityMask::from_image(&padded);
        let horizontal = find_transitions(&validity, Axis::Horizontal);
        let vertical = find_transitions(&validity, Axis::Vertical);

        debug!(
            "masking borders of {} with width {}: {} horizontal and {} vertical transitions",
            src.size(),
            border,
            horizontal.len(),
            vertical.len()
        );

        let padded_size = padded.size();
        for i in 1..=border as isize {
            for transition in horizontal.iter().chain(vertical.iter()) {
                // near side includes the transition pixel itself at i == 1
                for delta in [1 - i, i] {
                    if let Some(px) = transition
                        .step(delta, padded_size)
                        .and_then(|index| padded.get_mut(index))
                    {
                        *px = T::nan();
                    }
                }
            }
        }

        let mut dst = Image::from_size_val(src.size(), T::nan())?;
        crop_image(&padded, &mut dst, border, border)?;

        Ok(dst)
    }
}

/// Mask the no-data borders of `src` with a band of `border` pixels.
///
/// Shorthand for [`BorderMasker::new`] followed by [`BorderMasker::mask`].
///
/// # Examples
///
/// ```
/// use astromask_image::Image;
/// use astromask_imgproc::border_mask::mask_borders;
///
/// let nan = f64::NAN;
/// let image = Image::from_rows(&[
///     [nan, nan, nan, nan, nan],
///     [nan, 1.0, 2.0, 3.0, nan],
///     [nan, 4.0, 5.0, 6.0, nan],
///     [nan, 7.0, 8.0, 9.0, nan],
///     [nan, nan, nan, nan, nan],
/// ]).unwrap();
///
/// let masked = mask_borders(&image, 1).unwrap();
///
/// assert_eq!(masked.count_nan(), 24);
/// assert_eq!(masked.get([2, 2]), Some(&5.0));
/// ```
pub fn mask_borders<T: Float>(src: &Image<T>, border: usize) -> Result<Image<T>, ImageError> {
    BorderMasker::new(border)?.mask(src)
}

fn check_border(border: usize, size: ImageSize) -> Result<(), ImageError> {
    if border == 0 {
        return Err(ImageError::InvalidBorderWidth(border));
    }

    if border.saturating_mul(2) > size.width.min(size.height) {
        return Err(ImageError::BorderTooLarge {
            border,
            width: size.width,
            height: size.height,
        });
    }

    Ok(())
}
