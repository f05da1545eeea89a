use astromask_image::ImageSize;

use crate::validity::ValidityMask;

/// The direction along which neighbouring pixels are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Neighbours in the same row, `(row, col)` and `(row, col + 1)`.
    Horizontal,
    /// Neighbours in the same column, `(row, col)` and `(row + 1, col)`.
    Vertical,
}

/// A place where validity flips between two adjacent pixels.
///
/// `row` and `col` address the first pixel of the pair; the second one is the
/// next pixel along `axis`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Row of the first pixel of the pair.
    pub row: usize,
    /// Column of the first pixel of the pair.
    pub col: usize,
    /// Axis the pair lies on.
    pub axis: Axis,
}

impl Transition {
    /// The pixel `delta` steps away from the transition along its axis,
    /// or `None` if it falls outside an image of `size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use astromask_image::ImageSize;
    /// use astromask_imgproc::transition::{Axis, Transition};
    ///
    /// let t = Transition { row: 2, col: 0, axis: Axis::Vertical };
    /// let size = ImageSize { width: 1, height: 4 };
    ///
    /// assert_eq!(t.step(1, size), Some([3, 0]));
    /// assert_eq!(t.step(-2, size), Some([0, 0]));
    /// assert_eq!(t.step(2, size), None);
    /// ```
    pub fn step(&self, delta: isize, size: ImageSize) -> Option<[usize; 2]> {
        let (pos, len) = match self.axis {
            Axis::Horizontal => (self.col, size.width),
            Axis::Vertical => (self.row, size.height),
        };

        let moved = pos.checked_add_signed(delta).filter(|&p| p < len)?;

        match self.axis {
            Axis::Horizontal => Some([self.row, moved]),
            Axis::Vertical => Some([moved, self.col]),
        }
    }
}

/// Find every pair of adjacent pixels along `axis` whose validity differs.
///
/// Transitions are returned in row-major order of their first pixel.
///
/// # Examples
///
/// ```
/// use astromask_image::Image;
/// use astromask_imgproc::transition::{find_transitions, Axis, Transition};
/// use astromask_imgproc::validity::ValidityMask;
///
/// let image = Image::from_rows(&[[f32::NAN, 1.0, 2.0, f32::NAN]]).unwrap();
/// let mask = ValidityMask::from_image(&image);
///
/// let found = find_transitions(&mask, Axis::Horizontal);
/// assert_eq!(
///     found,
///     vec![
///         Transition { row: 0, col: 0, axis: Axis::Horizontal },
///         Transition { row: 0, col: 2, axis: Axis::Horizontal },
///     ]
/// );
/// assert!(find_transitions(&mask, Axis::Vertical).is_empty());
/// ```
pub fn find_transitions(mask: &ValidityMask, axis: Axis) -> Vec<Transition> {
    let ImageSize { width, height } = mask.size();
    let valid = mask.as_slice();

    let mut transitions = Vec::new();
    if width == 0 || height == 0 {
        return transitions;
    }

    match axis {
        Axis::Horizontal => {
            for (row, cells) in valid.chunks_exact(width).enumerate() {
                for (col, pair) in cells.windows(2).enumerate() {
                    if pair[0] != pair[1] {
                        transitions.push(Transition { row, col, axis });
                    }
                }
            }
        }
        Axis::Vertical => {
            for (row, (upper, lower)) in valid
                .chunks_exact(width)
                .zip(valid.chunks_exact(width).skip(1))
                .enumerate()
            {
                for (col, (a, b)) in upper.iter().zip(lower).enumerate() {
                    if a != b {
                        transitions.push(Transition { row, col, axis });
                    }
                }
            }
        }
    }

    transitions
}
