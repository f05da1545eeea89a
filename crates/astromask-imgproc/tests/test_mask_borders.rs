use astromask_image::{Image, ImageError, ImageSize};
use astromask_imgproc::border_mask::{mask_borders, BorderMasker};
use ndarray::{Array2, ShapeBuilder};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn is_valid(image: &Image<f32>, row: usize, col: usize) -> bool {
    image.get([row, col]).is_some_and(|v| !v.is_nan())
}

/// Rows and columns whose pixels are all valid, as half-open ranges.
fn valid_bounds(image: &Image<f32>) -> Option<((usize, usize), (usize, usize))> {
    let rows: Vec<usize> = (0..image.height())
        .filter(|&r| (0..image.width()).any(|c| is_valid(image, r, c)))
        .collect();
    let cols: Vec<usize> = (0..image.width())
        .filter(|&c| (0..image.height()).any(|r| is_valid(image, r, c)))
        .collect();

    Some((
        (*rows.first()?, *rows.last()? + 1),
        (*cols.first()?, *cols.last()? + 1),
    ))
}

/// A pixel survives when every pixel within `border` steps of it, along its
/// row and along its column, exists and holds data.
fn brute_force_mask(src: &Image<f32>, border: usize) -> Image<f32> {
    let (h, w) = (src.height() as isize, src.width() as isize);
    let b = border as isize;
    let mut dst = src.clone();

    for r in 0..h {
        for c in 0..w {
            let keep = (-b..=b).all(|d| {
                let (rr, cc) = (r + d, c + d);
                (0..h).contains(&rr)
                    && (0..w).contains(&cc)
                    && is_valid(src, rr as usize, c as usize)
                    && is_valid(src, r as usize, cc as usize)
            });
            if !keep {
                if let Some(px) = dst.get_mut([r as usize, c as usize]) {
                    *px = f32::NAN;
                }
            }
        }
    }

    dst
}

/// Random image with a valid island in a no-data frame and scattered holes.
fn random_image(rng: &mut StdRng, size: ImageSize) -> Image<f32> {
    let top = rng.random_range(0..size.height / 3);
    let left = rng.random_range(0..size.width / 3);
    let bottom = size.height - rng.random_range(0..size.height / 3);
    let right = size.width - rng.random_range(0..size.width / 3);

    let data = (0..size.num_pixels())
        .map(|i| {
            let (r, c) = (i / size.width, i % size.width);
            let inside = (top..bottom).contains(&r) && (left..right).contains(&c);
            if inside && !rng.random_bool(0.03) {
                rng.random_range(-100.0..100.0)
            } else {
                f32::NAN
            }
        })
        .collect();

    Image::new(size, data).expect("size matches data")
}

fn assert_same_pixels(actual: &Image<f32>, expected: &Image<f32>) {
    assert_eq!(actual.size(), expected.size());
    for (i, (a, e)) in actual
        .as_slice()
        .iter()
        .zip(expected.as_slice())
        .enumerate()
    {
        assert!(
            (a.is_nan() && e.is_nan()) || a == e,
            "pixel {i}: got {a}, expected {e}"
        );
    }
}

#[test]
fn test_shape_preserved() -> Result<(), ImageError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(7);

    for (width, height, border) in [(6, 6, 1), (17, 9, 2), (40, 33, 5), (64, 64, 10)] {
        let image = random_image(&mut rng, ImageSize { width, height });
        let masked = mask_borders(&image, border)?;
        assert_eq!(masked.size(), image.size());
        assert_eq!(masked.as_slice().len(), width * height);
    }

    Ok(())
}

#[test]
fn test_nan_monotonicity() -> Result<(), ImageError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(11);

    for border in 1..=4 {
        let image = random_image(&mut rng, [30, 24].into());
        let masked = mask_borders(&image, border)?;

        for (src, dst) in image.as_slice().iter().zip(masked.as_slice()) {
            if src.is_nan() {
                assert!(dst.is_nan());
            } else if !dst.is_nan() {
                assert_eq!(src, dst);
            }
        }
        assert!(masked.count_nan() >= image.count_nan());
    }

    Ok(())
}

#[test]
fn test_matches_brute_force() -> Result<(), ImageError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..20 {
        let width = rng.random_range(8..40);
        let height = rng.random_range(8..40);
        let border = rng.random_range(1..=width.min(height) / 2);

        let image = random_image(&mut rng, ImageSize { width, height });
        let masked = mask_borders(&image, border)?;

        assert_same_pixels(&masked, &brute_force_mask(&image, border));
    }

    Ok(())
}

#[test]
fn test_masking_is_not_idempotent() -> Result<(), ImageError> {
    init_logger();
    let nan = f32::NAN;

    // valid 10x10 block at [3, 13) in a 16x16 no-data frame
    let mut image = Image::from_size_val([16, 16].into(), nan)?;
    for r in 3..13 {
        for c in 3..13 {
            if let Some(px) = image.get_mut([r, c]) {
                *px = 1.0;
            }
        }
    }
    assert_eq!(valid_bounds(&image), Some(((3, 13), (3, 13))));

    let once = mask_borders(&image, 2)?;
    assert_eq!(valid_bounds(&once), Some(((5, 11), (5, 11))));
    assert_eq!(once.count_nan(), 256 - 36);

    let twice = mask_borders(&once, 2)?;
    assert_eq!(valid_bounds(&twice), Some(((7, 9), (7, 9))));
    assert_eq!(twice.count_nan(), 256 - 4);

    Ok(())
}

#[test]
fn test_single_nan_row() -> Result<(), ImageError> {
    init_logger();

    let mut image = Image::from_size_val([9, 9].into(), 3.0f32)?;
    for c in 0..9 {
        if let Some(px) = image.get_mut([4, c]) {
            *px = f32::NAN;
        }
    }

    let masked = mask_borders(&image, 1)?;

    // the no-data row and its neighbours along the column axis
    for row in [3, 4, 5] {
        assert!((0..9).all(|c| !is_valid(&masked, row, c)), "row {row}");
    }
    // rows further away keep their interior, the true edges are masked
    for row in [1, 2, 6, 7] {
        assert!((1..8).all(|c| is_valid(&masked, row, c)), "row {row}");
        assert!(!is_valid(&masked, row, 0));
        assert!(!is_valid(&masked, row, 8));
    }
    for row in [0, 8] {
        assert!((0..9).all(|c| !is_valid(&masked, row, c)), "row {row}");
    }

    Ok(())
}

#[test]
fn test_small_image_with_nan_row() -> Result<(), ImageError> {
    init_logger();

    // 5x5 with row 2 missing: rows 1 and 3 follow the no-data row, rows 0 and 4
    // sit on the true image edge, so nothing survives a border of 1
    let mut image = Image::from_size_val([5, 5].into(), 1.0f32)?;
    for c in 0..5 {
        if let Some(px) = image.get_mut([2, c]) {
            *px = f32::NAN;
        }
    }

    let masked = mask_borders(&image, 1)?;
    for row in [1, 3] {
        assert!((0..5).all(|c| !is_valid(&masked, row, c)));
    }
    assert_eq!(masked.count_nan(), 25);

    Ok(())
}

#[test]
fn test_edges_masked_without_nan_frame() -> Result<(), ImageError> {
    init_logger();

    let image = Image::from_size_val([6, 6].into(), 5.0f32)?;
    let masked = mask_borders(&image, 1)?;

    for row in 0..6 {
        for col in 0..6 {
            let ring = row == 0 || row == 5 || col == 0 || col == 5;
            assert_eq!(is_valid(&masked, row, col), !ring, "at [{row}, {col}]");
        }
    }
    assert_eq!(masked.count_nan(), 20);

    Ok(())
}

#[test]
fn test_existing_nan_frame() -> Result<(), ImageError> {
    init_logger();
    let nan = f32::NAN;

    #[rustfmt::skip]
    let image = Image::from_rows(&[
        [nan, nan, nan, nan, nan, nan, nan],
        [nan, 1.0, 1.0, 1.0, 1.0, 1.0, nan],
        [nan, 1.0, 2.0, 2.0, 2.0, 1.0, nan],
        [nan, 1.0, 2.0, 3.0, 2.0, 1.0, nan],
        [nan, 1.0, 2.0, 2.0, 2.0, 1.0, nan],
        [nan, 1.0, 1.0, 1.0, 1.0, 1.0, nan],
        [nan, nan, nan, nan, nan, nan, nan],
    ])?;

    let masked = mask_borders(&image, 1)?;

    assert_eq!(valid_bounds(&masked), Some(((2, 5), (2, 5))));
    assert_eq!(masked.get([3, 3]), Some(&3.0));
    assert_eq!(masked.get([2, 2]), Some(&2.0));
    assert_eq!(masked.count_nan(), 49 - 9);

    Ok(())
}

#[test]
fn test_all_nan_and_all_valid() -> Result<(), ImageError> {
    init_logger();

    let nodata = Image::from_size_val([8, 5].into(), f32::NAN)?;
    let masked = mask_borders(&nodata, 2)?;
    assert_eq!(masked.count_nan(), 40);

    // a border of 1 on a 2x2 image masks the edge ring, which is everything
    let tiny = Image::from_size_val([2, 2].into(), 1.0f32)?;
    assert_eq!(mask_borders(&tiny, 1)?.count_nan(), 4);

    Ok(())
}

#[test]
fn test_input_not_mutated() -> Result<(), ImageError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(3);

    let image = random_image(&mut rng, [20, 20].into());
    let before = image.clone();

    let masked = BorderMasker::new(3)?.mask(&image)?;

    assert_same_pixels(&image, &before);
    assert!(masked.count_nan() > image.count_nan());

    Ok(())
}

#[test]
fn test_output_is_contiguous() -> Result<(), ImageError> {
    init_logger();

    // Fortran-ordered input, read through a transposed view
    let mut array = Array2::<f32>::from_elem((12, 10).f(), 1.0);
    array[[5, 5]] = f32::NAN;
    assert!(!array.is_standard_layout());

    let image = Image::from_array_view(array.t())?;
    let masked = mask_borders(&image, 2)?;

    assert_eq!(masked.as_slice().len(), 120);
    let out = masked.into_array2()?;
    assert!(out.is_standard_layout());
    assert_eq!(out.dim(), (10, 12));
    assert!(out[[5, 5]].is_nan());
    assert!(out[[5, 7]].is_nan());
    assert_eq!(out[[3, 3]], 1.0);

    Ok(())
}

#[test]
fn test_f64_images() -> Result<(), ImageError> {
    init_logger();

    let image = Image::from_size_val([6, 6].into(), 0.5f64)?;
    let masked = mask_borders(&image, 1)?;

    assert_eq!(masked.count_nan(), 20);
    assert_eq!(masked.get([2, 3]), Some(&0.5));

    Ok(())
}
