//! Single-threaded block-grid engine.
//!
//! Walks an RGB raster one kernel-sized block at a time, hands each block's
//! pixels to the configured transform, and writes the result back in place.
//! Under `CoveragePolicy::Truncate` any trailing rows/columns the kernel does
//! not divide are left untouched; under `Clip` they are processed as blocks
//! of reduced size.
use ndarray::{Array3, s};

use crate::core::processing::transforms::BlockTransform;
use crate::error::{Error, Result};
use crate::types::{CoveragePolicy, KernelSize, Rgb8};

/// Block offsets and lengths along one axis: full kernel steps, plus the
/// clipped remainder when the policy asks for it.
pub(crate) fn axis_spans(extent: usize, step: usize, coverage: CoveragePolicy) -> Vec<(usize, usize)> {
    let mut spans = Vec::with_capacity(extent / step + 1);
    let mut offset = 0;
    while offset + step <= extent {
        spans.push((offset, step));
        offset += step;
    }
    if coverage == CoveragePolicy::Clip && offset < extent {
        spans.push((offset, extent - offset));
    }
    spans
}

/// Number of full kernel columns and rows for an image of the given size.
pub fn grid_dims(width: usize, height: usize, kernel: KernelSize) -> (usize, usize) {
    (width / kernel.width, height / kernel.height)
}

/// Applies `transform` to every block of `raster` in place.
///
/// The raster keeps its dimensions and row-major pixel ordering; only block
/// interiors change. A transform failure aborts immediately and leaves the
/// raster partially written, so callers must treat the whole run as failed.
pub fn process_tiles<T>(
    raster: &mut Array3<u8>,
    transform: &T,
    kernel: KernelSize,
    coverage: CoveragePolicy,
) -> Result<()>
where
    T: BlockTransform + ?Sized,
{
    if kernel.width == 0 || kernel.height == 0 {
        return Err(Error::ZeroKernel {
            width: kernel.width,
            height: kernel.height,
        });
    }

    let (height, width, _) = raster.dim();
    for (y0, block_h) in axis_spans(height, kernel.height, coverage) {
        for (x0, block_w) in axis_spans(width, kernel.width, coverage) {
            let size = KernelSize::new(block_w, block_h);

            // Extract the block row-major.
            let block = raster.slice(s![y0..y0 + block_h, x0..x0 + block_w, ..]);
            let mut pixels: Vec<Rgb8> = Vec::with_capacity(size.pixels());
            for row in block.outer_iter() {
                for px in row.outer_iter() {
                    pixels.push([px[0], px[1], px[2]]);
                }
            }

            let out = transform.apply(&pixels, size)?;
            if out.len() != pixels.len() {
                return Err(Error::TransformArity {
                    expected: pixels.len(),
                    actual: out.len(),
                });
            }

            let mut dst = raster.slice_mut(s![y0..y0 + block_h, x0..x0 + block_w, ..]);
            for (i, px) in out.iter().enumerate() {
                let (x, y) = (i % block_w, i / block_w);
                dst[[y, x, 0]] = px[0];
                dst[[y, x, 1]] = px[1];
                dst[[y, x, 2]] = px[2];
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::processing::transforms::{FnTransform, GrayscaleAverage, Identity};

    fn gradient(height: usize, width: usize) -> Array3<u8> {
        Array3::from_shape_fn((height, width, 3), |(y, x, c)| {
            (y * 31 + x * 7 + c * 3) as u8
        })
    }

    #[test]
    fn axis_spans_truncate_drops_remainder() {
        assert_eq!(axis_spans(10, 3, CoveragePolicy::Truncate), vec![(0, 3), (3, 3), (6, 3)]);
        assert_eq!(axis_spans(9, 3, CoveragePolicy::Truncate), vec![(0, 3), (3, 3), (6, 3)]);
    }

    #[test]
    fn axis_spans_clip_keeps_remainder() {
        assert_eq!(
            axis_spans(10, 3, CoveragePolicy::Clip),
            vec![(0, 3), (3, 3), (6, 3), (9, 1)]
        );
        assert_eq!(axis_spans(9, 3, CoveragePolicy::Clip), vec![(0, 3), (3, 3), (6, 3)]);
    }

    #[test]
    fn grid_dims_floor() {
        assert_eq!(grid_dims(10, 7, KernelSize::new(3, 2)), (3, 3));
    }

    #[test]
    fn identity_is_a_no_op() {
        let mut raster = gradient(6, 8);
        let original = raster.clone();
        process_tiles(&mut raster, &Identity, KernelSize::square(2), CoveragePolicy::Truncate)
            .unwrap();
        assert_eq!(raster, original);
    }

    #[test]
    fn zero_kernel_rejected() {
        let mut raster = gradient(4, 4);
        let err = process_tiles(&mut raster, &Identity, KernelSize::new(2, 0), CoveragePolicy::Truncate)
            .unwrap_err();
        assert!(matches!(err, Error::ZeroKernel { .. }));
    }

    #[test]
    fn truncate_leaves_edge_remainders_untouched() {
        // 5x5 with a 2x2 kernel: the last row and column stay as-is.
        let mut raster = gradient(5, 5);
        let original = raster.clone();
        process_tiles(
            &mut raster,
            &GrayscaleAverage,
            KernelSize::square(2),
            CoveragePolicy::Truncate,
        )
        .unwrap();

        for x in 0..5 {
            assert_eq!(raster.slice(s![4, x, ..]), original.slice(s![4, x, ..]));
        }
        for y in 0..5 {
            assert_eq!(raster.slice(s![y, 4, ..]), original.slice(s![y, 4, ..]));
        }
        // Interior pixels were transformed.
        let px: ndarray::ArrayView1<u8> = raster.slice(s![0, 0, ..]);
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
    }

    #[test]
    fn clip_processes_edge_remainders_at_reduced_size() {
        let mut raster = gradient(5, 5);
        let mut seen_sizes = std::sync::Mutex::new(Vec::new());
        let recorder = FnTransform(|pixels: &[Rgb8], size: KernelSize| -> Result<Vec<Rgb8>> {
            seen_sizes.lock().unwrap().push((size.width, size.height));
            assert_eq!(pixels.len(), size.pixels());
            Ok(pixels.to_vec())
        });
        process_tiles(&mut raster, &recorder, KernelSize::square(2), CoveragePolicy::Clip).unwrap();

        let sizes = seen_sizes.get_mut().unwrap();
        assert_eq!(sizes.len(), 9);
        assert!(sizes.contains(&(2, 2)));
        assert!(sizes.contains(&(1, 2)));
        assert!(sizes.contains(&(2, 1)));
        assert!(sizes.contains(&(1, 1)));
    }

    #[test]
    fn block_average_colors_each_quadrant_uniformly() {
        // 4x4 image, 2x2 kernel, transform = block average.
        let mut raster = gradient(4, 4);
        let original = raster.clone();
        let average = FnTransform(|pixels: &[Rgb8], _size: KernelSize| -> Result<Vec<Rgb8>> {
            let n = pixels.len() as u32;
            let mut sum = [0u32; 3];
            for px in pixels {
                for c in 0..3 {
                    sum[c] += px[c] as u32;
                }
            }
            let avg = [
                (sum[0] / n) as u8,
                (sum[1] / n) as u8,
                (sum[2] / n) as u8,
            ];
            Ok(vec![avg; pixels.len()])
        });
        process_tiles(&mut raster, &average, KernelSize::square(2), CoveragePolicy::Truncate)
            .unwrap();

        for by in 0..2 {
            for bx in 0..2 {
                let (y0, x0) = (by * 2, bx * 2);
                for c in 0..3 {
                    let expected: u32 = original
                        .slice(s![y0..y0 + 2, x0..x0 + 2, c])
                        .iter()
                        .map(|&v| v as u32)
                        .sum::<u32>()
                        / 4;
                    for y in y0..y0 + 2 {
                        for x in x0..x0 + 2 {
                            assert_eq!(raster[[y, x, c]] as u32, expected);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn wrong_arity_aborts_the_run() {
        let mut raster = gradient(4, 4);
        let dropping = FnTransform(|pixels: &[Rgb8], _size: KernelSize| -> Result<Vec<Rgb8>> {
            Ok(pixels[1..].to_vec())
        });
        let err = process_tiles(
            &mut raster,
            &dropping,
            KernelSize::square(2),
            CoveragePolicy::Truncate,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::TransformArity { expected: 4, actual: 3 }
        ));
    }
}
