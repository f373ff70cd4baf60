//! Band fan-out coordinator.
//!
//! Splits a raster into horizontal bands, each owning a copy of its rows,
//! runs the tile engine on every band concurrently, and composites the
//! processed bands back into one raster in band order. Workers share nothing
//! but the transform; results are collected into one slot per band index and
//! read only after the join.
use ndarray::{Array3, s};
use rayon::prelude::*;
use tracing::debug;

use crate::core::processing::tile::process_tiles;
use crate::core::processing::transforms::BlockTransform;
use crate::error::{Error, Result};
use crate::types::{CoveragePolicy, KernelSize};

/// Row ranges `(start, rows)` assigned to each band. Bands are contiguous,
/// non-overlapping, and ordered. Under `Truncate` the trailing
/// `height % bands` rows belong to no band; under `Clip` the last band
/// absorbs them.
pub(crate) fn band_spans(height: usize, bands: usize, coverage: CoveragePolicy) -> Vec<(usize, usize)> {
    let band_h = height / bands;
    let mut spans: Vec<(usize, usize)> = (0..bands).map(|i| (i * band_h, band_h)).collect();
    if coverage == CoveragePolicy::Clip {
        if let Some(last) = spans.last_mut() {
            last.1 = height - last.0;
        }
    }
    spans
}

/// Processes `raster` as `bands` concurrent horizontal bands and returns the
/// reassembled result.
///
/// The output height is the sum of the band heights: the full image height
/// under `Clip`, `floor(height / bands) * bands` under `Truncate`. If any
/// band fails, the call fails as a whole and no image is returned; the first
/// error surfaces wrapped with its band index.
pub fn process_bands<T>(
    raster: &Array3<u8>,
    transform: &T,
    kernel: KernelSize,
    bands: usize,
    coverage: CoveragePolicy,
) -> Result<Array3<u8>>
where
    T: BlockTransform + ?Sized,
{
    if bands == 0 {
        return Err(Error::ZeroBands);
    }
    let (height, width, channels) = raster.dim();
    if height / bands == 0 {
        return Err(Error::EmptyBands { bands, height });
    }

    let spans = band_spans(height, bands, coverage);
    for (i, &(start, rows)) in spans.iter().enumerate() {
        debug!("band {}: rows {} - {}", i, start, start + rows);
    }

    // Each worker owns an exclusive copy of its band's rows.
    let snippets: Vec<Array3<u8>> = spans
        .iter()
        .map(|&(start, rows)| raster.slice(s![start..start + rows, .., ..]).to_owned())
        .collect();

    let processed: Vec<Array3<u8>> = snippets
        .into_par_iter()
        .enumerate()
        .map(|(band, mut snippet)| {
            process_tiles(&mut snippet, transform, kernel, coverage)
                .map_err(|e| Error::Worker {
                    band,
                    source: Box::new(e),
                })?;
            Ok(snippet)
        })
        .collect::<Result<Vec<_>>>()?;

    let out_height: usize = spans.iter().map(|&(_, rows)| rows).sum();
    let mut out = Array3::zeros((out_height, width, channels));
    for (&(start, rows), band) in spans.iter().zip(&processed) {
        out.slice_mut(s![start..start + rows, .., ..]).assign(band);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::processing::transforms::{FnTransform, GrayscaleAverage, Identity};
    use crate::types::Rgb8;

    fn gradient(height: usize, width: usize) -> Array3<u8> {
        Array3::from_shape_fn((height, width, 3), |(y, x, c)| {
            (y * 31 + x * 7 + c * 3) as u8
        })
    }

    #[test]
    fn band_spans_partition_in_order() {
        assert_eq!(
            band_spans(12, 3, CoveragePolicy::Truncate),
            vec![(0, 4), (4, 4), (8, 4)]
        );
    }

    #[test]
    fn band_spans_truncate_drops_trailing_rows() {
        assert_eq!(
            band_spans(10, 3, CoveragePolicy::Truncate),
            vec![(0, 3), (3, 3), (6, 3)]
        );
    }

    #[test]
    fn band_spans_clip_extends_last_band() {
        assert_eq!(
            band_spans(10, 3, CoveragePolicy::Clip),
            vec![(0, 3), (3, 3), (6, 4)]
        );
    }

    #[test]
    fn zero_bands_rejected() {
        let raster = gradient(8, 4);
        let err = process_bands(&raster, &Identity, KernelSize::square(2), 0, CoveragePolicy::Truncate)
            .unwrap_err();
        assert!(matches!(err, Error::ZeroBands));
    }

    #[test]
    fn more_bands_than_rows_rejected() {
        let raster = gradient(3, 4);
        let err = process_bands(&raster, &Identity, KernelSize::square(1), 5, CoveragePolicy::Truncate)
            .unwrap_err();
        assert!(matches!(err, Error::EmptyBands { bands: 5, height: 3 }));
    }

    #[test]
    fn truncate_drops_rows_no_band_covers() {
        // Height 10 over 3 bands: floor(10/3) * 3 = 9 output rows.
        let raster = gradient(10, 6);
        let out = process_bands(
            &raster,
            &Identity,
            KernelSize::square(1),
            3,
            CoveragePolicy::Truncate,
        )
        .unwrap();
        assert_eq!(out.dim(), (9, 6, 3));
        assert_eq!(out, raster.slice(s![0..9, .., ..]).to_owned());
    }

    #[test]
    fn clip_keeps_full_height() {
        let raster = gradient(10, 6);
        let out = process_bands(
            &raster,
            &Identity,
            KernelSize::square(1),
            3,
            CoveragePolicy::Clip,
        )
        .unwrap();
        assert_eq!(out.dim(), (10, 6, 3));
        assert_eq!(out, raster);
    }

    #[test]
    fn parallel_matches_serial() {
        // Band height 4 is divisible by the kernel height, so banding does
        // not change which rows fall inside the block grid.
        let raster = gradient(16, 12);
        let mut serial = raster.clone();
        process_tiles(
            &mut serial,
            &GrayscaleAverage,
            KernelSize::square(2),
            CoveragePolicy::Truncate,
        )
        .unwrap();

        let banded = process_bands(
            &raster,
            &GrayscaleAverage,
            KernelSize::square(2),
            4,
            CoveragePolicy::Truncate,
        )
        .unwrap();
        assert_eq!(banded, serial);
    }

    #[test]
    fn failing_worker_fails_the_whole_call() {
        let raster = gradient(8, 8);
        let poisoned = FnTransform(|pixels: &[Rgb8], _size: KernelSize| {
            if pixels.iter().any(|px| px[0] > 200) {
                return Err(Error::transform("bad block"));
            }
            Ok(pixels.to_vec())
        });
        let err = process_bands(&raster, &poisoned, KernelSize::square(2), 2, CoveragePolicy::Truncate)
            .unwrap_err();
        match err {
            Error::Worker { band, source } => {
                assert!(band < 2);
                assert!(matches!(*source, Error::Transform(_)));
            }
            other => panic!("expected Worker error, got {other}"),
        }
    }

    #[test]
    fn repeated_runs_are_deterministic() {
        let raster = gradient(64, 48);
        let bands = rayon::current_num_threads().max(2).min(64);
        let first = process_bands(
            &raster,
            &GrayscaleAverage,
            KernelSize::square(2),
            bands,
            CoveragePolicy::Clip,
        )
        .unwrap();
        for _ in 0..8 {
            let again = process_bands(
                &raster,
                &GrayscaleAverage,
                KernelSize::square(2),
                bands,
                CoveragePolicy::Clip,
            )
            .unwrap();
            assert_eq!(again, first);
        }
    }
}
