//! Shipped block transforms and the `BlockTransform` trait they implement.
//!
//! A transform maps one block's pixel sequence to a new sequence of the same
//! length and must not depend on any other block, which is what makes the
//! band fan-out safe. `GrayscaleAverage` is the baseline policy;
//! `OrderedDither` is the threshold-matrix alternative.
use crate::error::Result;
use crate::types::{DitherMatrix, KernelSize, Rgb8};

pub const BLACK: Rgb8 = [0, 0, 0];
pub const WHITE: Rgb8 = [255, 255, 255];

/// Per-block pixel policy invoked by the tile engine.
pub trait BlockTransform: Sync {
    /// Maps a block's pixels, row-major, to a new sequence of the same length.
    ///
    /// `size` carries the actual block dimensions, which differ from the
    /// configured kernel size only for clipped edge blocks.
    fn apply(&self, pixels: &[Rgb8], size: KernelSize) -> Result<Vec<Rgb8>>;
}

/// Adapter so ad-hoc closures can serve as transforms.
pub struct FnTransform<F>(pub F);

impl<F> BlockTransform for FnTransform<F>
where
    F: Fn(&[Rgb8], KernelSize) -> Result<Vec<Rgb8>> + Sync,
{
    fn apply(&self, pixels: &[Rgb8], size: KernelSize) -> Result<Vec<Rgb8>> {
        (self.0)(pixels, size)
    }
}

/// Passthrough transform.
pub struct Identity;

impl BlockTransform for Identity {
    fn apply(&self, pixels: &[Rgb8], _size: KernelSize) -> Result<Vec<Rgb8>> {
        Ok(pixels.to_vec())
    }
}

fn grayscale(px: &Rgb8) -> u8 {
    ((px[0] as u16 + px[1] as u16 + px[2] as u16) / 3) as u8
}

/// Baseline policy: every pixel becomes its own channel average, replicated
/// across all three channels.
pub struct GrayscaleAverage;

impl BlockTransform for GrayscaleAverage {
    fn apply(&self, pixels: &[Rgb8], _size: KernelSize) -> Result<Vec<Rgb8>> {
        Ok(pixels
            .iter()
            .map(|px| {
                let v = grayscale(px);
                [v, v, v]
            })
            .collect())
    }
}

/// Bayer ordering ranks. Each rank is scaled into a 0-255 threshold
/// when the matrix is built.
const BAYER_2X2: [u8; 4] = [0, 2, 3, 1];
const BAYER_4X4: [u8; 16] = [0, 8, 2, 10, 12, 4, 14, 6, 3, 11, 1, 9, 15, 7, 13, 5];
const BAYER_8X8: [u8; 64] = [
    0, 32, 8, 40, 2, 34, 10, 42, //
    48, 16, 56, 24, 50, 18, 58, 26, //
    12, 44, 4, 36, 14, 46, 6, 38, //
    60, 28, 52, 20, 62, 30, 54, 22, //
    3, 35, 11, 43, 1, 33, 9, 41, //
    51, 19, 59, 27, 49, 17, 57, 25, //
    15, 47, 7, 39, 13, 45, 5, 37, //
    63, 31, 55, 23, 61, 29, 53, 21, //
];

/// Threshold matrix tiled across each block by the ordered-dither policy.
#[derive(Debug, Clone)]
pub struct ThresholdMatrix {
    width: usize,
    height: usize,
    thresholds: Vec<u8>,
}

impl ThresholdMatrix {
    /// Scales ordering ranks `[0, n)` into thresholds on the 0-255 scale.
    fn from_ranks(ranks: &[u8], width: usize, height: usize) -> Self {
        let n = ranks.len() as u16;
        let thresholds = ranks.iter().map(|&r| ((r as u16 * 255) / n) as u8).collect();
        Self {
            width,
            height,
            thresholds,
        }
    }

    pub fn preset(matrix: DitherMatrix) -> Self {
        match matrix {
            DitherMatrix::Bayer2 => Self::from_ranks(&BAYER_2X2, 2, 2),
            DitherMatrix::Bayer4 => Self::from_ranks(&BAYER_4X4, 4, 4),
            DitherMatrix::Bayer8 => Self::from_ranks(&BAYER_8X8, 8, 8),
        }
    }

    /// Threshold at block-local coordinates, tiling the matrix.
    fn threshold_at(&self, x: usize, y: usize) -> u8 {
        self.thresholds[(y % self.height) * self.width + x % self.width]
    }
}

/// Ordered-dither policy: a pixel turns white when its grayscale value
/// exceeds the matrix threshold at its block-local position, black otherwise.
pub struct OrderedDither {
    matrix: ThresholdMatrix,
}

impl OrderedDither {
    pub fn new(matrix: ThresholdMatrix) -> Self {
        Self { matrix }
    }

    pub fn preset(matrix: DitherMatrix) -> Self {
        Self::new(ThresholdMatrix::preset(matrix))
    }
}

impl BlockTransform for OrderedDither {
    fn apply(&self, pixels: &[Rgb8], size: KernelSize) -> Result<Vec<Rgb8>> {
        Ok(pixels
            .iter()
            .enumerate()
            .map(|(i, px)| {
                let (x, y) = (i % size.width, i / size.width);
                if grayscale(px) > self.matrix.threshold_at(x, y) {
                    WHITE
                } else {
                    BLACK
                }
            })
            .collect())
    }
}
