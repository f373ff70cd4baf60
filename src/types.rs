//! Shared types and enums used across KERNELIZE.
//! Includes `KernelSize`, `TransformKind`, `DitherMatrix`, `CoveragePolicy`,
//! the `OutputFormat` enum, and the `Rgb8` pixel alias.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One RGB pixel, 8 bits per channel.
pub type Rgb8 = [u8; 3];

/// Kernel (block) dimensions in pixels.
///
/// Also used to describe the actual dimensions of an extracted block, which
/// match the configured kernel except for clipped edge blocks.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct KernelSize {
    pub width: usize,
    pub height: usize,
}

impl KernelSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn square(side: usize) -> Self {
        Self::new(side, side)
    }

    /// Pixel count of one block.
    pub fn pixels(&self) -> usize {
        self.width * self.height
    }
}

impl std::fmt::Display for KernelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Block transform policy selected at the configuration surface.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum TransformKind {
    Grayscale,
    Dither,
}

impl std::fmt::Display for TransformKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformKind::Grayscale => write!(f, "Grayscale"),
            TransformKind::Dither => write!(f, "Dither"),
        }
    }
}

/// Threshold matrix preset for the ordered-dither transform.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum DitherMatrix {
    Bayer2,
    Bayer4,
    Bayer8,
}

impl std::fmt::Display for DitherMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DitherMatrix::Bayer2 => write!(f, "Bayer2"),
            DitherMatrix::Bayer4 => write!(f, "Bayer4"),
            DitherMatrix::Bayer8 => write!(f, "Bayer8"),
        }
    }
}

/// Edge handling when kernel or band boundaries do not divide the image.
///
/// `Truncate` reproduces the classic behavior: pixels outside the full-block
/// grid keep their original values, and rows beyond the last full band are
/// dropped from the banded output. `Clip` processes the remainders as blocks
/// and bands of reduced size, preserving the full image geometry.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum CoveragePolicy {
    Truncate,
    Clip,
}

impl std::fmt::Display for CoveragePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoveragePolicy::Truncate => write!(f, "Truncate"),
            CoveragePolicy::Clip => write!(f, "Clip"),
        }
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, ValueEnum, serde::Serialize, serde::Deserialize,
)]
pub enum OutputFormat {
    PNG,
    JPEG, // Lossy, preview only
}
