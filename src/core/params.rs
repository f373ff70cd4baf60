use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{CoveragePolicy, DitherMatrix, KernelSize, OutputFormat, TransformKind};

/// Processing parameters suitable for config files and CLI presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingParams {
    pub kernel_size: KernelSize,
    /// Number of concurrent horizontal bands
    pub bands: usize,
    pub transform: TransformKind,
    /// Threshold matrix preset, consulted only by the dither transform
    pub matrix: DitherMatrix,
    /// Edge handling for remainders outside the block grid / band partition
    pub coverage: CoveragePolicy,
    pub format: OutputFormat,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            kernel_size: KernelSize::square(2),
            bands: 4,
            transform: TransformKind::Grayscale,
            matrix: DitherMatrix::Bayer2,
            coverage: CoveragePolicy::Truncate,
            format: OutputFormat::PNG,
        }
    }
}

impl ProcessingParams {
    /// Rejects parameter combinations that can never process anything.
    /// Image-dependent checks (band count vs. height) happen at dispatch.
    pub fn validate(&self) -> Result<()> {
        if self.kernel_size.width == 0 || self.kernel_size.height == 0 {
            return Err(Error::ZeroKernel {
                width: self.kernel_size.width,
                height: self.kernel_size.height,
            });
        }
        if self.bands == 0 {
            return Err(Error::ZeroBands);
        }
        Ok(())
    }
}
