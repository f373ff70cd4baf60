//! Output writers, one module per container format.
pub mod jpeg;
pub mod png;

use std::path::Path;

use ndarray::Array3;
use tracing::info;

use crate::error::Result;
use crate::types::OutputFormat;

/// Writes a raster of shape `(rows, cols, 3)` to disk in the requested format.
pub fn save_raster(raster: &Array3<u8>, output: &Path, format: OutputFormat) -> Result<()> {
    let (rows, cols, _) = raster.dim();
    let data: Vec<u8> = match raster.as_slice() {
        Some(slice) => slice.to_vec(),
        None => raster.iter().copied().collect(),
    };

    info!("Saving {}x{} raster to {:?}", cols, rows, output);
    match format {
        OutputFormat::PNG => png::write_rgb_png(output, cols, rows, &data),
        OutputFormat::JPEG => jpeg::write_rgb_jpeg(output, cols, rows, &data),
    }
}
