//! High-level, ergonomic library API: run an image file through the
//! kernel-tiling engine to an in-memory raster or an output file, and load
//! processing presets from JSON. Prefer these entrypoints over the low-level
//! processing modules when embedding KERNELIZE.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ndarray::Array3;
use tracing::info;

use crate::core::params::ProcessingParams;
use crate::core::processing::bands::process_bands;
use crate::core::processing::transforms::{BlockTransform, GrayscaleAverage, OrderedDither};
use crate::error::Result;
use crate::io::{load_image, save_raster};
use crate::types::TransformKind;

/// Builds the configured block transform policy.
pub fn transform_for(params: &ProcessingParams) -> Box<dyn BlockTransform> {
    match params.transform {
        TransformKind::Grayscale => Box::new(GrayscaleAverage),
        TransformKind::Dither => Box::new(OrderedDither::preset(params.matrix)),
    }
}

/// Loads and validates processing parameters from a JSON preset file.
pub fn load_params(path: &Path) -> Result<ProcessingParams> {
    let file = File::open(path)?;
    let params: ProcessingParams = serde_json::from_reader(BufReader::new(file))?;
    params.validate()?;
    Ok(params)
}

/// Processes an image file in memory and returns the resulting raster.
pub fn process_image_to_buffer(input: &Path, params: &ProcessingParams) -> Result<Array3<u8>> {
    params.validate()?;
    let raster = load_image(input)?;
    let transform = transform_for(params);
    process_bands(
        &raster,
        transform.as_ref(),
        params.kernel_size,
        params.bands,
        params.coverage,
    )
}

/// Processes an image file and writes the result to `output`.
pub fn process_image_to_path(input: &Path, output: &Path, params: &ProcessingParams) -> Result<()> {
    let processed = process_image_to_buffer(input, params)?;
    let (rows, cols, _) = processed.dim();
    info!("Processed raster: {}x{}", cols, rows);
    save_raster(&processed, output, params.format)
}
