use std::path::Path;

use ndarray::Array3;
use tracing::info;

use crate::error::Result;

/// Decodes an image file into an RGB raster of shape `(rows, cols, 3)`.
/// Any format the codec recognizes is accepted; non-RGB inputs are converted.
pub fn load_image(path: &Path) -> Result<Array3<u8>> {
    let rgb = image::open(path)?.to_rgb8();
    let (width, height) = rgb.dimensions();
    info!("Loaded {:?}: {}x{}", path, width, height);

    let raster = Array3::from_shape_vec((height as usize, width as usize, 3), rgb.into_raw())?;
    Ok(raster)
}
