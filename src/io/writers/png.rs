use std::path::Path;

use image::{ImageBuffer, ImageFormat, Rgb};

use crate::error::{Error, Result};

pub fn write_rgb_png(output: &Path, cols: usize, rows: usize, rgb_data: &[u8]) -> Result<()> {
    let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_raw(cols as u32, rows as u32, rgb_data.to_vec()).ok_or_else(|| {
            Error::InvalidArgument {
                arg: "rgb_data",
                value: format!("{} bytes for {}x{} RGB", rgb_data.len(), cols, rows),
            }
        })?;
    buffer.save_with_format(output, ImageFormat::Png)?;
    Ok(())
}
