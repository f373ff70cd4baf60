#![doc = r#"
KERNELIZE — a parallel kernel-tiling image processor.

This crate partitions a raster image into a grid of fixed-size blocks,
applies a caller-supplied per-block transform to each block, and can fan the
work out over concurrent horizontal bands that are reassembled into a single
output image. It powers the KERNELIZE CLI and can be embedded in your own
Rust applications.

The shipped transforms are deliberately simple policies: grayscale averaging
(the baseline) and ordered dithering against a Bayer threshold matrix. The
engine itself is transform-agnostic; anything implementing `BlockTransform`
can be plugged in, including ad-hoc closures via `FnTransform`.

Stability
---------
The public library API is experimental in initial releases. Breaking changes
can occur.

Add dependency
--------------
```toml
[dependencies]
kernelize = "0.1"
```

Quick start: process an image to a file
---------------------------------------
```rust,no_run
use std::path::Path;
use kernelize::{
    process_image_to_path,
    CoveragePolicy, DitherMatrix, KernelSize, OutputFormat, ProcessingParams, TransformKind,
};

fn main() -> kernelize::Result<()> {
    let params = ProcessingParams {
        kernel_size: KernelSize::square(2),
        bands: 4,
        transform: TransformKind::Dither,
        matrix: DitherMatrix::Bayer4,
        coverage: CoveragePolicy::Clip,
        format: OutputFormat::PNG,
    };

    process_image_to_path(
        Path::new("/data/photo.jpg"),
        Path::new("/out/dithered.png"),
        &params,
    )
}
```

Process in-memory rasters
-------------------------
```rust
use ndarray::Array3;
use kernelize::{
    process_bands, process_tiles,
    CoveragePolicy, GrayscaleAverage, KernelSize,
};

fn run(raster: &Array3<u8>) -> kernelize::Result<Array3<u8>> {
    // Serial, in place:
    let mut serial = raster.clone();
    process_tiles(
        &mut serial,
        &GrayscaleAverage,
        KernelSize::square(2),
        CoveragePolicy::Truncate,
    )?;

    // Banded, four concurrent workers:
    process_bands(
        raster,
        &GrayscaleAverage,
        KernelSize::square(2),
        4,
        CoveragePolicy::Truncate,
    )
}
```

Custom transforms
-----------------
```rust
use kernelize::{FnTransform, KernelSize, Rgb8};

// Invert every pixel of each block.
let invert = FnTransform(|pixels: &[Rgb8], _size: KernelSize| -> kernelize::Result<Vec<Rgb8>> {
    Ok(pixels.iter().map(|p| [255 - p[0], 255 - p[1], 255 - p[2]]).collect())
});
```

A transform must return exactly as many pixels as it was given; the engine
aborts the run with a `TransformArity` error otherwise. If any band worker
fails, the banded call fails as a whole; no partially processed image is
ever returned.

Coverage policy
---------------
When the kernel grid or the band partition does not divide the image
dimensions, `CoveragePolicy::Truncate` reproduces the classic behavior
(edge remainders untouched, trailing rows dropped from the banded output),
while `CoveragePolicy::Clip` processes the remainders at reduced size and
preserves the full geometry.

Error handling
--------------
All public functions return `kernelize::Result<T>`; match on
`kernelize::Error` to handle specific cases, e.g. codec or worker errors.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — the tile engine, band coordinator, transforms, and parameters.
- [`io`] — image reading and PNG/JPEG writers.
- [`types`] — enums and core types (e.g. `KernelSize`, `CoveragePolicy`).
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::ProcessingParams;
pub use error::{Error, Result};
pub use types::{
    CoveragePolicy, DitherMatrix, KernelSize, OutputFormat, Rgb8, TransformKind,
};

// Processing engine
pub use core::processing::bands::process_bands;
pub use core::processing::tile::{grid_dims, process_tiles};
pub use core::processing::transforms::{
    BlockTransform, FnTransform, GrayscaleAverage, Identity, OrderedDither, ThresholdMatrix,
};

// I/O
pub use io::{load_image, save_raster};

// High-level API re-exports
pub use api::{load_params, process_image_to_buffer, process_image_to_path, transform_for};
