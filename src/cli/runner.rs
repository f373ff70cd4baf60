use std::time::Instant;

use tracing::info;

use kernelize::api::{load_params, process_image_to_path};
use kernelize::core::params::ProcessingParams;
use kernelize::types::KernelSize;

use super::args::CliArgs;
use super::errors::AppError;

/// Parses the `--kernel-size` string: `WxH`, or a single integer for square
/// kernels.
fn parse_kernel_size(size: &str) -> Result<KernelSize, AppError> {
    let (w, h) = match size.split_once(['x', 'X']) {
        Some((w, h)) => (w, h),
        None => (size, size),
    };

    let invalid = || AppError::InvalidKernelSize {
        value: size.to_string(),
    };
    let width = w.trim().parse::<usize>().map_err(|_| invalid())?;
    let height = h.trim().parse::<usize>().map_err(|_| invalid())?;

    if width == 0 || height == 0 {
        return Err(AppError::ZeroKernelSize {
            value: size.to_string(),
        });
    }

    Ok(KernelSize::new(width, height))
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = match args.params {
        Some(path) => load_params(&path)?,
        None => {
            let bands = if args.bands == 0 {
                rayon::current_num_threads()
            } else {
                args.bands
            };
            ProcessingParams {
                kernel_size: parse_kernel_size(&args.kernel_size)?,
                bands,
                transform: args.transform,
                matrix: args.matrix,
                coverage: args.coverage,
                format: args.format,
            }
        }
    };

    info!("Processing: {:?} -> {:?}", args.input, args.output);
    info!(
        "Parameters: kernel={} bands={} transform={} coverage={}",
        params.kernel_size, params.bands, params.transform, params.coverage
    );

    let start = Instant::now();
    process_image_to_path(&args.input, &args.output, &params)?;
    info!("Completed in {:.3}s", start.elapsed().as_secs_f64());

    Ok(())
}
