use clap::Parser;
use std::path::PathBuf;

use kernelize::types::OutputFormat;
use kernelize::{CoveragePolicy, DitherMatrix, TransformKind};

#[derive(Parser)]
#[command(name = "kernelize", version, about = "KERNELIZE CLI")]
pub struct CliArgs {
    /// Input image file (any format the codec can decode)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output image file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output format (png or jpeg)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::PNG)]
    pub format: OutputFormat,

    /// Kernel size. Options:
    /// - Rectangular: WxH (e.g., 2x2, 4x2)
    /// - Square: any positive integer (e.g., 8)
    #[arg(long, default_value = "2x2")]
    pub kernel_size: String,

    /// Number of concurrent horizontal bands (0 = one band per CPU thread)
    #[arg(long, default_value_t = 0)]
    pub bands: usize,

    /// Block transform policy (grayscale or dither)
    #[arg(long, value_enum, default_value_t = TransformKind::Grayscale)]
    pub transform: TransformKind,

    /// Threshold matrix preset for the dither transform
    #[arg(long, value_enum, default_value_t = DitherMatrix::Bayer2)]
    pub matrix: DitherMatrix,

    /// Edge handling when the kernel or band partition does not divide the
    /// image (truncate drops the remainder, clip processes it at reduced size)
    #[arg(long, value_enum, default_value_t = CoveragePolicy::Truncate)]
    pub coverage: CoveragePolicy,

    /// JSON preset file with processing parameters (overrides the flags above)
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
