use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid kernel size: {value}. Must be WxH or a single positive integer")]
    InvalidKernelSize { value: String },

    #[error("Kernel dimensions must be greater than 0, got: {value}")]
    ZeroKernelSize { value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
