//! CLI error types

use prng_core::PrngError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `prng` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Generator error: {0}")]
    Prng(#[from] PrngError),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
