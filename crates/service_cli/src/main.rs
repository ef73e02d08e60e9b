//! prng CLI - Command Line Access to Deterministic Generators
//!
//! This is the operational entry point for the `prng_core` library.
//!
//! # Commands
//!
//! - `prng sequence` - Print raw generator output
//! - `prng range --min <a> --max <b>` - Sample a closed interval
//! - `prng bytes --len <n>` - Hex dump of generated bytes
//! - `prng normal` - Check the normal approximation against the 68-95-99.7 rule
//!
//! # Configuration
//!
//! Settings come from `prng.toml` (or `--config`), then `PRNG_*` environment
//! variables, then flags. Without a seed, the system clock seeds the run.

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use crate::config::{build_config, CliArgs, GeneratorKind, OutputFormat};
pub use error::{CliError, Result};

/// Deterministic PRNG CLI
#[derive(Parser)]
#[command(name = "prng")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Generator to use
    #[arg(short, long, global = true, value_enum)]
    generator: Option<GeneratorKind>,

    /// Fixed seed (defaults to the current Unix time)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// PCG sequence selector
    #[arg(long, global = true)]
    stream: Option<u64>,

    /// Output format for raw words
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print raw generator output
    Sequence {
        /// Number of outputs
        #[arg(short = 'n', long, default_value = "16")]
        count: usize,
    },

    /// Sample values from a closed interval
    Range {
        /// Lower bound (inclusive)
        #[arg(long, allow_hyphen_values = true)]
        min: i32,

        /// Upper bound (inclusive)
        #[arg(long, allow_hyphen_values = true)]
        max: i32,

        /// Number of samples
        #[arg(short = 'n', long, default_value = "16")]
        count: usize,
    },

    /// Fill a byte buffer and print a hex dump
    Bytes {
        /// Number of bytes to generate
        #[arg(short, long)]
        len: usize,

        /// Leading zero bytes left untouched
        #[arg(short, long, default_value = "0")]
        offset: usize,
    },

    /// Check the normal approximation
    Normal {
        /// Lower bound (inclusive)
        #[arg(long, default_value = "-120", allow_hyphen_values = true)]
        min: i32,

        /// Upper bound (inclusive)
        #[arg(long, default_value = "120", allow_hyphen_values = true)]
        max: i32,

        /// Uniform draws averaged per sample
        #[arg(short, long, default_value = "20")]
        trials: u32,

        /// Number of samples
        #[arg(short = 'n', long, default_value = "61000")]
        samples: u32,
    },
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = CliArgs {
        generator: cli.generator,
        seed: cli.seed,
        stream: cli.stream,
        format: cli.format,
        log_level: if cli.verbose {
            Some("debug".to_string())
        } else {
            cli.log_level
        },
    };
    let config = build_config(cli.config.as_deref(), &overrides)?;

    init_tracing(config.log_level.as_filter_str());
    info!("prng CLI v{}", env!("CARGO_PKG_VERSION"));
    debug!(?config, "Configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Sequence { count } => commands::sequence::run(&config, count, &mut out),
        Commands::Range { min, max, count } => {
            commands::range::run(&config, min, max, count, &mut out)
        }
        Commands::Bytes { len, offset } => commands::bytes::run(&config, len, offset, &mut out),
        Commands::Normal {
            min,
            max,
            trials,
            samples,
        } => commands::normal::run(&config, min, max, trials, samples, &mut out),
    }
}
