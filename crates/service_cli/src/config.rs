//! CLI configuration management
//!
//! Layers built-in defaults, an optional TOML file and `PRNG_*` environment
//! variables through the `config` crate. Command-line flags are merged last.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Config file
//! 4. Default values

use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use config::{Config, Environment, File};
use prng_core::PcgRandom;
use serde::Deserialize;
use thiserror::Error;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_NAME: &str = "prng";

/// Prefix for environment overrides, e.g. `PRNG_SEED=42`.
pub const ENV_PREFIX: &str = "PRNG";

/// Failures while assembling a [`CliConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown log level '{0}': expected trace, debug, info, warn or error")]
    InvalidLogLevel(String),

    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// Verbosity of the diagnostics `prng` writes to stderr.
///
/// Read case-insensitively from `log_level` in `prng.toml`,
/// `PRNG_LOG_LEVEL` or `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Directive handed to `EnvFilter` when `RUST_LOG` is unset.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_filter_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::InvalidLogLevel(s.to_string()))
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LogLevel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Which generator drives the command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// PCG-XSH-RR, 32-bit output
    #[default]
    Pcg,
    /// Legacy LCG, 15-bit output
    Legacy,
}

/// How raw words are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Hex,
    Dec,
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Generator to use
    pub generator: GeneratorKind,
    /// Fixed seed; the system clock is used when absent
    pub seed: Option<u64>,
    /// PCG sequence selector
    pub stream: u64,
    /// Output format for raw words
    pub format: OutputFormat,
    /// Log level
    pub log_level: LogLevel,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorKind::Pcg,
            seed: None,
            stream: PcgRandom::DEFAULT_SEQUENCE,
            format: OutputFormat::Hex,
            log_level: LogLevel::Info,
        }
    }
}

impl CliConfig {
    /// Load configuration from file and environment.
    ///
    /// An explicit `path` must exist; otherwise `prng.toml` (or any format
    /// the `config` crate recognises under that name) is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let config = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Parse configuration from TOML text alone.
    #[cfg(test)]
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(generator) = cli.generator {
            self.generator = generator;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(stream) = cli.stream {
            self.stream = stream;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        Ok(())
    }
}

/// Flag overrides collected from the command line
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub generator: Option<GeneratorKind>,
    pub seed: Option<u64>,
    pub stream: Option<u64>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
}

/// Build configuration from all sources
pub fn build_config(path: Option<&Path>, cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    let mut config = CliConfig::load(path)?;
    config.merge_with_cli(cli)?;
    Ok(config)
}
