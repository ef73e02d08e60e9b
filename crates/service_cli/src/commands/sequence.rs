//! Sequence command implementation
//!
//! Prints the first `count` raw outputs of the configured generator.

use std::io::Write;

use tracing::info;

use super::Generator;
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Run the sequence command
pub fn run(config: &CliConfig, count: usize, out: &mut impl Write) -> Result<()> {
    info!(count, format = ?config.format, "Dumping raw sequence");

    let mut generator = Generator::from_config(config);
    let width = generator.hex_width();
    for _ in 0..count {
        let value = generator.next();
        match config.format {
            OutputFormat::Hex => writeln!(out, "0x{:0width$x}", value, width = width)?,
            OutputFormat::Dec => writeln!(out, "{}", value)?,
        }
    }
    Ok(())
}
