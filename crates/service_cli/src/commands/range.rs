//! Range command implementation
//!
//! Prints `count` values drawn from `[min, max]`.

use std::io::Write;

use tracing::info;

use super::Generator;
use crate::config::CliConfig;
use crate::Result;

/// Run the range command
pub fn run(
    config: &CliConfig,
    min: i32,
    max: i32,
    count: usize,
    out: &mut impl Write,
) -> Result<()> {
    info!(min, max, count, "Sampling range");

    let mut generator = Generator::from_config(config);
    for _ in 0..count {
        writeln!(out, "{}", generator.range(min, max)?)?;
    }
    Ok(())
}
