//! Bytes command implementation
//!
//! Fills `len` bytes at `offset` of a zeroed buffer and prints a hex dump of
//! the whole buffer, so untouched leading bytes stay visible.

use std::io::Write;

use tracing::info;

use super::Generator;
use crate::config::CliConfig;
use crate::{CliError, Result};

const BYTES_PER_ROW: usize = 16;

/// Run the bytes command
pub fn run(config: &CliConfig, len: usize, offset: usize, out: &mut impl Write) -> Result<()> {
    info!(len, offset, "Filling byte buffer");

    let Generator::Pcg(mut rng) = Generator::from_config(config) else {
        return Err(CliError::InvalidArgument(
            "bytes requires the pcg generator".to_string(),
        ));
    };

    let total = offset.checked_add(len).ok_or_else(|| {
        CliError::InvalidArgument(format!("offset {} + len {} overflows", offset, len))
    })?;
    let mut buffer = vec![0u8; total];
    rng.bytes(&mut buffer[offset..]);

    for (row, chunk) in buffer.chunks(BYTES_PER_ROW).enumerate() {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
        writeln!(out, "{:08x}: {}", row * BYTES_PER_ROW, hex.join(" "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_config;
    use crate::config::GeneratorKind;

    #[test]
    fn test_offset_fill_dump() {
        let mut config = test_config(GeneratorKind::Pcg, 1538);
        config.stream = 877;
        let mut out = Vec::new();
        run(&config, 3, 2, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "00000000: 00 00 f3 79 8f\n");
    }

    #[test]
    fn test_rows_wrap_at_sixteen() {
        let config = test_config(GeneratorKind::Pcg, 1);
        let mut out = Vec::new();
        run(&config, 20, 0, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("00000010: "));
    }

    #[test]
    fn test_legacy_generator_rejected() {
        let config = test_config(GeneratorKind::Legacy, 1);
        let mut out = Vec::new();
        assert!(matches!(
            run(&config, 4, 0, &mut out),
            Err(CliError::InvalidArgument(_))
        ));
    }
}
