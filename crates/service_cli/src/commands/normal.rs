//! Normal command implementation
//!
//! Samples the Irwin–Hall approximation and reports how much of the mass
//! falls within 1.0 to 3.0 standard deviations of the mean, next to the
//! exact normal coverage.

use std::io::Write;

use prng_core::NormalApprox;
use tracing::{info, warn};

use super::Generator;
use crate::config::CliConfig;
use crate::{CliError, Result};

/// Two-sided normal coverage at 1.0, 1.5, 2.0, 2.5 and 3.0 deviations.
pub const PREDICTION_INTERVALS: [f64; 5] = [0.68269, 0.86639, 0.95450, 0.98758, 0.99730];

/// Coverage differences above this are flagged.
pub const TOLERANCE: f64 = 0.02;

/// Observed coverage of one deviation interval.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalRow {
    pub deviations: f64,
    pub lower: i32,
    pub upper: i32,
    pub predicted: f64,
    pub actual: f64,
}

impl IntervalRow {
    pub fn within_tolerance(&self) -> bool {
        (self.actual - self.predicted).abs() < TOLERANCE
    }
}

/// Sample `dist` `samples` times and tabulate interval coverage.
///
/// Intervals are half-open, `[lower, upper)`, with bounds rounded from
/// `mean ± k·σ` and clamped to the distribution's support. Samples are
/// counted straight into the intervals, so memory does not depend on the
/// width of `[min, max]`.
pub fn interval_table(
    generator: &mut Generator,
    dist: &NormalApprox,
    samples: u32,
) -> Result<Vec<IntervalRow>> {
    if samples == 0 {
        return Err(CliError::InvalidArgument("samples must be at least 1".to_string()));
    }

    let (min, max) = (dist.min(), dist.max());
    let mean = dist.mean();
    let stddev = dist.std_dev();
    let bounds: Vec<(f64, i32, i32)> = (0..PREDICTION_INTERVALS.len())
        .map(|i| {
            let deviations = i as f64 / 2.0 + 1.0;
            let lower = ((mean - deviations * stddev).round() as i32).max(min);
            let upper = ((mean + deviations * stddev).round() as i32).min(max);
            (deviations, lower, upper)
        })
        .collect();

    let mut hits = [0u32; PREDICTION_INTERVALS.len()];
    for _ in 0..samples {
        let value = generator.normal(dist)?;
        for (count, &(_, lower, upper)) in hits.iter_mut().zip(&bounds) {
            if (lower..upper).contains(&value) {
                *count += 1;
            }
        }
    }

    let rows = bounds
        .into_iter()
        .zip(hits)
        .zip(PREDICTION_INTERVALS)
        .map(|(((deviations, lower, upper), accum), predicted)| IntervalRow {
            deviations,
            lower,
            upper,
            predicted,
            actual: f64::from(accum) / f64::from(samples),
        })
        .collect();

    Ok(rows)
}

/// Run the normal command
pub fn run(
    config: &CliConfig,
    min: i32,
    max: i32,
    trials: u32,
    samples: u32,
    out: &mut impl Write,
) -> Result<()> {
    let dist = NormalApprox::new(min, max, trials)?;
    info!(min, max, trials, samples, stddev = dist.std_dev(), "Checking normal approximation");

    let mut generator = Generator::from_config(config);
    let rows = interval_table(&mut generator, &dist, samples)?;

    writeln!(out, "sigma  interval          predicted  actual   ok")?;
    for row in &rows {
        if !row.within_tolerance() {
            warn!(deviations = row.deviations, actual = row.actual, "Coverage outside tolerance");
        }
        writeln!(
            out,
            "{:<5.1}  [{:>6}, {:>6})  {:>9.5}  {:>7.5}  {}",
            row.deviations,
            row.lower,
            row.upper,
            row.predicted,
            row.actual,
            if row.within_tolerance() { "yes" } else { "no" }
        )?;
    }
    Ok(())
}
