//! Calculator command implementation
//!
//! Runs one integration and prints the estimate, efficiency and error.

use std::io::{self, Write};

use cosim_core::mc::{cosine_solid, IntegrationResult, ANALYTICAL};
use tracing::info;

use crate::config::CosimConfig;
use crate::Result;

/// Run the calc command
pub fn run(config: &CosimConfig) -> Result<()> {
    info!(samples = config.samples, seed = config.seed, "Running calculator mode");

    let mut sampler = cosine_solid(config.sampler_config()?);
    let result = sampler.integrate(config.samples)?;

    info!(
        trials = result.trials,
        successes = result.successes,
        "Integration complete"
    );

    let stdout = io::stdout();
    write_summary(&result, &mut stdout.lock())?;
    Ok(())
}

/// Write the calculator summary.
///
/// Efficiency and error are truncated to whole percentages.
pub fn write_summary<W: Write>(result: &IntegrationResult, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Value: \t\t{:.6}", result.estimate)?;
    writeln!(out, "Samples: \t{}", result.successes)?;
    writeln!(out, "Efficiency: \t{}%", result.efficiency_percent() as u64)?;
    writeln!(out, "True value: \t{:.6}", ANALYTICAL)?;
    writeln!(out, "Error: \t\t{}%", (100.0 * result.error) as u64)?;
    writeln!(out)
}
