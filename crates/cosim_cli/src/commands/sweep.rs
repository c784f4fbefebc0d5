//! Error-sweep command implementation
//!
//! Runs one integration per sample count and emits the
//! (sample_count, estimate, error) series for external plotting.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;
use cosim_core::mc::{cosine_solid, SweepPoint};
use tracing::info;

use crate::config::CosimConfig;
use crate::Result;

/// Output format for sweep results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text columns
    #[default]
    Table,
    /// Comma-separated values with a header row
    Csv,
    /// Pretty-printed JSON array
    Json,
}

/// Run the sweep command
pub fn run(config: &CosimConfig, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let range = config.sweep_range()?;
    info!(
        min = range.min(),
        max = range.max(),
        step = range.step(),
        runs = range.len(),
        "Running error sweep"
    );

    let mut sampler = cosine_solid(config.sampler_config()?);
    let points = sampler.sweep(&range)?;

    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_points(&points, format, &mut writer)?;
            writer.flush()?;
            info!(path = %path.display(), points = points.len(), "Sweep written");
        }
        None => {
            let stdout = io::stdout();
            write_points(&points, format, &mut stdout.lock())?;
        }
    }

    Ok(())
}

/// Write sweep points in the requested format
pub fn write_points<W: Write>(points: &[SweepPoint], format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "{:>12}  {:>12}  {:>10}", "samples", "estimate", "error")?;
            for point in points {
                writeln!(
                    out,
                    "{:>12}  {:>12.6}  {:>10.6}",
                    point.sample_count, point.estimate, point.error
                )?;
            }
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for point in points {
                writer.serialize(point)?;
            }
            writer.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, points)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
