//! Cosim CLI - Monte Carlo volume of the cosine solid of revolution
//!
//! # Commands
//!
//! - `cosim calc --samples <n>` - Single integration with a summary
//! - `cosim error --min <a> --max <b> --step <s>` - Error sweep over sample counts
//!
//! Results go to stdout (or `--output`); logs go to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::sweep::OutputFormat;
use config::{build_config, CliArgs};

/// Cosim rejection-sampling calculator
#[derive(Parser, Debug)]
#[command(name = "cosim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE", env = "COSIM_CONFIG")]
    config: Option<PathBuf>,

    /// Generator seed
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Trial budget per requested success (0 disables the guard)
    #[arg(long, global = true)]
    max_trials_per_success: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculator mode: one integration, printed as a summary
    #[command(visible_alias = "c")]
    Calc {
        /// Number of accepted sample points
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        samples: Option<u64>,
    },

    /// Error mode: approximation error over a range of sample counts
    #[command(visible_alias = "e")]
    Error {
        /// Smallest number of sample points
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        min: Option<u64>,

        /// Exclusive upper bound on the number of sample points
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        max: Option<u64>,

        /// Increment between sample counts
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        step: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        let mut args = CliArgs {
            config_file: cli.config.clone(),
            seed: cli.seed,
            log_level: cli.log_level.clone(),
            max_trials_per_success: cli.max_trials_per_success,
            ..Default::default()
        };
        match &cli.command {
            Commands::Calc { samples } => args.samples = *samples,
            Commands::Error { min, max, step, .. } => {
                args.min = *min;
                args.max = *max;
                args.step = *step;
            }
        }
        args
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    let log_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    };
    init_tracing(log_level);

    info!(
        seed = config.seed,
        max_trials_per_success = config.max_trials_per_success,
        "Configuration loaded"
    );

    match &cli.command {
        Commands::Calc { .. } => commands::calc::run(&config)?,
        Commands::Error { format, output, .. } => {
            commands::sweep::run(&config, *format, output.as_deref())?
        }
    }

    Ok(())
}
