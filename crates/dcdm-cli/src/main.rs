//! dcdm - DCDM encoding command line tool
//!
//! Encodes linear XYZ to DCDM code values and back, as floats or 12-bit codes.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "dcdm")]
#[command(author, version, about = "SMPTE 428-1 DCDM encoding tool")]
#[command(long_about = "
Encode and decode Digital Cinema Distribution Master (SMPTE 428-1) values.

Examples:
  dcdm encode 0.18 1.0                  # Normalized code values
  dcdm encode 0.18 --int                # 12-bit code (462)
  dcdm decode 462 893 --int             # 12-bit codes to linear XYZ
  dcdm encode 18 --scale 100            # Percent domain
  dcdm table --steps 20                 # Linear / code / 12-bit table
  DCDM_SCALE=100 dcdm decode 11.28      # Default scale from environment
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Number of threads (0 = auto, falls back to DCDM_THREADS)
    #[arg(short = 'j', long, global = true)]
    threads: Option<usize>,

    /// Domain-range scale: reference, 1, 100 (falls back to DCDM_SCALE)
    #[arg(short, long, global = true)]
    scale: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode linear XYZ values (OETF)
    #[command(visible_alias = "e")]
    Encode(EncodeArgs),

    /// Decode code values to linear XYZ (EOTF)
    #[command(visible_alias = "d")]
    Decode(DecodeArgs),

    /// Print a linear / code value / 12-bit table
    #[command(visible_alias = "t")]
    Table(TableArgs),
}

/// Arguments for the `encode` command.
#[derive(Args)]
struct EncodeArgs {
    /// Linear XYZ values
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<f64>,

    /// Output 12-bit integer codes
    #[arg(short, long)]
    int: bool,
}

/// Arguments for the `decode` command.
#[derive(Args)]
struct DecodeArgs {
    /// Code values (normalized, or 12-bit with --int)
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<f64>,

    /// Inputs are 12-bit integer codes
    #[arg(short, long)]
    int: bool,
}

/// Arguments for the `table` command.
#[derive(Args)]
struct TableArgs {
    /// Number of intervals between 0 and 1
    #[arg(short = 'n', long, default_value = "10")]
    steps: u32,
}

fn init_logging(verbose: u8) -> tracing_appender::non_blocking::WorkerGuard {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .init();
    guard
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(cli.verbose);

    let settings = config::Settings::resolve(cli.scale.as_deref(), cli.threads)?;

    // Configure thread pool
    if settings.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(settings.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let _scale = dcdm_core::set_scale(settings.scale);

    match cli.command {
        Commands::Encode(args) => commands::encode::run(args, cli.verbose),
        Commands::Decode(args) => commands::decode::run(args, cli.verbose),
        Commands::Table(args) => commands::table::run(args, cli.verbose),
    }
}
