//! pfx - post-processing profile migrator
//!
//! Converts legacy (schema 1) profile documents into current (schema 2)
//! documents, inspects either schema, and bakes legacy color grading into
//! `.cube` lookup tables.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use pfx_convert::ColorGradingPath;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

mod baker;
mod commands;

use baker::DEFAULT_LUT_SIZE;

#[derive(Parser)]
#[command(name = "pfx")]
#[command(author, version, about = "Post-processing profile migrator")]
#[command(long_about = "
Migrates legacy post-processing profiles to the current effect-list schema.

Examples:
  pfx info legacy.yaml                       # Show enabled sections
  pfx convert legacy.yaml                    # Writes 'legacy 1.yaml' next to it
  pfx convert 'profiles/*.asset' -o out/     # Convert a batch into a directory
  pfx convert legacy.yaml --color-grading legacy-lut --lut-size 33
  pfx convert legacy.yaml --report           # Print what did not carry over
  pfx bake legacy.yaml -o grade.cube         # Bake color grading only
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Also write log output to this file
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert legacy profiles to the current schema
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Display profile information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Bake legacy color grading into a .cube LUT
    Bake(BakeArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Input documents or glob patterns
    #[arg(required = true)]
    input: Vec<String>,

    /// Output file (one input) or directory (several inputs)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// How color grading is carried over
    #[arg(long, value_enum, default_value_t = GradingPath::Direct)]
    color_grading: GradingPath,

    /// Lattice size of the baked LUT on the legacy-lut path
    #[arg(long, default_value_t = DEFAULT_LUT_SIZE)]
    lut_size: u32,

    /// Overwrite an existing output instead of picking a free name
    #[arg(long)]
    force: bool,

    /// Print the conversion report as JSON
    #[arg(long)]
    report: bool,
}

/// Command line spelling of [`ColorGradingPath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GradingPath {
    /// Map grading parameters field by field
    Direct,
    /// Bake the legacy grading into a lookup table
    LegacyLut,
}

impl From<GradingPath> for ColorGradingPath {
    fn from(path: GradingPath) -> Self {
        match path {
            GradingPath::Direct => ColorGradingPath::Direct,
            GradingPath::LegacyLut => ColorGradingPath::LegacyLut,
        }
    }
}

#[derive(Args)]
struct InfoArgs {
    /// Input document(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// List every override flag
    #[arg(short, long)]
    all: bool,
}

#[derive(Args)]
struct BakeArgs {
    /// Legacy profile document
    input: PathBuf,

    /// Output .cube file
    #[arg(short, long)]
    output: PathBuf,

    /// Lattice size
    #[arg(short, long, default_value_t = DEFAULT_LUT_SIZE)]
    size: u32,
}

/// Installs the subscriber. The returned guard flushes the log file on drop.
fn init_logging(verbose: u8, log: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let stderr = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let Some(path) = log else {
        tracing_subscriber::registry().with(filter).with(stderr).init();
        return Ok(None);
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file = path
        .file_name()
        .with_context(|| format!("Log path has no file name: {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();
    Ok(Some(guard))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log.as_deref())?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Bake(args) => commands::bake::run(args, cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn convert_flags() {
        let cli = Cli::try_parse_from([
            "pfx", "-vv", "convert", "a.yaml", "b.yaml", "--color-grading", "legacy-lut",
            "--lut-size", "17", "--force",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.input, ["a.yaml", "b.yaml"]);
        assert_eq!(args.color_grading, GradingPath::LegacyLut);
        assert_eq!(ColorGradingPath::from(args.color_grading), ColorGradingPath::LegacyLut);
        assert_eq!(args.lut_size, 17);
        assert!(args.force);
        assert!(!args.report);
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["pfx", "convert", "a.yaml"]).unwrap();
        assert_eq!(cli.threads, 0);
        let Commands::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.color_grading, GradingPath::Direct);
        assert_eq!(args.lut_size, DEFAULT_LUT_SIZE);
        assert!(args.output.is_none());
    }

    #[test]
    fn bake_requires_output() {
        assert!(Cli::try_parse_from(["pfx", "bake", "a.yaml"]).is_err());
    }
}
