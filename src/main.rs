//! ding CLI - Command line interface for ding
//!
//! Provides the `init` and `bench` commands, with text output for humans
//! and JSON output for tooling.

use anyhow::Context;
use clap::{Parser, Subcommand};
use ding::{bench, codec, BenchmarkReport, InitOutcome, ObjectStore, Repository};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ding")]
#[command(about = "A content-addressed compression benchmark")]
#[command(version)]
struct Cli {
    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a ding repository
    Init {
        /// Directory to initialize
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Hash a file, benchmark every codec on it, and store the variants
    Bench {
        /// The file to benchmark
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path } => run_init(&path),
        Commands::Bench { file } => run_bench(&file, cli.format),
    }
}

fn run_init(path: &Path) -> anyhow::Result<()> {
    match Repository::init(path)? {
        InitOutcome::Initialized(marker) => {
            println!("Initialized a ding repository in {}", marker.display());
        }
        InitOutcome::AlreadyInitialized => {
            println!("It is already a ding repository");
        }
        InitOutcome::MissingPath => {
            println!("Error: path does not exist: {}", path.display());
        }
        InitOutcome::NotADirectory => {
            println!("Error: not a directory: {}", path.display());
        }
    }
    Ok(())
}

fn run_bench(file: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("cannot determine the current directory")?;
    let repo = Repository::discover(&cwd)?;
    let store = ObjectStore::open(repo.storage())?;

    let report = bench::run(file, &codec::registry(), &store)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_report(&report),
    }
    Ok(())
}

fn print_report(report: &BenchmarkReport) {
    println!();
    println!("File hash: {}", report.oid);
    println!("Original size: {} bytes", report.original_size);
    println!();
    println!("Algorithm | Time (ms) | Size (bytes) | Ratio");
    println!("{}", "-".repeat(50));
    for row in &report.results {
        println!(
            "{:8} | {:8.2} | {:12} | {:.3}",
            row.codec,
            row.elapsed.as_secs_f64() * 1000.0,
            row.compressed_size,
            row.ratio
        );
    }
}
