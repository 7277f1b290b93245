//! Chainset - Main entrypoint.
//!
//! Compares text files line by line and reports how many of each file's lines
//! also appear in the others. It initializes the logging system, loads
//! configuration, and dispatches to the requested command.

use chainset_lib::compare::{compare_files, read_lines, render_report};
use chainset_lib::config::{ChainsetConfig, ConfigLoader, LogConfig, ENV_PREFIX};
use chainset_lib::data_structures::ChainedHashSet;
use chainset_lib::error::{ChainsetError, ChainsetResult, ErrorContext};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for chainset.
#[derive(Parser, Debug)]
#[clap(name = "chainset", version, author, about, args_conflicts_with_subcommands = true)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Files to compare (same as `chainset compare FILES...`)
    #[clap(value_parser)]
    files: Vec<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Report the share of each file's lines found in every other file
    Compare {
        /// Files to compare (at least two)
        #[clap(value_parser)]
        files: Vec<PathBuf>,
    },

    /// Load a file into a table and print every bucket
    Dump {
        /// File whose lines are inserted
        #[clap(value_parser)]
        file: PathBuf,
    },

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// that stdout only carries reports and dumps.
fn init_logging(log: &LogConfig) -> ChainsetResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_line_number(true)
        .with_file(true);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| ChainsetError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Runs the comparison and prints the report to stdout.
fn run_compare(config: &ChainsetConfig, files: &[PathBuf]) -> ChainsetResult<()> {
    let report = match compare_files(files, &config.table.to_set_config()) {
        Ok(report) => report,
        Err(ChainsetError::NotEnoughFiles(_)) => {
            eprintln!("Invalid number of arguments passed");
            process::exit(1);
        }
        Err(e) => {
            return Err(ErrorContext::new(e, "compare")
                .with_details(format!("{} input files", files.len()))
                .report())
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_report(&report, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Loads one file into a table and dumps it to stdout.
fn run_dump(config: &ChainsetConfig, file: &Path) -> ChainsetResult<()> {
    let lines = read_lines(file).map_err(|e| ErrorContext::new(e, "dump").report())?;

    let mut table = ChainedHashSet::with_config(config.table.to_set_config())?;
    for line in &lines {
        table.insert(line);
    }

    table.dump()?;
    info!(
        path = %file.display(),
        size = table.size(),
        capacity = table.capacity(),
        statistics = %table.statistics(),
        "Dumped table"
    );
    Ok(())
}

/// Main entry point for the application.
fn main() -> ChainsetResult<()> {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&LogConfig::default())?;
            tracing::error!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    init_logging(&config.log)?;

    match args.command {
        Some(Command::Compare { files }) => run_compare(&config, &files),
        None => run_compare(&config, &args.files),
        Some(Command::Dump { file }) => run_dump(&config, &file),
        Some(Command::GenConfig { output }) => {
            info!("Generating default configuration");
            let toml = ChainsetConfig::default().to_toml()?;

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
