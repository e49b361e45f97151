//! Modulize CLI - single-file Python bundler and synchronizer

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use modulize::commands;
use modulize::errors::ModulizeError;

/// Exit code for an invalid bundler input, distinct from general failure.
const USAGE_EXIT_CODE: u8 = 2;

#[derive(Parser)]
#[command(name = "modulize")]
#[command(author, version, about = "Single-file Python bundler and synchronizer", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    directory: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Combine a source tree into a single bundle file
    Bundle {
        /// Entry file or package directory
        input: PathBuf,

        /// Output bundle file
        output: PathBuf,
    },

    /// Run one reconciliation pass between a source tree and a bundle
    Sync {
        /// Root of the source tree
        directory: PathBuf,

        /// Bundle file
        bundle: PathBuf,
    },

    /// Reconcile continuously until interrupted
    Watch {
        /// Root of the source tree
        directory: PathBuf,

        /// Bundle file
        bundle: PathBuf,

        /// Delay between passes in milliseconds (overrides config)
        #[arg(short, long)]
        poll_interval: Option<u64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Switch working directory before resolving any relative paths
    if let Some(ref dir) = cli.directory {
        if let Err(e) = std::env::set_current_dir(dir) {
            eprintln!("Error entering {}: {}", dir.display(), e);
            return ExitCode::FAILURE;
        }
    }

    // Read configuration from file or use defaults
    let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match cli.config {
        Some(ref path) => modulize::config::read_config_file(path).unwrap_or_default(),
        None => modulize::config::read_config(&base_dir).unwrap_or_default(),
    };

    // Execute command
    let result = match cli.command {
        Commands::Bundle { input, output } => {
            let options = commands::BundleOptions { input, output };
            commands::bundle(&config, options)
        }

        Commands::Sync { directory, bundle } => {
            let options = commands::SyncOptions { directory, bundle };
            commands::sync(options)
        }

        Commands::Watch {
            directory,
            bundle,
            poll_interval,
        } => {
            let options = commands::WatchOptions {
                directory,
                bundle,
                poll_interval_ms: poll_interval.unwrap_or(config.poll_interval_ms),
            };
            commands::watch(options)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ ModulizeError::InvalidInput(_)) => {
            eprintln!("Error: {}", e);
            ExitCode::from(USAGE_EXIT_CODE)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
