//! Tillhouse CLI - administrative tooling for the capability catalog.
//!
//! Informational only: these commands back the capability-management
//! screens and operator diagnostics. Nothing here gates access; the
//! `check` subcommand reports what the engine would decide.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;

/// Tillhouse capability catalog administration
#[derive(Parser)]
#[command(name = "tillhouse")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Catalog definition file (defaults to the built-in catalog)
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Output format options.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON output
    Json,
    /// Compact JSON (single line)
    JsonCompact,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List capabilities in the catalog
    List(commands::list::ListArgs),
    /// List the distinct capability categories
    Categories(commands::categories::CategoriesArgs),
    /// Search capability names with a glob pattern
    Search(commands::search::SearchArgs),
    /// Check a granted set against required capabilities
    Check(commands::check::CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tillhouse={}", log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Run the command
    let result = match &cli.command {
        Commands::List(args) => commands::list::execute(args, &cli).map(|()| ExitCode::SUCCESS),
        Commands::Categories(args) => {
            commands::categories::execute(args, &cli).map(|()| ExitCode::SUCCESS)
        }
        Commands::Search(args) => commands::search::execute(args, &cli).map(|()| ExitCode::SUCCESS),
        // A denied check is not an error, but operators scripting against
        // the tool want it in the exit status.
        Commands::Check(args) => commands::check::execute(args, &cli).map(|allowed| {
            if allowed {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}
