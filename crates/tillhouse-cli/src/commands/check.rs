//! Check command - diagnose what the engine would decide.
//!
//! This is a troubleshooting aid for operators ("why can't this role
//! refund a sale?"), not an enforcement point.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use tillhouse::Authorizer;

use crate::{Cli, OutputFormat};

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Granted capability names (comma separated, or repeat the flag)
    #[arg(long, value_delimiter = ',', required = true)]
    pub granted: Vec<String>,

    /// Required capability names (comma separated, or repeat the flag)
    #[arg(long = "require", value_delimiter = ',', required = true)]
    pub require: Vec<String>,

    /// Require every capability instead of at least one
    #[arg(long)]
    pub all: bool,
}

/// Outcome of a check.
#[derive(Debug, Serialize)]
struct CheckDisplay {
    allowed: bool,
    mode: &'static str,
    granted: Vec<String>,
    required: Vec<String>,
    missing: Vec<String>,
}

/// Execute the check command. Returns whether access would be allowed.
pub fn execute(args: &CheckArgs, cli: &Cli) -> Result<bool> {
    let catalog = super::load_catalog(cli.catalog.as_deref())?;
    let authorizer = Authorizer::new(&catalog);

    // One expansion serves the decision and the diagnostic.
    let grants = authorizer.expand_grants(&args.granted);
    let (allowed, mode) = if args.all {
        (grants.covers_all(&args.require), "all")
    } else {
        (grants.covers_any(&args.require), "any")
    };
    let missing = grants.missing(&args.require);

    let result = CheckDisplay {
        allowed,
        mode,
        granted: args.granted.clone(),
        required: args.require.clone(),
        missing,
    };

    match cli.format {
        OutputFormat::Human => {
            let verdict = if result.allowed { "allowed" } else { "denied" };
            println!("Decision: {} (mode: {})", verdict, result.mode);
            if !result.missing.is_empty() {
                println!("Missing: {}", result.missing.join(", "));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::JsonCompact => {
            println!("{}", serde_json::to_string(&result)?);
        }
    }

    Ok(allowed)
}
