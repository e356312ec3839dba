//! Search command - glob search over capability names.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use tillhouse::filter_by_pattern;

use crate::{Cli, OutputFormat};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Glob pattern; `*` matches any run of characters (e.g. "sales.*")
    #[arg(required = true)]
    pub pattern: String,
}

/// One match row.
#[derive(Debug, Serialize)]
struct MatchDisplay {
    name: String,
    category: String,
    description: String,
}

/// Execute the search command.
pub fn execute(args: &SearchArgs, cli: &Cli) -> Result<()> {
    let catalog = super::load_catalog(cli.catalog.as_deref())?;

    let rows: Vec<MatchDisplay> = filter_by_pattern(catalog.names(), &args.pattern)
        .into_iter()
        .filter_map(|name| {
            catalog.details(&name).map(|capability| MatchDisplay {
                name: capability.name.clone(),
                category: capability.category.clone(),
                description: capability.description.clone(),
            })
        })
        .collect();

    match cli.format {
        OutputFormat::Human => {
            println!("Matches for '{}' ({}):", args.pattern, rows.len());
            for row in &rows {
                println!("  {} [{}] - {}", row.name, row.category, row.description);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::JsonCompact => {
            println!("{}", serde_json::to_string(&rows)?);
        }
    }

    Ok(())
}
