//! Categories command - list the distinct capability categories.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::{Cli, OutputFormat};

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    /// Show how many capabilities each category holds
    #[arg(long)]
    pub counts: bool,
}

/// One category row.
#[derive(Debug, Serialize)]
struct CategoryDisplay {
    category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    capabilities: Option<usize>,
}

/// Execute the categories command.
pub fn execute(args: &CategoriesArgs, cli: &Cli) -> Result<()> {
    let catalog = super::load_catalog(cli.catalog.as_deref())?;

    let rows: Vec<CategoryDisplay> = catalog
        .categories()
        .into_iter()
        .map(|category| CategoryDisplay {
            category: category.to_string(),
            capabilities: args.counts.then(|| catalog.by_category(category).len()),
        })
        .collect();

    match cli.format {
        OutputFormat::Human => {
            println!("Categories ({}):", rows.len());
            for row in &rows {
                match row.capabilities {
                    Some(count) => println!("  {} ({} capabilities)", row.category, count),
                    None => println!("  {}", row.category),
                }
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
