//! List command - list capabilities in the catalog.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use tillhouse::Capability;

use crate::{Cli, OutputFormat};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Only show capabilities in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Only show group capabilities (those with children)
    #[arg(long)]
    pub groups: bool,
}

/// One capability row.
#[derive(Debug, Serialize)]
struct CapabilityDisplay {
    name: String,
    category: String,
    description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<String>,
}

impl From<&Capability> for CapabilityDisplay {
    fn from(capability: &Capability) -> Self {
        Self {
            name: capability.name.clone(),
            category: capability.category.clone(),
            description: capability.description.clone(),
            children: capability.children.clone(),
        }
    }
}

/// Execute the list command.
pub fn execute(args: &ListArgs, cli: &Cli) -> Result<()> {
    let catalog = super::load_catalog(cli.catalog.as_deref())?;

    let selected: Vec<&Capability> = match &args.category {
        Some(category) => catalog.by_category(category),
        None => catalog.all().iter().collect(),
    };

    let rows: Vec<CapabilityDisplay> = selected
        .into_iter()
        .filter(|c| !args.groups || c.is_group())
        .map(CapabilityDisplay::from)
        .collect();

    match cli.format {
        OutputFormat::Human => {
            println!("Capabilities ({}):", rows.len());
            for row in &rows {
                if row.children.is_empty() {
                    println!("  {} [{}] - {}", row.name, row.category, row.description);
                } else {
                    println!(
                        "  {} [{}] - {} (children: {})",
                        row.name,
                        row.category,
                        row.description,
                        row.children.join(", ")
                    );
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
