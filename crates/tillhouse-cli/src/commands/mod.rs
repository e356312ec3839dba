//! CLI subcommands.

pub mod categories;
pub mod check;
pub mod list;
pub mod search;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use tillhouse::{Catalog, builtin_catalog};

/// Load the catalog named on the command line, or fall back to the
/// built-in definition.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let definition = fs::read_to_string(path).with_context(|| {
                format!("Failed to read catalog definition {}", path.display())
            })?;
            Catalog::from_toml_str(&definition).with_context(|| {
                format!("Failed to parse catalog definition {}", path.display())
            })
        }
        None => builtin_catalog().context("Failed to load the built-in catalog"),
    }
}
