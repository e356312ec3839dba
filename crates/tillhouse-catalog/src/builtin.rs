//! The built-in catalog definition.
//!
//! Deployments normally run with this embedded definition; a custom TOML
//! document can be supplied instead through [`Catalog::from_toml_str`].

use crate::catalog::Catalog;
use crate::error::CatalogResult;

/// The embedded catalog definition document.
pub const BUILTIN_DEFINITION: &str = include_str!("capabilities.toml");

/// Build the built-in back-office catalog.
///
/// # Errors
///
/// Returns a parse or duplicate-name error if the embedded definition is
/// invalid. The definition ships with the crate and is covered by tests,
/// so this only fails if the crate itself is broken.
pub fn builtin_catalog() -> CatalogResult<Catalog> {
    Catalog::from_toml_str(BUILTIN_DEFINITION)
}
