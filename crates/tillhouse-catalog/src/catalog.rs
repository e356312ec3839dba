//! The immutable capability catalog.
//!
//! A `Catalog` is built once at process start and never mutated. Every
//! read is a pure function over the construction-time state, so a shared
//! reference can be handed to any number of threads without locking.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::info;

use crate::capability::Capability;
use crate::error::{CatalogError, CatalogResult};

/// Shape of a catalog definition document.
#[derive(Deserialize)]
struct CatalogDefinition {
    #[serde(default)]
    capabilities: Vec<Capability>,
}

/// The fixed registry of every capability in the system.
///
/// Entries keep their declaration order; lookup by name goes through an
/// index map and is O(1). Construction rejects duplicate names (the one
/// structural invariant) but deliberately does not validate `children`
/// references, so a definition may mention capabilities it never declares
/// (they behave as plain names during expansion).
///
/// # Example
///
/// ```
/// use tillhouse_catalog::Catalog;
///
/// let catalog = Catalog::from_toml_str(
///     r#"
///     [[capabilities]]
///     name = "sales"
///     description = "Full access to the sales module"
///     category = "Sales"
///     children = ["sales.read"]
///
///     [[capabilities]]
///     name = "sales.read"
///     description = "View sales orders"
///     category = "Sales"
///     "#,
/// )
/// .unwrap();
///
/// assert!(catalog.is_known("sales"));
/// assert!(catalog.has_children("sales"));
/// assert!(!catalog.has_children("sales.read"));
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Capability>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from a list of capability records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateName`] if two records share a name.
    pub fn new(entries: Vec<Capability>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(entries.len());

        for (position, capability) in entries.iter().enumerate() {
            if index.insert(capability.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateName(capability.name.clone()));
            }
        }

        let catalog = Self { entries, index };

        info!(
            capabilities = catalog.len(),
            categories = catalog.categories().len(),
            "Capability catalog built"
        );

        Ok(catalog)
    }

    /// Parse a TOML catalog definition and build a catalog from it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the document is malformed, or
    /// [`CatalogError::DuplicateName`] if it declares a name twice.
    pub fn from_toml_str(definition: &str) -> CatalogResult<Self> {
        let parsed: CatalogDefinition = toml::from_str(definition)?;
        Self::new(parsed.capabilities)
    }

    /// Every capability, in declaration order.
    pub fn all(&self) -> &[Capability] {
        &self.entries
    }

    /// Number of capabilities in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the catalog holds no capabilities.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every capability name, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|c| c.name.as_str())
    }

    /// Distinct category tags, in first-seen declaration order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for capability in &self.entries {
            let category = capability.category.as_str();
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    /// All capabilities whose `category` equals the argument, in
    /// declaration order. Empty if none match.
    pub fn by_category(&self, category: &str) -> Vec<&Capability> {
        self.entries
            .iter()
            .filter(|c| c.category == category)
            .collect()
    }

    /// True iff some capability in the catalog has this name.
    pub fn is_known(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The capability with this name, or `None` if unknown. An unknown
    /// name is not an error.
    pub fn details(&self, name: &str) -> Option<&Capability> {
        self.index.get(name).map(|&position| &self.entries[position])
    }

    /// True iff the named capability exists and declares children. Unknown
    /// names yield `false`, not an error.
    pub fn has_children(&self, name: &str) -> bool {
        self.details(name).is_some_and(Capability::is_group)
    }
}
