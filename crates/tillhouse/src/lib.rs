//! Tillhouse
//!
//! The permission engine behind the Tillhouse retail back office. Every
//! protected operation - a sale, a stock adjustment, a journal posting -
//! consults this engine before executing.
//!
//! # Pieces
//!
//! - [`Catalog`]: the static, versioned registry of every capability,
//!   loaded once at process start and immutable for the process lifetime.
//! - [`Authorizer`]: the decision surface over that catalog, with the
//!   descendant and ancestor implication rules precomputed.
//! - [`filter_by_pattern`]: glob search over capability names for the
//!   administration console (informational, never gates access).
//!
//! # Getting started
//!
//! ```
//! use tillhouse::prelude::*;
//!
//! let catalog = builtin_catalog().unwrap();
//! let authorizer = Authorizer::new(&catalog);
//!
//! // A cashier role.
//! let granted = ["sales.read", "sales.create", "customers.read"];
//!
//! assert!(authorizer.has_capability(&granted, "sales.create"));
//! assert!(!authorizer.has_capability(&granted, "sales.refund"));
//!
//! // Actionable denial message for the caller.
//! let missing = authorizer.missing_capabilities(&granted, &["sales.refund"]);
//! assert_eq!(missing, vec!["sales.refund"]);
//! ```

// Re-export the public surface of the member crates.
pub use tillhouse_authz::{Authorizer, ClosureIndex, GrantSet};
pub use tillhouse_catalog::{
    BUILTIN_DEFINITION, Capability, Catalog, CatalogError, CatalogResult, builtin_catalog,
    filter_by_pattern,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tillhouse_authz::{Authorizer, GrantSet};
    pub use tillhouse_catalog::{Capability, Catalog, builtin_catalog, filter_by_pattern};
}
