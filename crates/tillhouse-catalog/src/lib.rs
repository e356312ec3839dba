//! Tillhouse Capability Catalog
//!
//! This crate holds the data model side of the Tillhouse authorization
//! engine: the [`Capability`] record, the immutable [`Catalog`] built once
//! at process start, the built-in back-office catalog definition, and the
//! glob-style [`filter_by_pattern`] helper used by administrative search.
//!
//! The catalog is deliberately dumb: it answers identity and lookup
//! queries only. Transitive implication over the capability graph lives in
//! the companion `tillhouse-authz` crate.
//!
//! # Usage
//!
//! ```
//! use tillhouse_catalog::builtin_catalog;
//!
//! let catalog = builtin_catalog().unwrap();
//!
//! assert!(catalog.is_known("sales.refund"));
//! assert!(catalog.has_children("sales"));
//! assert!(catalog.details("nonexistent").is_none());
//! ```

pub mod builtin;
pub mod capability;
pub mod catalog;
pub mod error;
pub mod filter;

// Re-export main types
pub use builtin::{BUILTIN_DEFINITION, builtin_catalog};
pub use capability::Capability;
pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use filter::filter_by_pattern;
