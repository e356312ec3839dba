//! Tillhouse Authorization Engine
//!
//! Transitive-closure computation and access decisions over the capability
//! catalog. This crate answers the one question every protected operation
//! in the back office asks before running: *is this allowed?*
//!
//! # Model
//!
//! A user's role carries a flat list of granted capability names. A grant
//! implies more than itself:
//!
//! - granting a group capability grants every descendant, transitively;
//! - granting any child counts as holding every ancestor group that
//!   contains it (a deliberate policy, documented in `DESIGN.md`).
//!
//! [`ClosureIndex`] precomputes these implications once per catalog;
//! [`Authorizer`] exposes the decision surface: single check, any-of,
//! all-of, and the missing-capabilities diagnostic.
//!
//! No operation in this crate can fail, block, or perform I/O. Unknown
//! names degrade to "denied".
//!
//! # Usage
//!
//! ```
//! use tillhouse_authz::Authorizer;
//! use tillhouse_catalog::builtin_catalog;
//!
//! let catalog = builtin_catalog().unwrap();
//! let authorizer = Authorizer::new(&catalog);
//!
//! let granted = ["sales", "reports.sales"];
//! assert!(authorizer.has_capability(&granted, "sales.refund"));
//! assert!(authorizer.missing_capabilities(&granted, &["accounting.post"])
//!     == vec!["accounting.post".to_string()]);
//! ```

pub mod closure;
pub mod decision;

// Re-export main types
pub use closure::ClosureIndex;
pub use decision::{Authorizer, GrantSet};
