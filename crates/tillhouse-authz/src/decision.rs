//! Access decisions over a granted-capability set.
//!
//! This is the boundary the rest of the system calls. Request middleware
//! resolves the acting user's granted list from their role and asks the
//! [`Authorizer`] whether the operation's annotated capability is covered;
//! a `false` answer must turn into an authorization-denied response before
//! any business logic runs.
//!
//! Nothing here can fail. An unknown or misspelled capability name, in a
//! grant or in a requirement, is an ordinary string that matches nothing,
//! so a stale name degrades to "denied" instead of an error a caller would
//! have to handle on a security-sensitive path.

use std::collections::HashSet;

use tracing::debug;

use tillhouse_catalog::Catalog;

use crate::closure::ClosureIndex;

/// Decision engine bound to one catalog.
///
/// Construct once at process start, next to the catalog, and hand shared
/// references to every consumer. All methods are lock-free reads.
///
/// # Example
///
/// ```
/// use tillhouse_authz::Authorizer;
/// use tillhouse_catalog::builtin_catalog;
///
/// let catalog = builtin_catalog().unwrap();
/// let authorizer = Authorizer::new(&catalog);
///
/// // Holding the group covers every descendant.
/// assert!(authorizer.has_capability(&["sales"], "sales.refund"));
/// // Holding one child covers the group, not the siblings.
/// assert!(authorizer.has_capability(&["sales.read"], "sales"));
/// assert!(!authorizer.has_capability(&["sales.read"], "sales.refund"));
/// ```
#[derive(Debug, Clone)]
pub struct Authorizer {
    closure: ClosureIndex,
}

impl Authorizer {
    /// Build an authorizer for a catalog, precomputing its closure.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            closure: ClosureIndex::build(catalog),
        }
    }

    /// The underlying closure index, for diagnostics and admin tooling.
    pub fn closure(&self) -> &ClosureIndex {
        &self.closure
    }

    /// Expand a granted list once and keep the result for many checks.
    ///
    /// Each `has_*` call below expands on its own, which is fine for a
    /// single decision; middleware checking several requirements against
    /// the same user should go through a [`GrantSet`] instead.
    pub fn expand_grants<S: AsRef<str>>(&self, granted: &[S]) -> GrantSet {
        GrantSet {
            expanded: self.closure.expand(granted),
        }
    }

    /// Is `required` covered by the granted list?
    pub fn has_capability<S: AsRef<str>>(&self, granted: &[S], required: &str) -> bool {
        let allowed = self.expand_grants(granted).covers(required);
        debug!(required, grants = granted.len(), allowed, "Capability check");
        allowed
    }

    /// Is at least one entry of `required` covered? An empty requirement
    /// list is *not* granted: "any of nothing" stays deny-by-default.
    pub fn has_any_capability<S, R>(&self, granted: &[S], required: &[R]) -> bool
    where
        S: AsRef<str>,
        R: AsRef<str>,
    {
        self.expand_grants(granted).covers_any(required)
    }

    /// Is every entry of `required` covered? An empty requirement list is
    /// vacuously satisfied.
    pub fn has_all_capabilities<S, R>(&self, granted: &[S], required: &[R]) -> bool
    where
        S: AsRef<str>,
        R: AsRef<str>,
    {
        self.expand_grants(granted).covers_all(required)
    }

    /// The entries of `required` that are not covered, in their original
    /// order. Empty means fully satisfied. Used to build "you are missing:
    /// X, Y" messages.
    pub fn missing_capabilities<S, R>(&self, granted: &[S], required: &[R]) -> Vec<String>
    where
        S: AsRef<str>,
        R: AsRef<str>,
    {
        self.expand_grants(granted).missing(required)
    }
}

/// The expanded closure of one user's grants.
///
/// Produced by [`Authorizer::expand_grants`]; membership tests are O(1)
/// hash lookups, so this is the shape to hold when one request performs
/// several checks.
#[derive(Debug, Clone)]
pub struct GrantSet {
    expanded: HashSet<String>,
}

impl GrantSet {
    /// Is this capability covered?
    pub fn covers(&self, required: &str) -> bool {
        self.expanded.contains(required)
    }

    /// Is at least one of these covered? Empty input yields `false`.
    pub fn covers_any<R: AsRef<str>>(&self, required: &[R]) -> bool {
        required.iter().any(|r| self.covers(r.as_ref()))
    }

    /// Are all of these covered? Empty input yields `true`.
    pub fn covers_all<R: AsRef<str>>(&self, required: &[R]) -> bool {
        required.iter().all(|r| self.covers(r.as_ref()))
    }

    /// The uncovered entries, preserving input order.
    pub fn missing<R: AsRef<str>>(&self, required: &[R]) -> Vec<String> {
        required
            .iter()
            .map(|r| r.as_ref())
            .filter(|r| !self.covers(r))
            .map(str::to_string)
            .collect()
    }

    /// Iterate the expanded capability names, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }

    /// Number of capabilities in the expanded set.
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// True if the expansion is empty (an empty granted list).
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
