//! The capability record.
//!
//! A capability is a named permission unit (for example `sales.refund`)
//! that gates one protected operation or a group of operations. The engine
//! treats names as opaque strings; the dot-segmented convention exists for
//! human readers, not for matching.

use serde::{Deserialize, Serialize};

/// A single entry in the capability catalog.
///
/// A capability with a non-empty `children` list is a *group* capability:
/// granting it subsumes every child, transitively. A capability without
/// children is a *leaf*. The distinction is conventional, not enforced:
/// any capability may declare children.
///
/// # Example
///
/// ```
/// use tillhouse_catalog::Capability;
///
/// let cap: Capability = toml::from_str(
///     r#"
///     name = "sales"
///     description = "Full access to the sales module"
///     category = "Sales"
///     children = ["sales.read", "sales.create"]
///     "#,
/// )
/// .unwrap();
///
/// assert!(cap.is_group());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    /// Unique identifier. Uniqueness is the only structural invariant the
    /// catalog enforces.
    pub name: String,

    /// Human-readable label. Not consulted by access decisions.
    pub description: String,

    /// Free-form grouping tag used by administrative screens. Not consulted
    /// by access decisions.
    pub category: String,

    /// Names of capabilities this grant transitively subsumes, in
    /// declaration order. References are not validated against the catalog;
    /// a dangling name simply never resolves during expansion.
    #[serde(default)]
    pub children: Vec<String>,
}

impl Capability {
    /// True if this capability declares at least one child.
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// True if this capability declares no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_without_children_defaults_to_leaf() {
        let cap: Capability = toml::from_str(
            r#"
            name = "sales.read"
            description = "View sales orders"
            category = "Sales"
            "#,
        )
        .unwrap();

        assert_eq!(cap.name, "sales.read");
        assert!(cap.children.is_empty());
        assert!(cap.is_leaf());
        assert!(!cap.is_group());
    }

    #[test]
    fn deserialize_group_capability() {
        let cap: Capability = toml::from_str(
            r#"
            name = "sales"
            description = "Full access to the sales module"
            category = "Sales"
            children = ["sales.read", "sales.create"]
            "#,
        )
        .unwrap();

        assert!(cap.is_group());
        assert_eq!(cap.children, vec!["sales.read", "sales.create"]);
    }
}
