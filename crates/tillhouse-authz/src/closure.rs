//! Transitive closure over the capability graph.
//!
//! The catalog never changes after startup, so every descendant and
//! ancestor set is computed once here, eagerly. After construction the
//! index is plain immutable data: no locks, no interior mutability, safe
//! to share across request handlers.
//!
//! Traversal is an iterative worklist with a visited set. A malformed
//! definition (a cycle, or a child reference that is never declared) must
//! degrade, not loop or panic: work is bounded by the edge count and a
//! dangling name is just a name with no outgoing edges.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use tillhouse_catalog::Catalog;

/// Precomputed descendant and ancestor sets for every name in the graph.
///
/// "Descendants" of a capability are its children, recursively.
/// "Ancestors" are the capabilities that list it as a child, directly or
/// transitively. Names the catalog does not know have empty closures.
#[derive(Debug, Clone)]
pub struct ClosureIndex {
    descendants: HashMap<String, HashSet<String>>,
    ancestors: HashMap<String, HashSet<String>>,
}

impl ClosureIndex {
    /// Compute the full closure of a catalog.
    pub fn build(catalog: &Catalog) -> Self {
        // Forward edges: capability -> declared children.
        // Reverse edges: name -> capabilities declaring it as a child.
        let mut forward: HashMap<&str, Vec<&str>> = HashMap::with_capacity(catalog.len());
        let mut reverse: HashMap<&str, Vec<&str>> = HashMap::new();

        for capability in catalog.all() {
            let name = capability.name.as_str();
            let children: Vec<&str> = capability.children.iter().map(String::as_str).collect();
            for &child in &children {
                reverse.entry(child).or_default().push(name);
            }
            forward.insert(name, children);
        }

        let mut descendants = HashMap::with_capacity(forward.len());
        for (&name, children) in &forward {
            descendants.insert(name.to_string(), collect_reachable(children, &forward));
        }

        // Ancestor sets also exist for names that only ever appear as a
        // child reference: the catalog may be missing the declaration, but
        // a grant of that name still implies the groups containing it.
        let mut ancestors = HashMap::with_capacity(forward.len().max(reverse.len()));
        let no_parents = Vec::new();
        for capability in catalog.all() {
            let name = capability.name.as_str();
            let parents = reverse.get(name).unwrap_or(&no_parents);
            ancestors.insert(name.to_string(), collect_reachable(parents, &reverse));
        }
        for (&name, parents) in &reverse {
            if !ancestors.contains_key(name) {
                ancestors.insert(name.to_string(), collect_reachable(parents, &reverse));
            }
        }

        debug!(
            capabilities = catalog.len(),
            indexed = descendants.len() + ancestors.len(),
            "Capability closure precomputed"
        );

        Self {
            descendants,
            ancestors,
        }
    }

    /// Every capability the named one subsumes, transitively. Empty for
    /// leaves and for names the catalog does not know.
    pub fn descendants(&self, name: &str) -> HashSet<String> {
        self.descendants.get(name).cloned().unwrap_or_default()
    }

    /// Every capability that contains the named one, directly or
    /// transitively. Empty for names nothing declares as a child.
    pub fn ancestors(&self, name: &str) -> HashSet<String> {
        self.ancestors.get(name).cloned().unwrap_or_default()
    }

    /// Expand a granted set into the full set of implied capabilities:
    /// the grants themselves, every descendant of each grant, and every
    /// ancestor of each grant.
    ///
    /// The ancestor half is the system's deliberate (and load-bearing)
    /// policy: holding any single child of a group counts as holding the
    /// group, whether or not the siblings are held.
    pub fn expand<S: AsRef<str>>(&self, granted: &[S]) -> HashSet<String> {
        let mut expanded = HashSet::new();

        for grant in granted {
            let name = grant.as_ref();
            expanded.insert(name.to_string());
            if let Some(down) = self.descendants.get(name) {
                expanded.extend(down.iter().cloned());
            }
            if let Some(up) = self.ancestors.get(name) {
                expanded.extend(up.iter().cloned());
            }
        }

        expanded
    }
}

/// Worklist traversal from a set of seed names over an edge map. The
/// visited set both dedups multi-path reachability and terminates cycles.
fn collect_reachable(seeds: &[&str], edges: &HashMap<&str, Vec<&str>>) -> HashSet<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut stack: Vec<&str> = seeds.to_vec();

    while let Some(name) = stack.pop() {
        if !seen.insert(name.to_string()) {
            continue;
        }
        if let Some(next) = edges.get(name) {
            stack.extend(next.iter().copied());
        }
    }

    seen
}
