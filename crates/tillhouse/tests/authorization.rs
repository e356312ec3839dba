//! End-to-end authorization behavior over real catalogs.
//!
//! These tests pin the decision semantics the rest of the back office
//! depends on: the implication rules, the deny-by-default posture, and the
//! exact shape of the missing-capabilities diagnostic.

use tillhouse::prelude::*;

fn scenario_catalog() -> Catalog {
    Catalog::from_toml_str(
        r#"
        [[capabilities]]
        name = "sales"
        description = "Full access to the sales module"
        category = "Sales"
        children = ["sales.read", "sales.create"]

        [[capabilities]]
        name = "sales.read"
        description = "View sales"
        category = "Sales"

        [[capabilities]]
        name = "sales.create"
        description = "Create sales"
        category = "Sales"
        "#,
    )
    .unwrap()
}

#[test]
fn every_known_capability_covers_itself() {
    let catalog = builtin_catalog().unwrap();
    let authorizer = Authorizer::new(&catalog);

    for capability in catalog.all() {
        let granted = [capability.name.as_str()];
        assert!(
            authorizer.has_capability(&granted, &capability.name),
            "{} should cover itself",
            capability.name
        );
    }
}

#[test]
fn group_grant_covers_children_and_grandchildren() {
    let catalog = builtin_catalog().unwrap();
    let authorizer = Authorizer::new(&catalog);

    for capability in catalog.all() {
        for child in &capability.children {
            assert!(
                authorizer.has_capability(&[capability.name.as_str()], child),
                "{} should cover its child {}",
                capability.name,
                child
            );
        }
    }

    // admin -> sales -> sales.refund is two levels deep.
    assert!(authorizer.has_capability(&["admin"], "sales.refund"));
    assert!(authorizer.has_capability(&["admin"], "settings.update"));
}

#[test]
fn any_child_implies_every_ancestor() {
    let catalog = builtin_catalog().unwrap();
    let authorizer = Authorizer::new(&catalog);

    for capability in catalog.all() {
        for child in &capability.children {
            assert!(
                authorizer.has_capability(&[child.as_str()], &capability.name),
                "{} should imply its parent {}",
                child,
                capability.name
            );
        }
    }

    // The policy is transitive: one leaf implies the whole ancestor chain,
    // up to and including the admin super-group.
    assert!(authorizer.has_capability(&["sales.refund"], "sales"));
    assert!(authorizer.has_capability(&["sales.refund"], "admin"));
    // It does not leak sideways to siblings.
    assert!(!authorizer.has_capability(&["sales.refund"], "sales.delete"));
    assert!(!authorizer.has_capability(&["sales.refund"], "inventory"));
}

#[test]
fn expansion_is_stable_on_closed_grant_sets() {
    let catalog = builtin_catalog().unwrap();
    let authorizer = Authorizer::new(&catalog);
    let closure = authorizer.closure();

    // The empty set and a root-group grant both expand to fixed points.
    let none: [&str; 0] = [];
    assert_eq!(closure.expand(&none), closure.expand(&none));

    let once = closure.expand(&["admin"]);
    let grants: Vec<&str> = once.iter().map(String::as_str).collect();
    assert_eq!(closure.expand(&grants), once);
}

#[test]
fn expansion_is_idempotent_on_single_child_chains() {
    let catalog = Catalog::from_toml_str(
        r#"
        [[capabilities]]
        name = "accounting"
        description = "Accounting"
        category = "Accounting"
        children = ["accounting.post"]

        [[capabilities]]
        name = "accounting.post"
        description = "Post journals"
        category = "Accounting"
        children = ["accounting.post.draft"]

        [[capabilities]]
        name = "accounting.post.draft"
        description = "Draft journals"
        category = "Accounting"
        "#,
    )
    .unwrap();
    let authorizer = Authorizer::new(&catalog);
    let closure = authorizer.closure();

    let once = closure.expand(&["accounting.post.draft"]);
    let grants: Vec<&str> = once.iter().map(String::as_str).collect();
    assert_eq!(closure.expand(&grants), once);
}

#[test]
fn all_implies_any_and_empty_lists_behave() {
    let catalog = builtin_catalog().unwrap();
    let authorizer = Authorizer::new(&catalog);

    let granted = ["inventory", "reports.sales"];
    let required = ["inventory.adjust", "reports.sales"];

    assert!(authorizer.has_all_capabilities(&granted, &required));
    assert!(authorizer.has_any_capability(&granted, &required));

    let none: [&str; 0] = [];
    assert!(!authorizer.has_any_capability(&granted, &none));
    assert!(authorizer.has_all_capabilities(&granted, &none));
}

#[test]
fn missing_set_agrees_with_individual_checks() {
    let catalog = builtin_catalog().unwrap();
    let authorizer = Authorizer::new(&catalog);

    let granted = ["sales.read", "inventory"];
    let required = [
        "sales.read",
        "sales.refund",
        "inventory.count",
        "accounting.close",
        "sales",
    ];

    let missing = authorizer.missing_capabilities(&granted, &required);

    let expected: Vec<String> = required
        .iter()
        .copied()
        .filter(|r| !authorizer.has_capability(&granted, r))
        .map(str::to_string)
        .collect();
    assert_eq!(missing, expected);
    assert_eq!(missing, vec!["sales.refund", "accounting.close"]);
    assert_eq!(
        missing.is_empty(),
        authorizer.has_all_capabilities(&granted, &required)
    );
}

#[test]
fn scenario_a_child_grant() {
    let authorizer = Authorizer::new(&scenario_catalog());
    let granted = ["sales.read"];

    assert!(authorizer.has_capability(&granted, "sales"));
    assert!(!authorizer.has_capability(&granted, "sales.create"));
}

#[test]
fn scenario_b_parent_grant() {
    let authorizer = Authorizer::new(&scenario_catalog());
    let granted = ["sales"];

    assert!(authorizer.has_capability(&granted, "sales.read"));
    assert!(authorizer.has_capability(&granted, "sales.create"));
}

#[test]
fn scenario_c_missing_diagnostic() {
    let authorizer = Authorizer::new(&scenario_catalog());

    let missing = authorizer.missing_capabilities(
        &["sales.read"],
        &["sales.read", "sales.delete", "sales"],
    );
    assert_eq!(missing, vec!["sales.delete"]);
}

#[test]
fn scenario_d_pattern_filter() {
    let names = ["sales.read", "sales.create", "users.read"];
    assert_eq!(
        filter_by_pattern(names, "sales.*"),
        vec!["sales.read", "sales.create"]
    );
}

#[test]
fn unknown_names_never_error_anywhere() {
    let catalog = builtin_catalog().unwrap();
    let authorizer = Authorizer::new(&catalog);
    let none: [&str; 0] = [];

    assert!(!authorizer.has_capability(&none, "nonexistent.capability"));
    assert!(catalog.details("nonexistent").is_none());
    assert!(!catalog.has_children("nonexistent"));
    assert!(catalog.by_category("Nonexistent").is_empty());
}

#[test]
fn decisions_survive_a_cyclic_catalog() {
    let catalog = Catalog::from_toml_str(
        r#"
        [[capabilities]]
        name = "alpha"
        description = "Alpha"
        category = "Broken"
        children = ["beta"]

        [[capabilities]]
        name = "beta"
        description = "Beta"
        category = "Broken"
        children = ["alpha"]
        "#,
    )
    .unwrap();

    // Construction and every decision terminate despite the cycle.
    let authorizer = Authorizer::new(&catalog);
    assert!(authorizer.has_capability(&["alpha"], "beta"));
    assert!(authorizer.has_capability(&["beta"], "alpha"));
    assert!(!authorizer.has_capability(&["alpha"], "gamma"));
}

#[test]
fn catalog_search_over_builtin_names() {
    let catalog = builtin_catalog().unwrap();

    let matches = filter_by_pattern(catalog.names(), "*.approve");
    assert_eq!(matches, vec!["returns.approve", "purchasing.approve"]);

    // Malformed-by-construction patterns cannot occur (everything literal
    // is escaped), so even pathological input just filters.
    assert!(filter_by_pattern(catalog.names(), "((((").is_empty());
}
