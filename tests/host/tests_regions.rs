//! Region tree tests over host fixtures.

use arkide::host::{MAX_ANCESTOR_DEPTH, RegionTree};

use crate::helpers::injection_helpers::host_offset;
use crate::helpers::source_fixtures::*;

#[test]
fn test_fixture_regions() {
    let tree = RegionTree::build(SCOPES);
    // import list, coolScope, User, UsersById, group, anotherScope, Person
    assert_eq!(tree.len(), 7);
    // The import list has no keys and UsersById only has a quoted one
    let scope_like: Vec<_> = tree.ids().filter(|&id| tree.is_scope_like(id)).collect();
    assert_eq!(scope_like, vec![1, 2, 4, 5, 6]);
}

#[test]
fn test_user_region_nesting() {
    let tree = RegionTree::build(SCOPES);
    let id = tree
        .ids()
        .find(|&id| tree.region_text(id).starts_with("{ id: \"Id\""))
        .unwrap();
    assert!(tree.get(id).unwrap().range().contains(host_offset(SCOPES, "friends")));
    assert_eq!(tree.ancestors(id).count(), 1);
}

#[test]
fn test_ancestor_walk_is_bounded() {
    let text = nested_braces(40, "x");
    let tree = RegionTree::build(&text);
    // Pre-order: the deepest region of a single chain comes last
    let innermost = tree.len() - 1;
    assert!(tree.region_text(innermost).contains('x'));
    assert_eq!(tree.ancestors(innermost).count(), MAX_ANCESTOR_DEPTH);
}

#[test]
fn test_unbalanced_text() {
    let tree = RegionTree::build("} { a: 1 } {");
    assert_eq!(tree.len(), 2);
    assert!(tree.get(0).unwrap().closed);
    assert!(!tree.get(1).unwrap().closed);
}
