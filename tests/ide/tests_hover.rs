//! Hover tests for the IDE layer.

use arkide::catalog::Catalog;
use arkide::ide::hover;

use crate::helpers::injection_helpers::*;
use crate::helpers::source_fixtures::*;

#[test]
fn test_hover_keyword_shows_documentation() {
    let injection = injection(SCOPES, "string", 0);
    let result = hover(Catalog::builtin(), &injection, 0.into()).unwrap().unwrap();
    let doc = Catalog::builtin().documentation("string").unwrap();
    assert!(result.contents.contains(&doc));
    assert_eq!(&SCOPES[result.range], "string");
}

#[test]
fn test_hover_alias_in_dependent_definition() {
    let injection = injection(SCOPES, "User[]", 0);
    let result = hover(Catalog::builtin(), &injection, 4.into()).unwrap().unwrap();
    assert!(result.contents.starts_with("**User**: type alias"));
    assert!(result.contents.contains("User: { id: \"Id\", friends: \"Id[]\" },"));
    assert_eq!(result.start_line, 15);
}

#[test]
fn test_hover_unknown_identifier_is_none() {
    let host = "const t = type(\"Nope\")";
    let injection = injection(host, "Nope", 0);
    assert!(hover(Catalog::builtin(), &injection, 1.into()).unwrap().is_none());
}

#[test]
fn test_hover_subtype_without_parent() {
    let injection = injection(SCOPES, "string.email", 0);
    // `email` is not a catalog subtype; hover on `string` instead
    let result = hover(Catalog::builtin(), &injection, 3.into()).unwrap().unwrap();
    assert!(result.contents.starts_with("**string**"));
}
