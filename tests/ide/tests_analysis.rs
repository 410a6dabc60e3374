//! End-to-end tests through AnalysisHost.

use arkide::AnalysisError;
use arkide::ide::AnalysisHost;

use crate::helpers::injection_helpers::*;
use crate::helpers::source_fixtures::*;

#[test]
fn test_every_literal_resolves_or_misses_cleanly() {
    let host = AnalysisHost::new(SCOPES);
    let analysis = host.analysis();
    for content in ["Id", "Id[]", "User | undefined", "User[]", "Email", "string"] {
        let literal = literal(SCOPES, content, 0);
        let inside = literal.start() + offset(1);
        let result = analysis.goto_definition(literal, inside).unwrap();
        if content == "string" {
            assert!(result.is_empty());
        } else {
            assert!(!result.is_empty(), "{content}");
        }
    }
}

#[test]
fn test_aliases_at_host_offset() {
    let host = AnalysisHost::new(SCOPES);
    let names: Vec<_> = host
        .analysis()
        .aliases_at(host_offset(SCOPES, "\"Email\""))
        .into_iter()
        .map(|a| a.name.to_string())
        .collect();
    assert_eq!(names, vec!["Email", "Person"]);
}

#[test]
fn test_set_text_replaces_document() {
    let mut host = AnalysisHost::new(SCOPES);
    host.set_text(ONE_LINE_SCOPE);
    let analysis = host.analysis();
    let literal = literal(ONE_LINE_SCOPE, "Id[]", 0);
    let tokens = analysis.semantic_tokens(literal).unwrap();
    assert_eq!(tokens[0].line, 0);
}

#[test]
fn test_non_literal_range_is_rejected() {
    let host = AnalysisHost::new(SCOPES);
    let analysis = host.analysis();
    let range = arkide::TextRange::at(host_offset(SCOPES, "coolScope"), offset(9));
    assert!(matches!(
        analysis.semantic_tokens(range),
        Err(AnalysisError::InvalidLiteral { .. })
    ));
}

#[test]
fn test_literal_at_and_line_col() {
    let host = AnalysisHost::new(SCOPES);
    let analysis = host.analysis();
    let at = host_offset(SCOPES, "\"Id[]\"") + offset(2);
    let literal = analysis.literal_at(at).unwrap();
    assert_eq!(&SCOPES[literal], "\"Id[]\"");
    assert_eq!(analysis.line_col(literal.start()).line, 6);
}
