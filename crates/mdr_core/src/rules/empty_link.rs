//! Flags links whose destination is empty.
//!
//! Reference links (`[text][id]`) are checked against the destination of the
//! definition they resolve to.

use std::collections::HashMap;
use std::ops::ControlFlow;

use mdr_ast::visitor::{walk_children, walk_node};
use mdr_ast::{TxtNode, VisitResult, Visitor};

use crate::Issue;
use crate::line::line_of;

pub(super) const RULE_ID: &str = "empty-link";

const MESSAGE: &str = "link has empty destination";

/// Maps definition identifiers to their destination. The first definition of
/// an identifier wins.
#[derive(Default)]
struct DefinitionCollector<'a> {
    urls: HashMap<&'a str, &'a str>,
}

impl<'a> Visitor<'a> for DefinitionCollector<'a> {
    fn visit_definition(&mut self, node: &TxtNode<'a>) -> VisitResult {
        if let (Some(identifier), Some(url)) = (node.identifier(), node.url()) {
            self.urls.entry(identifier).or_insert(url);
        }
        ControlFlow::Continue(())
    }
}

struct EmptyLinkVisitor<'a, 's> {
    source: &'s str,
    definitions: HashMap<&'a str, &'a str>,
    issues: Vec<Issue>,
}

impl<'a> EmptyLinkVisitor<'a, '_> {
    fn report(&mut self, node: &TxtNode<'a>) {
        self.issues
            .push(Issue::error(RULE_ID, MESSAGE, line_of(self.source, node)));
    }
}

impl<'a> Visitor<'a> for EmptyLinkVisitor<'a, '_> {
    fn visit_link(&mut self, node: &TxtNode<'a>) -> VisitResult {
        if node.url().is_some_and(str::is_empty) {
            self.report(node);
        }
        walk_children(self, node)
    }

    fn visit_link_reference(&mut self, node: &TxtNode<'a>) -> VisitResult {
        let resolved = node
            .identifier()
            .and_then(|identifier| self.definitions.get(identifier));
        if resolved.is_some_and(|url| url.is_empty()) {
            self.report(node);
        }
        walk_children(self, node)
    }
}

pub(super) fn check<'a>(source: &str, doc: &TxtNode<'a>) -> Vec<Issue> {
    let mut definitions = DefinitionCollector::default();
    let _ = walk_node(&mut definitions, doc);

    let mut visitor = EmptyLinkVisitor {
        source,
        definitions: definitions.urls,
        issues: Vec::new(),
    };
    let _ = walk_node(&mut visitor, doc);
    visitor.issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;
    use mdr_ast::AstArena;
    use mdr_parser::{MarkdownParser, Parser};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn run(source: &str) -> Vec<Issue> {
        let arena = AstArena::new();
        let doc = MarkdownParser::new().parse(&arena, source).unwrap();
        check(source, &doc)
    }

    #[test]
    fn test_empty_destination() {
        let issues = run("[x]()\n");

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule(), "empty-link");
        assert_eq!(issues[0].message(), "link has empty destination");
        assert_eq!(issues[0].severity(), Severity::Error);
        assert_eq!(issues[0].line(), 1);
    }

    #[rstest]
    #[case("[x](http://example.com)\n")]
    #[case("![alt]()\n")]
    #[case("<https://example.com>\n")]
    #[case("[docs][d]\n\n[d]: https://docs.rs\n")]
    #[case("")]
    fn test_valid_links(#[case] source: &str) {
        assert!(run(source).is_empty());
    }

    #[test]
    fn test_line_comes_from_link_text() {
        let issues = run("# Title\n\nSome text and [a link]() here.\n");

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line(), 3);
    }

    #[test]
    fn test_link_without_text_leaf_has_line_zero() {
        let issues = run("[![img](a.png)]()\n");

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line(), 0);
    }

    #[test]
    fn test_links_in_headings_and_lists() {
        let issues = run("## See [this]()\n\n- item [that]()\n");
        let lines: Vec<u32> = issues.iter().map(Issue::line).collect();

        assert_eq!(lines, vec![1, 3]);
    }

    #[test]
    fn test_reference_to_empty_definition() {
        let issues = run("[docs][d]\n\n[d]: <>\n");

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line(), 1);
    }
}
