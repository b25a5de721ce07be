//! Flags top-level headings with no body.
//!
//! A section is empty when its heading is immediately followed by another
//! heading, at any level, or by the end of the document.

use mdr_ast::{NodeType, TxtNode};

use super::heading_text;
use crate::Issue;
use crate::line::line_of;

pub(super) const RULE_ID: &str = "no-empty-sections";

pub(super) fn check(source: &str, doc: &TxtNode<'_>) -> Vec<Issue> {
    // Reference definitions produce no visible content.
    let blocks: Vec<&TxtNode<'_>> = doc
        .children
        .iter()
        .filter(|node| node.node_type != NodeType::Definition)
        .collect();

    let empty_section = |heading: &TxtNode<'_>| {
        Issue::warning(
            RULE_ID,
            format!("empty section under {:?}", heading_text(heading)),
            line_of(source, heading),
        )
    };

    let mut issues = Vec::new();
    let mut previous: Option<usize> = None;

    for (index, node) in blocks.iter().enumerate() {
        if node.node_type != NodeType::Header {
            continue;
        }
        if let Some(prev) = previous
            && prev + 1 == index
        {
            issues.push(empty_section(blocks[prev]));
        }
        previous = Some(index);
    }

    if let Some(last) = previous
        && last + 1 == blocks.len()
    {
        issues.push(empty_section(blocks[last]));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdr_ast::AstArena;
    use mdr_parser::{MarkdownParser, Parser};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn run(source: &str) -> Vec<(u32, String)> {
        let arena = AstArena::new();
        let doc = MarkdownParser::new().parse(&arena, source).unwrap();
        check(source, &doc)
            .into_iter()
            .map(|issue| (issue.line(), issue.message().to_string()))
            .collect()
    }

    #[test]
    fn test_consecutive_headings() {
        let issues = run("# T\n\n## A\n\n## B\n\nBody\n");

        assert_eq!(
            issues,
            vec![
                (1, "empty section under \"T\"".to_string()),
                (3, "empty section under \"A\"".to_string()),
            ]
        );
    }

    #[test]
    fn test_heading_followed_by_deeper_heading() {
        assert_eq!(
            run("# A\n\n## B\n"),
            vec![
                (1, "empty section under \"A\"".to_string()),
                (3, "empty section under \"B\"".to_string()),
            ]
        );
    }

    #[rstest]
    #[case("## A\n\n# B\n\ntext\n", vec![1])]
    #[case("### A\n\n### B\n\ntext\n", vec![1])]
    #[case("# A\n\n## B\n\n### C\n\ntext\n", vec![1, 3])]
    fn test_heading_level_does_not_matter(#[case] source: &str, #[case] expected: Vec<u32>) {
        let lines: Vec<u32> = run(source).into_iter().map(|(line, _)| line).collect();
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_trailing_heading() {
        let issues = run("# T\n\nContent\n\n## Trailing\n");

        assert_eq!(
            issues,
            vec![(5, "empty section under \"Trailing\"".to_string())]
        );
    }

    #[rstest]
    #[case("")]
    #[case("Just a paragraph.\n")]
    #[case("# A\n\ntext\n\n## B\n\nmore\n")]
    #[case("# A\n\n- item\n")]
    fn test_no_empty_sections(#[case] source: &str) {
        assert_eq!(run(source), vec![]);
    }

    #[test]
    fn test_single_heading_document() {
        assert_eq!(
            run("# Only\n"),
            vec![(1, "empty section under \"Only\"".to_string())]
        );
    }

    #[test]
    fn test_definitions_do_not_count_as_content() {
        let issues = run("# Links\n\n[a]: https://example.com\n\n# Next\n\ntext\n");

        assert_eq!(
            issues,
            vec![(1, "empty section under \"Links\"".to_string())]
        );
    }

    #[test]
    fn test_nested_headings_are_ignored() {
        assert_eq!(run("# A\n\n> ## Quoted\n"), vec![]);
    }
}
