//! Flags headings that skip one or more levels on the way down.

use std::ops::ControlFlow;

use mdr_ast::visitor::walk_node;
use mdr_ast::{TxtNode, VisitResult, Visitor};

use crate::Issue;
use crate::line::line_of;

pub(super) const RULE_ID: &str = "heading-hierarchy";

struct HierarchyVisitor<'s> {
    source: &'s str,
    previous_level: u8,
    issues: Vec<Issue>,
}

impl<'a> Visitor<'a> for HierarchyVisitor<'_> {
    fn visit_header(&mut self, node: &TxtNode<'a>) -> VisitResult {
        let level = node.depth().unwrap_or_default();

        if self.previous_level > 0 && level > self.previous_level + 1 {
            self.issues.push(Issue::warning(
                RULE_ID,
                format!(
                    "heading level skipped from H{} to H{}",
                    self.previous_level, level
                ),
                line_of(self.source, node),
            ));
        }
        self.previous_level = level;

        ControlFlow::Continue(())
    }
}

pub(super) fn check(source: &str, doc: &TxtNode<'_>) -> Vec<Issue> {
    let mut visitor = HierarchyVisitor {
        source,
        previous_level: 0,
        issues: Vec::new(),
    };
    let _ = walk_node(&mut visitor, doc);
    visitor.issues
}
