//! Flags headings that repeat the text of an earlier heading at the same level.

use std::collections::HashMap;
use std::ops::ControlFlow;

use mdr_ast::visitor::walk_node;
use mdr_ast::{TxtNode, VisitResult, Visitor};

use super::heading_text;
use crate::Issue;
use crate::line::line_of;

pub(super) const RULE_ID: &str = "duplicate-heading";

struct DuplicateVisitor<'s> {
    source: &'s str,
    /// `H{level}:{text}` -> line of the first occurrence.
    seen: HashMap<String, u32>,
    issues: Vec<Issue>,
}

impl<'a> Visitor<'a> for DuplicateVisitor<'_> {
    fn visit_header(&mut self, node: &TxtNode<'a>) -> VisitResult {
        let text = heading_text(node);
        let key = format!("H{}:{}", node.depth().unwrap_or_default(), text);
        let line = line_of(self.source, node);

        match self.seen.get(&key) {
            Some(&first) => self.issues.push(Issue::warning(
                RULE_ID,
                format!("duplicate heading {text:?} (first at line {first})"),
                line,
            )),
            None => {
                self.seen.insert(key, line);
            }
        }

        ControlFlow::Continue(())
    }
}

pub(super) fn check(source: &str, doc: &TxtNode<'_>) -> Vec<Issue> {
    let mut visitor = DuplicateVisitor {
        source,
        seen: HashMap::new(),
        issues: Vec::new(),
    };
    let _ = walk_node(&mut visitor, doc);
    visitor.issues
}
