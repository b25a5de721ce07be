//! Built-in structural rules.
//!
//! Every rule is a pure function from the source text and the parsed document
//! to a list of issues. Rules share no state, so any subset can run in any
//! order without changing each other's findings.

mod duplicate_heading;
mod empty_link;
mod empty_sections;
mod heading_hierarchy;
mod trailing_whitespace;

use std::fmt;
use std::ops::ControlFlow;

use mdr_ast::visitor::walk_children;
use mdr_ast::{TxtNode, VisitResult, Visitor};

use crate::{Issue, Severity};

/// The registry of built-in rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    HeadingHierarchy,
    DuplicateHeading,
    EmptyLink,
    TrailingWhitespace,
    EmptySections,
}

impl Rule {
    /// All rules, in the order the linter runs them.
    pub const ALL: [Rule; 5] = [
        Rule::HeadingHierarchy,
        Rule::DuplicateHeading,
        Rule::EmptyLink,
        Rule::TrailingWhitespace,
        Rule::EmptySections,
    ];

    /// Returns the stable identifier reported with each issue.
    pub const fn id(self) -> &'static str {
        match self {
            Rule::HeadingHierarchy => heading_hierarchy::RULE_ID,
            Rule::DuplicateHeading => duplicate_heading::RULE_ID,
            Rule::EmptyLink => empty_link::RULE_ID,
            Rule::TrailingWhitespace => trailing_whitespace::RULE_ID,
            Rule::EmptySections => empty_sections::RULE_ID,
        }
    }

    /// Looks up a rule by its identifier.
    pub fn from_id(id: &str) -> Option<Rule> {
        Rule::ALL.into_iter().find(|rule| rule.id() == id)
    }

    /// Returns the severity the rule reports with when not configured.
    pub const fn default_severity(self) -> Severity {
        match self {
            Rule::EmptyLink => Severity::Error,
            _ => Severity::Warning,
        }
    }

    /// Runs the rule over one parsed document.
    pub fn check(self, source: &str, doc: &TxtNode<'_>) -> Vec<Issue> {
        match self {
            Rule::HeadingHierarchy => heading_hierarchy::check(source, doc),
            Rule::DuplicateHeading => duplicate_heading::check(source, doc),
            Rule::EmptyLink => empty_link::check(source, doc),
            Rule::TrailingWhitespace => trailing_whitespace::check(source),
            Rule::EmptySections => empty_sections::check(source, doc),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Collects the literal text under a node, dropping inline markup.
#[derive(Default)]
struct TextCollector {
    text: String,
}

impl<'a> Visitor<'a> for TextCollector {
    fn visit_str(&mut self, node: &TxtNode<'a>) -> VisitResult {
        self.text.push_str(node.text().unwrap_or_default());
        ControlFlow::Continue(())
    }

    fn visit_code(&mut self, node: &TxtNode<'a>) -> VisitResult {
        self.text.push_str(node.text().unwrap_or_default());
        ControlFlow::Continue(())
    }
}

/// Returns the plain text of a heading.
pub(crate) fn heading_text(heading: &TxtNode<'_>) -> String {
    let mut collector = TextCollector::default();
    let _ = walk_children(&mut collector, heading);
    collector.text
}
