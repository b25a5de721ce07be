//! Lint findings and the ordered report they are collected into.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity level for issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A structurally broken element, such as an unusable link.
    Error,
    /// A style or structure smell that does not break the document.
    Warning,
}

impl Severity {
    /// Returns the lowercase name used in reports.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding produced by a lint rule.
///
/// `line` is 1-based; `0` means the line could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Issue {
    rule: String,
    message: String,
    line: u32,
    severity: Severity,
}

impl Issue {
    /// Creates a new issue.
    pub fn new(
        rule: impl Into<String>,
        message: impl Into<String>,
        line: u32,
        severity: Severity,
    ) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
            line,
            severity,
        }
    }

    /// Creates a warning.
    pub fn warning(rule: impl Into<String>, message: impl Into<String>, line: u32) -> Self {
        Self::new(rule, message, line, Severity::Warning)
    }

    /// Creates an error.
    pub fn error(rule: impl Into<String>, message: impl Into<String>, line: u32) -> Self {
        Self::new(rule, message, line, Severity::Error)
    }

    /// Returns the same issue reported at a different severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// The id of the rule that produced this issue.
    pub fn rule(&self) -> &str {
        &self.rule
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: [{}] {} ({})",
            self.line, self.severity, self.message, self.rule
        )
    }
}

/// The ordered result of one lint run.
///
/// Issues are sorted by ascending line. The sort is stable, so issues on the
/// same line keep the order in which their rules ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    issues: Vec<Issue>,
}

impl Report {
    /// Builds a report from the concatenated output of every rule.
    pub fn from_issues(mut issues: Vec<Issue>) -> Self {
        issues.sort_by_key(Issue::line);
        Self { issues }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.issues.iter()
    }
}

impl IntoIterator for Report {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

impl<'r> IntoIterator for &'r Report {
    type Item = &'r Issue;
    type IntoIter = std::slice::Iter<'r, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_issue_display() {
        let issue = Issue::error("empty-link", "link has empty destination", 4);
        assert_eq!(
            issue.to_string(),
            "line 4: [error] link has empty destination (empty-link)"
        );
    }

    #[test]
    fn test_issue_with_severity_keeps_content() {
        let issue = Issue::warning("trailing-whitespace", "line has trailing whitespace", 2)
            .with_severity(Severity::Error);

        assert_eq!(issue.rule(), "trailing-whitespace");
        assert_eq!(issue.message(), "line has trailing whitespace");
        assert_eq!(issue.line(), 2);
        assert_eq!(issue.severity(), Severity::Error);
    }

    #[test]
    fn test_report_sorts_by_line() {
        let report = Report::from_issues(vec![
            Issue::warning("b", "third", 9),
            Issue::warning("a", "first", 1),
            Issue::warning("c", "second", 0),
        ]);

        let lines: Vec<u32> = report.iter().map(Issue::line).collect();
        assert_eq!(lines, vec![0, 1, 9]);
    }

    #[test]
    fn test_report_keeps_rule_order_on_same_line() {
        let report = Report::from_issues(vec![
            Issue::warning("heading-hierarchy", "skip", 3),
            Issue::warning("duplicate-heading", "dup", 3),
            Issue::warning("trailing-whitespace", "ws", 1),
            Issue::warning("no-empty-sections", "empty", 3),
        ]);

        let rules: Vec<&str> = report.iter().map(Issue::rule).collect();
        assert_eq!(
            rules,
            vec![
                "trailing-whitespace",
                "heading-hierarchy",
                "duplicate-heading",
                "no-empty-sections",
            ]
        );
    }

    #[test]
    fn test_default_report_is_empty() {
        assert!(Report::default().is_empty());
        assert_eq!(Report::default().len(), 0);
    }

    #[test]
    fn test_issue_serialization() {
        let issue = Issue::warning("duplicate-heading", "duplicate heading \"A\"", 3);
        let json = serde_json::to_value(&issue).unwrap();

        assert_eq!(json["rule"], "duplicate-heading");
        assert_eq!(json["line"], 3);
        assert_eq!(json["severity"], "warning");
    }
}
