//! Lint orchestrator.

use std::borrow::Cow;
use std::fs;
use std::io::Read;
use std::path::Path;

use mdr_ast::{AstArena, NodeType, Span, TxtNode};
use mdr_parser::{MarkdownParser, Parser};
use tracing::{debug, warn};

use crate::{Issue, LinterConfig, LinterError, Report, Rule};

/// Runs every rule over a document at its default severity.
pub fn lint(source: &[u8]) -> Report {
    Linter::default().lint(source)
}

/// The main linter struct.
///
/// Each call parses the document once into its own arena, runs the enabled
/// rules over the shared read-only tree, and returns the ordered report.
#[derive(Debug, Clone, Default)]
pub struct Linter {
    config: LinterConfig,
}

impl Linter {
    /// Creates a new linter with the given configuration.
    pub fn new(config: LinterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LinterConfig {
        &self.config
    }

    /// Lints raw document bytes. Invalid UTF-8 is replaced, never rejected.
    pub fn lint(&self, source: &[u8]) -> Report {
        let source = decode(source);
        let arena = AstArena::new();
        let doc = parse(&arena, &source);

        let mut issues: Vec<Issue> = Vec::new();
        for rule in Rule::ALL {
            let Some(severity) = self.config.severity_for(rule) else {
                debug!("Rule '{}' disabled", rule);
                continue;
            };

            let found = rule.check(&source, &doc);
            debug!("Rule '{}' found {} issue(s)", rule, found.len());
            issues.extend(found.into_iter().map(|issue| issue.with_severity(severity)));
        }

        Report::from_issues(issues)
    }

    /// Reads and lints a file.
    pub fn lint_file(&self, path: impl AsRef<Path>) -> Result<Report, LinterError> {
        let path = path.as_ref();
        debug!("Linting {}", path.display());
        let bytes = fs::read(path)?;
        Ok(self.lint(&bytes))
    }

    /// Reads a stream to its end and lints it.
    pub fn lint_reader(&self, mut reader: impl Read) -> Result<Report, LinterError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(self.lint(&bytes))
    }
}

pub(crate) fn decode(source: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(source)
}

/// Parses the source; a parser failure yields an empty document.
pub(crate) fn parse<'a>(arena: &'a AstArena, source: &str) -> TxtNode<'a> {
    let parser = MarkdownParser::new();
    match parser.parse(arena, source) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("{} parser failed, linting an empty tree: {}", parser.name(), e);
            TxtNode::new_parent(NodeType::Document, Span::default(), &[])
        }
    }
}
