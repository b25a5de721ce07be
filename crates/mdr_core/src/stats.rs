//! Document statistics.

use std::fmt;
use std::fs;
use std::io::Read;
use std::ops::ControlFlow;
use std::path::Path;

use mdr_ast::visitor::{walk_children, walk_node};
use mdr_ast::{AstArena, TxtNode, VisitResult, Visitor};
use serde::Serialize;

use crate::LinterError;
use crate::linter::{decode, parse};

const WORDS_PER_MINUTE: f64 = 200.0;

/// Word, line and element counts for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub words: usize,
    pub lines: usize,
    pub headings: usize,
    pub links: usize,
    pub images: usize,
    pub code_blocks: usize,
    /// Estimated reading time, e.g. `"< 1 min"` or `"3 min"`.
    pub reading_time: String,
}

impl Stats {
    /// Computes statistics for raw document bytes.
    pub fn from_source(source: &[u8]) -> Self {
        let text = decode(source);

        let mut lines = source.iter().filter(|&&b| b == b'\n').count();
        if source.last().is_some_and(|&b| b != b'\n') {
            lines += 1;
        }
        let words = text.split_whitespace().count();

        let arena = AstArena::new();
        let doc = parse(&arena, &text);
        let mut counter = ElementCounter::default();
        let _ = walk_node(&mut counter, &doc);

        Self {
            words,
            lines,
            headings: counter.headings,
            links: counter.links,
            images: counter.images,
            code_blocks: counter.code_blocks,
            reading_time: reading_time(words),
        }
    }

    /// Reads a file and computes its statistics.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LinterError> {
        let bytes = fs::read(path)?;
        Ok(Self::from_source(&bytes))
    }

    /// Reads a stream to its end and computes its statistics.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, LinterError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::from_source(&bytes))
    }
}

fn reading_time(words: usize) -> String {
    let minutes = words as f64 / WORDS_PER_MINUTE;
    if minutes < 1.0 {
        "< 1 min".to_string()
    } else {
        format!("{} min", minutes.ceil() as u64)
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Words:        {}", self.words)?;
        writeln!(f, "  Lines:        {}", self.lines)?;
        writeln!(f, "  Headings:     {}", self.headings)?;
        writeln!(f, "  Links:        {}", self.links)?;
        writeln!(f, "  Images:       {}", self.images)?;
        writeln!(f, "  Code blocks:  {}", self.code_blocks)?;
        write!(f, "  Reading time: {}", self.reading_time)
    }
}

#[derive(Default)]
struct ElementCounter {
    headings: usize,
    links: usize,
    images: usize,
    code_blocks: usize,
}

impl<'a> Visitor<'a> for ElementCounter {
    fn visit_header(&mut self, node: &TxtNode<'a>) -> VisitResult {
        self.headings += 1;
        walk_children(self, node)
    }

    fn visit_link(&mut self, node: &TxtNode<'a>) -> VisitResult {
        self.links += 1;
        walk_children(self, node)
    }

    fn visit_link_reference(&mut self, node: &TxtNode<'a>) -> VisitResult {
        self.links += 1;
        walk_children(self, node)
    }

    fn visit_image(&mut self, _node: &TxtNode<'a>) -> VisitResult {
        self.images += 1;
        ControlFlow::Continue(())
    }

    fn visit_image_reference(&mut self, _node: &TxtNode<'a>) -> VisitResult {
        self.images += 1;
        ControlFlow::Continue(())
    }

    fn visit_code_block(&mut self, _node: &TxtNode<'a>) -> VisitResult {
        self.code_blocks += 1;
        ControlFlow::Continue(())
    }
}
