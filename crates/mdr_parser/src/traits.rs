//! Parser trait definition.

use mdr_ast::{AstArena, TxtNode};

use crate::ParseError;

/// Trait for parsing source text into the arena AST.
///
/// Implementations must return a tree rooted at a `Document` node. Lint rules
/// rely on the tree being complete for any input the implementation accepts.
pub trait Parser {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Parses the source text into an AST allocated in `arena`.
    fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> Result<TxtNode<'a>, ParseError>;
}
