//! Source line resolution for AST nodes.
//!
//! Only block nodes are trusted to carry a byte span. Inline nodes borrow the
//! line of their first text leaf, and anything else resolves to `0`.

use mdr_ast::TxtNode;

/// Returns the 1-based line that contains the byte at `offset`.
///
/// Offsets past the end of the source are clamped.
pub fn line_at(source: &str, offset: u32) -> u32 {
    let end = (offset as usize).min(source.len());
    let newlines = source.as_bytes()[..end]
        .iter()
        .filter(|&&b| b == b'\n')
        .count();
    newlines as u32 + 1
}

/// Returns the 1-based source line of `node`, or `0` if it cannot be resolved.
pub fn line_of(source: &str, node: &TxtNode<'_>) -> u32 {
    if node.node_type.is_block() && !node.span.is_empty() {
        return line_at(source, node.span.start);
    }

    node.children
        .iter()
        .find(|child| child.node_type.is_text_leaf())
        .map_or(0, |leaf| line_at(source, leaf.span.start))
}
