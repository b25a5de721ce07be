//! Markdown parser using markdown-rs (wooorm/markdown-rs).
//!
//! This parser converts Markdown to the arena AST using the `markdown` crate,
//! which provides mdast-compatible output.

use markdown::mdast::Node;
use markdown::{ParseOptions, to_mdast};
use mdr_ast::{AstArena, NodeData, NodeType, Span, TxtNode};

use crate::{ParseError, Parser};

/// Markdown parser implementation.
///
/// Parses CommonMark with the GFM extensions (tables, strikethrough,
/// autolinks, footnotes, task lists).
pub struct MarkdownParser;

impl MarkdownParser {
    /// Creates a new Markdown parser with default options.
    pub fn new() -> Self {
        Self
    }

    fn default_options() -> ParseOptions {
        ParseOptions::gfm()
    }

    /// Converts an mdast node to TxtNode.
    fn convert_node<'a>(&self, arena: &'a AstArena, node: &Node) -> TxtNode<'a> {
        match node {
            Node::Root(root) => {
                self.create_parent_node(arena, node, &root.children, NodeType::Document)
            }

            Node::Paragraph(para) => {
                self.create_parent_node(arena, node, &para.children, NodeType::Paragraph)
            }

            Node::Heading(heading) => {
                let mut txt =
                    self.create_parent_node(arena, node, &heading.children, NodeType::Header);
                txt.data = NodeData::header(heading.depth);
                txt
            }

            Node::Text(text) => self.create_text_node(arena, node, &text.value, NodeType::Str),

            Node::Emphasis(em) => {
                self.create_parent_node(arena, node, &em.children, NodeType::Emphasis)
            }

            Node::Strong(strong) => {
                self.create_parent_node(arena, node, &strong.children, NodeType::Strong)
            }

            Node::InlineCode(code) => {
                self.create_text_node(arena, node, &code.value, NodeType::Code)
            }

            Node::Code(code) => {
                let mut txt = self.create_text_node(arena, node, &code.value, NodeType::CodeBlock);
                txt.data = NodeData::code_block(code.lang.as_deref().map(|l| arena.alloc_str(l)));
                txt
            }

            Node::Link(link) => {
                let mut txt = self.create_parent_node(arena, node, &link.children, NodeType::Link);
                let url = arena.alloc_str(&link.url);
                let title = link.title.as_deref().map(|t| arena.alloc_str(t));
                txt.data = NodeData::link(url, title);
                txt
            }

            Node::Image(image) => {
                let mut txt = self.create_leaf_node(node, NodeType::Image);
                let url = arena.alloc_str(&image.url);
                let title = image.title.as_deref().map(|t| arena.alloc_str(t));
                txt.data = NodeData::link(url, title);
                txt
            }

            Node::List(list) => {
                let mut txt = self.create_parent_node(arena, node, &list.children, NodeType::List);
                txt.data = NodeData::list(list.ordered);
                txt
            }

            Node::ListItem(item) => {
                self.create_parent_node(arena, node, &item.children, NodeType::ListItem)
            }

            Node::Blockquote(quote) => {
                self.create_parent_node(arena, node, &quote.children, NodeType::BlockQuote)
            }

            Node::ThematicBreak(_) => self.create_leaf_node(node, NodeType::HorizontalRule),

            Node::Break(_) => self.create_leaf_node(node, NodeType::Break),

            Node::Html(html) => self.create_text_node(arena, node, &html.value, NodeType::Html),

            Node::Delete(del) => {
                self.create_parent_node(arena, node, &del.children, NodeType::Delete)
            }

            // Table support (GFM)
            Node::Table(table) => {
                self.create_parent_node(arena, node, &table.children, NodeType::Table)
            }

            Node::TableRow(row) => {
                self.create_parent_node(arena, node, &row.children, NodeType::TableRow)
            }

            Node::TableCell(cell) => {
                self.create_parent_node(arena, node, &cell.children, NodeType::TableCell)
            }

            // Footnotes (GFM)
            Node::FootnoteDefinition(def) => {
                let mut txt = self.create_parent_node(
                    arena,
                    node,
                    &def.children,
                    NodeType::FootnoteDefinition,
                );
                txt.data = self.reference_data(arena, &def.identifier, def.label.as_deref());
                txt
            }

            Node::FootnoteReference(reference) => {
                let mut txt = self.create_leaf_node(node, NodeType::FootnoteReference);
                txt.data =
                    self.reference_data(arena, &reference.identifier, reference.label.as_deref());
                txt
            }

            // Reference nodes
            Node::LinkReference(reference) => {
                let mut txt = self.create_parent_node(
                    arena,
                    node,
                    &reference.children,
                    NodeType::LinkReference,
                );
                txt.data =
                    self.reference_data(arena, &reference.identifier, reference.label.as_deref());
                txt
            }

            Node::ImageReference(reference) => {
                let mut txt = self.create_leaf_node(node, NodeType::ImageReference);
                txt.data =
                    self.reference_data(arena, &reference.identifier, reference.label.as_deref());
                txt
            }

            Node::Definition(def) => {
                let mut txt = self.create_leaf_node(node, NodeType::Definition);
                txt.data = NodeData::definition(
                    arena.alloc_str(&def.identifier),
                    arena.alloc_str(&def.url),
                    def.title.as_deref().map(|t| arena.alloc_str(t)),
                );
                txt
            }

            // Fallback for constructs not enabled by the GFM options
            _ => self.create_leaf_node(node, NodeType::Html),
        }
    }

    fn create_parent_node<'a>(
        &self,
        arena: &'a AstArena,
        node: &Node,
        children: &[Node],
        node_type: NodeType,
    ) -> TxtNode<'a> {
        let children = self.convert_children(arena, children);
        TxtNode::new_parent(node_type, self.node_span(node), children)
    }

    fn create_text_node<'a>(
        &self,
        arena: &'a AstArena,
        node: &Node,
        text: &str,
        node_type: NodeType,
    ) -> TxtNode<'a> {
        let value = arena.alloc_str(text);
        TxtNode::new_text(node_type, self.node_span(node), value)
    }

    fn create_leaf_node<'a>(&self, node: &Node, node_type: NodeType) -> TxtNode<'a> {
        TxtNode::new_leaf(node_type, self.node_span(node))
    }

    fn reference_data<'a>(
        &self,
        arena: &'a AstArena,
        identifier: &str,
        label: Option<&str>,
    ) -> NodeData<'a> {
        NodeData::reference(
            arena.alloc_str(identifier),
            label.map(|l| arena.alloc_str(l)),
        )
    }

    /// Converts a list of mdast children to a TxtNode slice.
    fn convert_children<'a>(&self, arena: &'a AstArena, children: &[Node]) -> &'a [TxtNode<'a>] {
        arena.alloc_slice_fill_iter(children.iter().map(|child| self.convert_node(arena, child)))
    }

    /// Gets the span for an mdast node; nodes without a position get an empty span.
    fn node_span(&self, node: &Node) -> Span {
        match node.position() {
            Some(pos) => Span::new(pos.start.offset as u32, pos.end.offset as u32),
            None => Span::default(),
        }
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for MarkdownParser {
    fn name(&self) -> &str {
        "markdown"
    }

    fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> Result<TxtNode<'a>, ParseError> {
        let options = Self::default_options();
        let mdast =
            to_mdast(source, &options).map_err(|e| ParseError::invalid_source(e.to_string()))?;

        Ok(self.convert_node(arena, &mdast))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse<'a>(arena: &'a AstArena, source: &str) -> TxtNode<'a> {
        MarkdownParser::new().parse(arena, source).unwrap()
    }

    #[test]
    fn test_parse_empty_document() {
        let arena = AstArena::new();
        let ast = parse(&arena, "");

        assert_eq!(ast.node_type, NodeType::Document);
        assert!(ast.children.is_empty());
    }

    #[test]
    fn test_parse_heading_levels() {
        let arena = AstArena::new();
        let ast = parse(&arena, "# H1\n## H2\n### H3\n#### H4\n##### H5\n###### H6");

        assert_eq!(ast.children.len(), 6);
        for (i, child) in ast.children.iter().enumerate() {
            assert_eq!(child.node_type, NodeType::Header);
            assert_eq!(child.depth(), Some((i + 1) as u8));
        }
    }

    #[test]
    fn test_heading_span_starts_at_marker() {
        let arena = AstArena::new();
        let source = "Intro\n\n## Section\n";
        let ast = parse(&arena, source);

        let heading = &ast.children[1];
        assert_eq!(heading.node_type, NodeType::Header);
        assert_eq!(heading.span.start, 7);
        assert_eq!(&source[heading.span.start as usize..][..2], "##");
    }

    #[test]
    fn test_parse_link() {
        let arena = AstArena::new();
        let ast = parse(&arena, "[Example](https://example.com \"Title\")");

        // Document > Paragraph > Link > Str
        let link = &ast.children[0].children[0];
        assert_eq!(link.node_type, NodeType::Link);
        assert_eq!(link.url(), Some("https://example.com"));
        assert_eq!(link.children[0].text(), Some("Example"));
        match link.data {
            NodeData::Link(data) => assert_eq!(data.title, Some("Title")),
            _ => panic!("Expected Link data"),
        }
    }

    #[test]
    fn test_parse_link_with_empty_destination() {
        let arena = AstArena::new();
        let ast = parse(&arena, "[x]()\n");

        let link = &ast.children[0].children[0];
        assert_eq!(link.node_type, NodeType::Link);
        assert_eq!(link.url(), Some(""));
    }

    #[test]
    fn test_parse_reference_link_and_definition() {
        let arena = AstArena::new();
        let ast = parse(&arena, "[Docs][docs]\n\n[docs]: https://docs.rs\n");

        let reference = &ast.children[0].children[0];
        assert_eq!(reference.node_type, NodeType::LinkReference);
        assert_eq!(reference.identifier(), Some("docs"));

        let definition = &ast.children[1];
        assert_eq!(definition.node_type, NodeType::Definition);
        assert_eq!(definition.identifier(), Some("docs"));
        assert_eq!(definition.url(), Some("https://docs.rs"));
    }

    #[test]
    fn test_parse_emphasis_inside_heading() {
        let arena = AstArena::new();
        let ast = parse(&arena, "# Title with **bold** text");

        let heading = &ast.children[0];
        let kinds: Vec<NodeType> = heading.children.iter().map(|c| c.node_type).collect();
        assert_eq!(kinds, vec![NodeType::Str, NodeType::Strong, NodeType::Str]);
    }

    #[test]
    fn test_parse_code_block() {
        let arena = AstArena::new();
        let ast = parse(&arena, "```rust\nfn main() {}\n```");

        let code_block = &ast.children[0];
        assert_eq!(code_block.node_type, NodeType::CodeBlock);
        assert!(matches!(code_block.data, NodeData::CodeBlock(Some("rust"))));
        assert_eq!(code_block.text(), Some("fn main() {}"));
    }

    #[test]
    fn test_parse_inline_code() {
        let arena = AstArena::new();
        let ast = parse(&arena, "Use `code` here");

        let paragraph = &ast.children[0];
        assert!(
            paragraph
                .children
                .iter()
                .any(|c| c.node_type == NodeType::Code && c.text() == Some("code"))
        );
    }

    #[test]
    fn test_parse_lists() {
        let arena = AstArena::new();
        let ast = parse(&arena, "- Item 1\n- Item 2\n\n1. First\n2. Second");

        let unordered = &ast.children[0];
        assert_eq!(unordered.node_type, NodeType::List);
        assert!(matches!(unordered.data, NodeData::List(false)));
        assert_eq!(unordered.children.len(), 2);

        let ordered = &ast.children[1];
        assert!(matches!(ordered.data, NodeData::List(true)));
    }

    #[test]
    fn test_parse_blockquote_and_rule() {
        let arena = AstArena::new();
        let ast = parse(&arena, "> quoted\n\n---\n");

        assert_eq!(ast.children[0].node_type, NodeType::BlockQuote);
        assert_eq!(ast.children[1].node_type, NodeType::HorizontalRule);
    }

    #[test]
    fn test_parse_table() {
        let arena = AstArena::new();
        let ast = parse(&arena, "| A | B |\n|---|---|\n| 1 | 2 |");

        let table = &ast.children[0];
        assert_eq!(table.node_type, NodeType::Table);
        assert_eq!(table.children[0].node_type, NodeType::TableRow);
        assert_eq!(table.children[0].children[0].node_type, NodeType::TableCell);
    }

    #[test]
    fn test_parse_image() {
        let arena = AstArena::new();
        let ast = parse(&arena, "![Alt text](image.png)");

        let image = &ast.children[0].children[0];
        assert_eq!(image.node_type, NodeType::Image);
        assert_eq!(image.url(), Some("image.png"));
    }

    #[test]
    fn test_parser_name() {
        assert_eq!(MarkdownParser.name(), "markdown");
    }
}
