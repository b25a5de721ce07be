//! # mdr_parser
//!
//! Parser abstraction layer for mdr.
//!
//! This crate provides:
//! - A `Parser` trait for turning source text into the arena AST
//! - The built-in Markdown parser using `markdown-rs` (CommonMark + GFM)
//!
//! ## Example
//!
//! ```rust
//! use mdr_parser::{MarkdownParser, Parser};
//! use mdr_ast::{AstArena, NodeType};
//!
//! let arena = AstArena::new();
//! let parser = MarkdownParser::new();
//! let source = "# Hello\n\nThis is a paragraph.";
//!
//! let ast = parser.parse(&arena, source).unwrap();
//! assert_eq!(ast.node_type, NodeType::Document);
//! ```

mod error;
mod markdown;
mod traits;

pub use error::ParseError;
pub use markdown::MarkdownParser;
pub use traits::Parser;
