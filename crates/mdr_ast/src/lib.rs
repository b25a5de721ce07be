//! # mdr_ast
//!
//! Markdown AST definitions for mdr.
//!
//! This crate provides the Abstract Syntax Tree (AST) types consumed by the
//! structural lint rules and the statistics collector. The tree is immutable
//! once built and lives in a single arena per document.
//!
//! ## Architecture
//!
//! - Uses `bumpalo` for Arena allocation
//! - All AST nodes for one document are allocated in the same arena
//! - Memory is freed all at once when the lint call returns
//!
//! ## Example
//!
//! ```rust
//! use mdr_ast::{AstArena, TxtNode, NodeType, Span};
//!
//! let arena = AstArena::new();
//!
//! let text = arena.alloc(TxtNode::new_text(NodeType::Str, Span::new(2, 7), "Hello"));
//! let children = arena.alloc_slice_copy(&[*text]);
//! let heading = TxtNode::new_parent(NodeType::Header, Span::new(0, 7), children);
//!
//! assert!(heading.node_type.is_block());
//! ```

mod arena;
mod node;
mod node_type;
mod span;
pub mod visitor;

pub use arena::AstArena;
pub use node::{DefinitionData, LinkData, NodeData, ReferenceData, TxtNode};
pub use node_type::NodeType;
pub use span::Span;

pub use visitor::{VisitResult, Visitor};
