//! Sylva: schema-driven traversal and querying of syntax trees.
//!
//! # Example
//!
//! ```
//! use sylva_core::estree;
//! use sylva_lib::ast::Ast;
//! use sylva_lib::TreeView;
//!
//! let json = r#"{ "type": "Program", "start": 0, "end": 2, "body": [
//!     { "type": "EmptyStatement", "start": 0, "end": 1 },
//!     { "type": "EmptyStatement", "start": 1, "end": 2 }
//! ] }"#;
//!
//! let ast = Ast::from_json(json, &estree::SCHEMA).expect("valid tree");
//! let tree = TreeView::new(&ast, &estree::SCHEMA);
//! assert_eq!(tree.count_nodes(ast.root()), 3);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod comments;
pub mod dump;
pub mod query;
pub mod tokens;
pub mod walk;

#[cfg(test)]
mod test_utils;

pub use ast::{Ast, AstBuilder, NodeId, NodeRef, Scalar, Slot};
pub use comments::{Attachment, Comment, CommentKind, CommentMap, Relation, attach_comments};
pub use query::{ParentIndex, TreeView};
pub use tokens::{Token, TokenIndex, TokenKind};
pub use walk::{ChildSlot, TraversalContext, Visit};

/// Errors raised while loading a tree from JSON.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("tree JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// An object without a `type` string where a node was expected.
    #[error("expected a node object with a `type` string at `{path}`")]
    MissingType { path: String },

    #[error("node `{kind}` at `{path}` has no usable `start`/`end` or `range`")]
    InvalidSpan { kind: String, path: String },

    /// A child field holds a value that cannot be a node.
    #[error("field `{field}` of `{kind}` holds a non-node value")]
    NotANode { kind: String, field: String },

    #[error("invalid comment at index {index}: {reason}")]
    InvalidComment { index: usize, reason: &'static str },

    #[error("invalid token at index {index}: {reason}")]
    InvalidToken { index: usize, reason: &'static str },
}

/// Result type for tree loading.
pub type Result<T> = std::result::Result<T, Error>;
