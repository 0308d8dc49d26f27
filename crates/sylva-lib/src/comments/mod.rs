//! Comments and their attachment to nodes.
//!
//! Comments are not part of the tree. [`attach_comments`] assigns every
//! comment to exactly one node with a [`Relation`], and [`CommentMap`] groups
//! the result per node for formatters and linters.

mod attach;


use std::fmt;

use indexmap::IndexMap;
use sylva_core::{Ranged, Span};

use crate::ast::NodeId;

pub use attach::attach_comments;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentKind {
    /// `// ...`
    Line,
    /// `/* ... */`
    Block,
    /// `#!...` on the first line.
    Hashbang,
    /// `<!--` and `-->` in script code.
    Html,
}

impl CommentKind {
    /// Map an ESTree comment `type` (`Line`, `Block`, `Hashbang`, `HTMLOpen`, `HTMLClose`).
    pub fn from_estree(tag: &str) -> Option<Self> {
        Some(match tag {
            "Line" | "CommentLine" => CommentKind::Line,
            "Block" | "CommentBlock" => CommentKind::Block,
            "Hashbang" | "Shebang" => CommentKind::Hashbang,
            "HTMLOpen" | "HTMLClose" => CommentKind::Html,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CommentKind::Line => "Line",
            CommentKind::Block => "Block",
            CommentKind::Hashbang => "Hashbang",
            CommentKind::Html => "Html",
        }
    }
}

impl fmt::Display for CommentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source comment. `text` excludes the delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub kind: CommentKind,
    pub span: Span,
    pub text: String,
}

impl Comment {
    pub fn new(kind: CommentKind, span: impl Into<Span>, text: impl Into<String>) -> Self {
        Self {
            kind,
            span: span.into(),
            text: text.into(),
        }
    }

    pub fn line(span: impl Into<Span>, text: impl Into<String>) -> Self {
        Self::new(CommentKind::Line, span, text)
    }

    pub fn block(span: impl Into<Span>, text: impl Into<String>) -> Self {
        Self::new(CommentKind::Block, span, text)
    }
}

impl Ranged for Comment {
    fn span(&self) -> Span {
        self.span
    }
}

/// How a comment relates to the node it is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Before the node.
    Leading,
    /// Inside the node's range but not inside any of its children.
    Inner,
    /// After the last node.
    Trailing,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Relation::Leading => "leading",
            Relation::Inner => "inner",
            Relation::Trailing => "trailing",
        })
    }
}

/// One comment assigned to one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attachment<'c> {
    pub comment: &'c Comment,
    pub node: NodeId,
    pub relation: Relation,
}

/// Comments of one node, grouped by relation in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeComments<'c> {
    pub leading: Vec<&'c Comment>,
    pub inner: Vec<&'c Comment>,
    pub trailing: Vec<&'c Comment>,
}

impl NodeComments<'_> {
    pub fn len(&self) -> usize {
        self.leading.len() + self.inner.len() + self.trailing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Attachments grouped per node, in order of first attachment.
#[derive(Debug, Clone, Default)]
pub struct CommentMap<'c> {
    nodes: IndexMap<NodeId, NodeComments<'c>>,
}

impl<'c> CommentMap<'c> {
    pub fn from_attachments(attachments: &[Attachment<'c>]) -> Self {
        let mut map = Self::default();
        for attachment in attachments {
            map.insert(*attachment);
        }
        map
    }

    pub fn insert(&mut self, attachment: Attachment<'c>) {
        let entry = self.nodes.entry(attachment.node).or_default();
        let list = match attachment.relation {
            Relation::Leading => &mut entry.leading,
            Relation::Inner => &mut entry.inner,
            Relation::Trailing => &mut entry.trailing,
        };
        list.push(attachment.comment);
    }

    pub fn get(&self, node: NodeId) -> Option<&NodeComments<'c>> {
        self.nodes.get(&node)
    }

    pub fn leading(&self, node: NodeId) -> &[&'c Comment] {
        self.get(node).map(|c| c.leading.as_slice()).unwrap_or_default()
    }

    pub fn inner(&self, node: NodeId) -> &[&'c Comment] {
        self.get(node).map(|c| c.inner.as_slice()).unwrap_or_default()
    }

    pub fn trailing(&self, node: NodeId) -> &[&'c Comment] {
        self.get(node).map(|c| c.trailing.as_slice()).unwrap_or_default()
    }

    /// Number of nodes with at least one comment.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NodeComments<'c>)> {
        self.nodes.iter().map(|(id, comments)| (*id, comments))
    }
}

impl<'c> FromIterator<Attachment<'c>> for CommentMap<'c> {
    fn from_iter<I: IntoIterator<Item = Attachment<'c>>>(iter: I) -> Self {
        let mut map = Self::default();
        for attachment in iter {
            map.insert(attachment);
        }
        map
    }
}
