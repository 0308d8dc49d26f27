//! Arena-allocated syntax trees.
//!
//! Nodes are stored in a flat arena and addressed by [`NodeId`]. A node owns a
//! kind tag, a source range, child slots keyed by field name and scalar
//! attributes (`name`, `operator`, `value`, ...). Trees are built once, either
//! with [`AstBuilder`] or by [`Ast::from_json`], and are read-only afterwards.
//!
//! Which slots are traversable, and in which order, is decided by a
//! [`NodeSchema`](sylva_core::NodeSchema), not by the tree itself.

mod builder;
mod invariants;
pub mod json;

#[cfg(test)]
mod ast_tests;
#[cfg(test)]
mod json_tests;

use std::fmt;

use sylva_core::{Interner, Ranged, Span, Symbol};

pub use builder::AstBuilder;
pub use json::Document;

/// Handle of a node inside its [`Ast`] arena.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub(crate) fn from_index(idx: usize) -> Self {
        Self(u32::try_from(idx).unwrap_or_else(|_| panic!("Ast: arena exceeds u32::MAX nodes")))
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Runtime shape of a child field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// Required single child.
    Node(NodeId),
    /// Optional single child, `None` when absent.
    Optional(Option<NodeId>),
    /// Ordered children; `None` entries are holes (`[a, , b]`).
    Sequence(Vec<Option<NodeId>>),
}

impl Slot {
    /// Present children with their sequence index (`None` for single slots).
    pub fn children(&self) -> SlotChildren<'_> {
        match self {
            Slot::Node(id) => SlotChildren::Single(Some(*id)),
            Slot::Optional(id) => SlotChildren::Single(*id),
            Slot::Sequence(items) => SlotChildren::Many(items.iter().enumerate()),
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Slot::Sequence(_))
    }
}

/// Iterator over the present children of a [`Slot`].
#[derive(Debug, Clone)]
pub enum SlotChildren<'a> {
    Single(Option<NodeId>),
    Many(std::iter::Enumerate<std::slice::Iter<'a, Option<NodeId>>>),
}

impl Iterator for SlotChildren<'_> {
    type Item = (Option<usize>, NodeId);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            SlotChildren::Single(id) => id.take().map(|id| (None, id)),
            SlotChildren::Many(items) => items
                .by_ref()
                .find_map(|(idx, item)| item.map(|id| (Some(idx), id))),
        }
    }
}

/// Non-node attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl Scalar {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::String(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: Symbol,
    pub(crate) span: Span,
    pub(crate) slots: Vec<(Symbol, Slot)>,
    pub(crate) attrs: Vec<(Symbol, Scalar)>,
}

/// An immutable syntax tree.
#[derive(Debug, Clone, Default)]
pub struct Ast {
    interner: Interner,
    nodes: Vec<NodeData>,
    root: Option<NodeId>,
}

impl Ast {
    /// Root node, `None` for an empty tree.
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes in the arena, reachable or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    /// Whether `id` addresses a node of this arena.
    pub fn has_node(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Checked access; `None` for a handle from another arena.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.has_node(id).then_some(NodeRef { ast: self, id })
    }

    /// Panics if `id` is not a node of this arena.
    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        self.ensure_node(id);
        NodeRef { ast: self, id }
    }

    pub fn kind(&self, id: NodeId) -> &str {
        self.interner.resolve(self.ensure_node(id).kind)
    }

    pub fn kind_symbol(&self, id: NodeId) -> Symbol {
        self.ensure_node(id).kind
    }

    pub fn span(&self, id: NodeId) -> Span {
        self.ensure_node(id).span
    }

    /// Child slot named `field`, if the node has one.
    pub fn slot(&self, id: NodeId, field: &str) -> Option<&Slot> {
        let data = self.ensure_node(id);
        let sym = self.interner.get(field)?;
        data.slots
            .iter()
            .find_map(|(name, slot)| (*name == sym).then_some(slot))
    }

    /// All child slots in insertion order, regardless of any schema.
    pub fn slots(&self, id: NodeId) -> impl Iterator<Item = (&str, &Slot)> {
        self.ensure_node(id)
            .slots
            .iter()
            .map(|(name, slot)| (self.interner.resolve(*name), slot))
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&Scalar> {
        let data = self.ensure_node(id);
        let sym = self.interner.get(name)?;
        data.attrs
            .iter()
            .find_map(|(key, value)| (*key == sym).then_some(value))
    }

    pub fn attrs(&self, id: NodeId) -> impl Iterator<Item = (&str, &Scalar)> {
        self.ensure_node(id)
            .attrs
            .iter()
            .map(|(name, value)| (self.interner.resolve(*name), value))
    }

    /// Every node handle of the arena, in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + use<> {
        (0..self.nodes.len()).map(NodeId::from_index)
    }
}

/// A node handle paired with its tree.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    ast: &'a Ast,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    #[inline]
    pub fn id(self) -> NodeId {
        self.id
    }

    pub fn ast(self) -> &'a Ast {
        self.ast
    }

    pub fn kind(self) -> &'a str {
        self.ast.kind(self.id)
    }

    pub fn kind_symbol(self) -> Symbol {
        self.ast.kind_symbol(self.id)
    }

    pub fn is_kind(self, kind: &str) -> bool {
        self.kind() == kind
    }

    pub fn span(self) -> Span {
        self.ast.span(self.id)
    }

    pub fn slot(self, field: &str) -> Option<&'a Slot> {
        self.ast.slot(self.id, field)
    }

    pub fn attr(self, name: &str) -> Option<&'a Scalar> {
        self.ast.attr(self.id, name)
    }

    /// String attribute shortcut (`name`, `operator`, ...).
    pub fn str_attr(self, name: &str) -> Option<&'a str> {
        self.attr(name).and_then(Scalar::as_str)
    }
}

impl Ranged for NodeRef<'_> {
    fn span(&self) -> Span {
        self.ast.span(self.id)
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.ast, other.ast) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:?}@{:?}", self.kind(), self.id, self.span())
    }
}
