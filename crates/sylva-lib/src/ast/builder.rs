//! Programmatic tree construction.

use sylva_core::{Span, Symbol};

use super::{Ast, NodeData, NodeId, Scalar, Slot};

/// Builds an [`Ast`] node by node.
///
/// Nodes are allocated first and wired into their parent's slots afterwards,
/// so trees can be built top-down or bottom-up. The builder does not check
/// that every node has a single owner; callers hand it a forest.
#[derive(Debug, Default)]
pub struct AstBuilder {
    pub(super) ast: Ast,
}

impl AstBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node with no slots or attributes.
    pub fn node(&mut self, kind: &str, span: impl Into<Span>) -> NodeId {
        let kind = self.ast.interner.intern(kind);
        let id = NodeId::from_index(self.ast.nodes.len());
        self.ast.nodes.push(NodeData {
            kind,
            span: span.into(),
            slots: Vec::new(),
            attrs: Vec::new(),
        });
        id
    }

    /// Set `field` to a required child.
    pub fn set_child(&mut self, parent: NodeId, field: &str, child: NodeId) -> &mut Self {
        self.ensure_node_mut(child);
        self.set_slot(parent, field, Slot::Node(child))
    }

    /// Set `field` to an optional child; `None` records an absent child.
    pub fn set_optional(&mut self, parent: NodeId, field: &str, child: Option<NodeId>) -> &mut Self {
        if let Some(child) = child {
            self.ensure_node_mut(child);
        }
        self.set_slot(parent, field, Slot::Optional(child))
    }

    /// Set `field` to a sequence; `None` items are holes.
    pub fn set_sequence(
        &mut self,
        parent: NodeId,
        field: &str,
        items: impl IntoIterator<Item = Option<NodeId>>,
    ) -> &mut Self {
        let items: Vec<_> = items.into_iter().collect();
        for child in items.iter().flatten() {
            self.ensure_node_mut(*child);
        }
        self.set_slot(parent, field, Slot::Sequence(items))
    }

    /// Append to the sequence in `field`, creating it if needed.
    ///
    /// A non-sequence slot of the same name is replaced.
    pub fn push_child(&mut self, parent: NodeId, field: &str, child: Option<NodeId>) -> &mut Self {
        if let Some(child) = child {
            self.ensure_node_mut(child);
        }
        let name = self.ast.interner.intern(field);
        let data = self.ensure_node_mut(parent);
        match data.slots.iter_mut().find(|(key, _)| *key == name) {
            Some((_, Slot::Sequence(items))) => items.push(child),
            Some((_, slot)) => *slot = Slot::Sequence(vec![child]),
            None => data.slots.push((name, Slot::Sequence(vec![child]))),
        }
        self
    }

    /// Set a scalar attribute, replacing any previous value.
    pub fn set_attr(&mut self, node: NodeId, name: &str, value: impl Into<Scalar>) -> &mut Self {
        let name = self.ast.interner.intern(name);
        let value = value.into();
        let data = self.ensure_node_mut(node);
        match data.attrs.iter_mut().find(|(key, _)| *key == name) {
            Some((_, old)) => *old = value,
            None => data.attrs.push((name, value)),
        }
        self
    }

    /// Number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.ast.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ast.nodes.is_empty()
    }

    /// Finish the tree rooted at `root`.
    pub fn finish(mut self, root: NodeId) -> Ast {
        self.ensure_node_mut(root);
        self.ast.root = Some(root);
        self.ast
    }

    /// Finish without a root, producing an empty tree view.
    pub fn finish_empty(self) -> Ast {
        self.ast
    }

    fn set_slot(&mut self, parent: NodeId, field: &str, slot: Slot) -> &mut Self {
        let name: Symbol = self.ast.interner.intern(field);
        let data = self.ensure_node_mut(parent);
        match data.slots.iter_mut().find(|(key, _)| *key == name) {
            Some((_, old)) => *old = slot,
            None => data.slots.push((name, slot)),
        }
        self
    }
}
