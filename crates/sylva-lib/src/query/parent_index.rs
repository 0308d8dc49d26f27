//! Parent side table.
//!
//! The tree itself stores no parent links. A `ParentIndex` records, for every
//! node reachable from one root, the slot that holds it. Built by a single
//! walk; lookups are O(1) (ancestors are O(depth)).

use sylva_core::NodeSchema;

use super::{TreeView, sequence_siblings, tree_field};
use crate::ast::{Ast, NodeId};

/// The parent slot holding a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link<'a> {
    pub parent: NodeId,
    pub field: &'a str,
    /// Position inside a sequence field.
    pub index: Option<usize>,
}

#[derive(Debug, Clone, Copy)]
struct Entry<'a> {
    link: Option<Link<'a>>,
    depth: u32,
}

/// Relationship lookups for the subtree of one root.
#[derive(Debug, Clone)]
pub struct ParentIndex<'a> {
    ast: &'a Ast,
    root: Option<NodeId>,
    /// Indexed by `NodeId`; `None` for nodes outside the subtree.
    entries: Vec<Option<Entry<'a>>>,
    reached: usize,
}

impl<'a> ParentIndex<'a> {
    pub(super) fn build<S: NodeSchema + ?Sized>(
        tree: TreeView<'a, S>,
        root: impl Into<Option<NodeId>>,
    ) -> Self {
        let ast = tree.ast();
        let root = root.into();
        let mut entries: Vec<Option<Entry<'a>>> = vec![None; ast.len()];
        let mut reached = 0;

        tree.walk_with_context(root, |node, ctx| {
            let link = match (ctx.parent, ctx.field) {
                (Some(parent), Some(field)) => Some(Link {
                    parent,
                    field: tree_field(ast, field).unwrap_or_default(),
                    index: ctx.index,
                }),
                _ => None,
            };
            let slot = &mut entries[node.id().index()];
            if slot.is_none() {
                reached += 1;
            }
            *slot = Some(Entry {
                link,
                depth: ctx.depth() as u32,
            });
        });

        tracing::debug!(nodes = reached, "built parent index");
        Self {
            ast,
            root,
            entries,
            reached,
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes reachable from the root.
    pub fn len(&self) -> usize {
        self.reached
    }

    pub fn is_empty(&self) -> bool {
        self.reached == 0
    }

    fn entry(&self, node: NodeId) -> Option<&Entry<'a>> {
        self.entries.get(node.index())?.as_ref()
    }

    /// Whether `node` lies in the indexed subtree.
    pub fn contains(&self, node: NodeId) -> bool {
        self.entry(node).is_some()
    }

    pub fn link(&self, node: NodeId) -> Option<Link<'a>> {
        self.entry(node)?.link
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.link(node).map(|link| link.parent)
    }

    pub fn depth(&self, node: NodeId) -> Option<usize> {
        self.entry(node).map(|entry| entry.depth as usize)
    }

    /// Enclosing nodes, root first.
    pub fn ancestors(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.parent(node);
        while let Some(parent) = current {
            out.push(parent);
            current = self.parent(parent);
        }
        out.reverse();
        out
    }

    /// Other present elements of the sequence holding `node`.
    pub fn siblings(&self, node: NodeId) -> Vec<NodeId> {
        match self.link(node) {
            Some(Link {
                parent,
                field,
                index: Some(_),
            }) => sequence_siblings(self.ast, parent, field, node),
            _ => Vec::new(),
        }
    }
}
