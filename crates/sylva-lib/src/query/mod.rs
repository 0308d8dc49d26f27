//! Read-only queries over a tree.
//!
//! Every query walks from a caller-supplied root with the traversal engine and
//! allocates its result fresh; nothing is cached on the tree. When many
//! relationship lookups are needed against the same root, build a
//! [`ParentIndex`] once instead.

mod parent_index;
mod position;

#[cfg(test)]
mod parent_index_tests;

use sylva_core::NodeSchema;

use crate::ast::{Ast, NodeId, NodeRef, Slot};
use crate::walk::{self, ChildSlots, TraversalContext, Visit};

pub use parent_index::{Link, ParentIndex};

/// A tree paired with the schema that drives its traversal.
pub struct TreeView<'a, S: ?Sized> {
    ast: &'a Ast,
    schema: &'a S,
}

impl<S: ?Sized> Clone for TreeView<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for TreeView<'_, S> {}

/// Where a node sits below the walk root.
struct Location<'a> {
    ancestors: Vec<NodeId>,
    field: Option<&'a str>,
    index: Option<usize>,
}

impl<'a, S: NodeSchema + ?Sized> TreeView<'a, S> {
    pub fn new(ast: &'a Ast, schema: &'a S) -> Self {
        Self { ast, schema }
    }

    pub fn ast(&self) -> &'a Ast {
        self.ast
    }

    pub fn schema(&self) -> &'a S {
        self.schema
    }

    /// See [`walk::walk`].
    pub fn walk<F, R>(&self, root: impl Into<Option<NodeId>>, visitor: F)
    where
        F: FnMut(NodeRef<'a>) -> R,
        R: Into<Visit>,
    {
        walk::walk(self.ast, self.schema, root, visitor);
    }

    /// See [`walk::walk_with_context`].
    pub fn walk_with_context<F, R>(&self, root: impl Into<Option<NodeId>>, visitor: F)
    where
        F: FnMut(NodeRef<'a>, &TraversalContext<'_>) -> R,
        R: Into<Visit>,
    {
        walk::walk_with_context(self.ast, self.schema, root, visitor);
    }

    pub fn children(&self, node: NodeId) -> ChildSlots<'a> {
        walk::child_slots(self.ast, self.schema, node)
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// First node in pre-order satisfying `predicate`; the walk stops there.
    pub fn find_first(
        &self,
        root: impl Into<Option<NodeId>>,
        mut predicate: impl FnMut(NodeRef<'a>) -> bool,
    ) -> Option<NodeId> {
        let mut found = None;
        self.walk(root, |node| {
            if predicate(node) {
                found = Some(node.id());
                Visit::Stop
            } else {
                Visit::Continue
            }
        });
        found
    }

    /// Every node satisfying `predicate`, in pre-order.
    pub fn find_all(
        &self,
        root: impl Into<Option<NodeId>>,
        mut predicate: impl FnMut(NodeRef<'a>) -> bool,
    ) -> Vec<NodeId> {
        let mut found = Vec::new();
        self.walk(root, |node| {
            if predicate(node) {
                found.push(node.id());
            }
        });
        found
    }

    /// Every node of kind `kind`, in pre-order.
    pub fn find_by_type(&self, root: impl Into<Option<NodeId>>, kind: &str) -> Vec<NodeId> {
        // A kind never interned cannot occur in the tree.
        let Some(kind) = self.ast.interner().get(kind) else {
            return Vec::new();
        };
        self.find_all(root, |node| node.kind_symbol() == kind)
    }

    // ========================================================================
    // Relationships
    // ========================================================================

    /// Parent of `target` below `root`; `None` for the root itself or a node
    /// not reachable from it.
    pub fn parent_of(&self, root: impl Into<Option<NodeId>>, target: NodeId) -> Option<NodeId> {
        self.locate(root, target)?.ancestors.last().copied()
    }

    /// Enclosing nodes of `target`, root first. Empty for the root or an
    /// unreachable node.
    pub fn ancestors_of(&self, root: impl Into<Option<NodeId>>, target: NodeId) -> Vec<NodeId> {
        self.locate(root, target)
            .map(|loc| loc.ancestors)
            .unwrap_or_default()
    }

    /// Other present elements of the sequence field holding `target`.
    ///
    /// Empty when `target` is the root, sits in a single-child field, or is
    /// not reachable.
    pub fn siblings_of(&self, root: impl Into<Option<NodeId>>, target: NodeId) -> Vec<NodeId> {
        let Some(loc) = self.locate(root, target) else {
            return Vec::new();
        };
        let (Some(parent), Some(field), Some(_)) = (loc.ancestors.last(), loc.field, loc.index)
        else {
            return Vec::new();
        };
        sequence_siblings(self.ast, *parent, field, target)
    }

    /// Whether `target` is `root` or one of its descendants.
    pub fn contains(&self, root: impl Into<Option<NodeId>>, target: NodeId) -> bool {
        self.find_first(root, |node| node.id() == target).is_some()
    }

    /// Number of edges from `root` to `target`, `None` if unreachable.
    pub fn depth(&self, root: impl Into<Option<NodeId>>, target: NodeId) -> Option<usize> {
        self.locate(root, target).map(|loc| loc.ancestors.len())
    }

    /// Size of the subtree at `root`, `0` for `None`.
    pub fn count_nodes(&self, root: impl Into<Option<NodeId>>) -> usize {
        let mut count = 0;
        self.walk(root, |_| count += 1);
        count
    }

    /// Relationship side table for everything below `root`.
    pub fn parent_index(&self, root: impl Into<Option<NodeId>>) -> ParentIndex<'a> {
        ParentIndex::build(*self, root)
    }

    /// Single walk that stops at `target`, capturing its context.
    fn locate(&self, root: impl Into<Option<NodeId>>, target: NodeId) -> Option<Location<'a>> {
        let mut found = None;
        self.walk_with_context(root, |node, ctx| {
            if node.id() != target {
                return Visit::Continue;
            }
            found = Some(Location {
                ancestors: ctx.ancestors.to_vec(),
                field: ctx.field.and_then(|f| tree_field(self.ast, f)),
                index: ctx.index,
            });
            Visit::Stop
        });
        found
    }
}

/// Re-borrow a walk-scoped field name from the tree's interner; names of
/// present slots are always interned there.
fn tree_field<'a>(ast: &'a Ast, field: &str) -> Option<&'a str> {
    let sym = ast.interner().get(field)?;
    ast.interner().try_resolve(sym)
}

fn sequence_siblings(ast: &Ast, parent: NodeId, field: &str, target: NodeId) -> Vec<NodeId> {
    match ast.slot(parent, field) {
        Some(Slot::Sequence(items)) => items
            .iter()
            .flatten()
            .copied()
            .filter(|&id| id != target)
            .collect(),
        _ => Vec::new(),
    }
}

impl Ast {
    /// Pair this tree with a schema for walking and querying.
    pub fn view<'a, S: NodeSchema + ?Sized>(&'a self, schema: &'a S) -> TreeView<'a, S> {
        TreeView::new(self, schema)
    }
}
