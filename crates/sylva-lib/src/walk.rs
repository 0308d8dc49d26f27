//! Schema-driven depth-first traversal.
//!
//! The engine knows nothing about individual node kinds. For each node it asks
//! the [`NodeSchema`] for the ordered traversable fields of the node's kind and
//! dispatches on the runtime shape of each slot:
//! - single child: visited when present
//! - sequence: elements visited in array order, holes skipped, indices kept
//!
//! A kind without a schema entry is a leaf.
//!
//! Both walks are iterative over an explicit stack, so tree depth is bounded
//! by memory rather than by the call stack.

use sylva_core::NodeSchema;

use crate::ast::{Ast, NodeId, NodeRef, SlotChildren};

/// What the walk does after a node has been visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visit {
    /// Descend into the node's children.
    #[default]
    Continue,
    /// Skip the node's subtree; later siblings are still visited.
    SkipChildren,
    /// Abort the whole walk.
    Stop,
}

impl From<bool> for Visit {
    /// `true` descends, `false` skips the subtree.
    fn from(descend: bool) -> Self {
        if descend {
            Visit::Continue
        } else {
            Visit::SkipChildren
        }
    }
}

impl From<()> for Visit {
    fn from((): ()) -> Self {
        Visit::Continue
    }
}

/// Position of a node relative to the walk root.
///
/// Valid only for the duration of one visitor call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalContext<'c> {
    /// `None` for the walk root.
    pub parent: Option<NodeId>,
    /// Enclosing nodes, walk root first, parent last.
    pub ancestors: &'c [NodeId],
    /// Parent field holding the node.
    pub field: Option<&'c str>,
    /// Position inside a sequence field, `None` for single-child fields.
    pub index: Option<usize>,
}

impl TraversalContext<'_> {
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// A present child together with the slot it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildSlot<'a> {
    pub field: &'a str,
    pub index: Option<usize>,
    pub node: NodeId,
}

/// Ordered present children of `node` as the schema sees them.
pub fn child_slots<'a, S: NodeSchema + ?Sized>(
    ast: &'a Ast,
    schema: &'a S,
    node: NodeId,
) -> ChildSlots<'a> {
    let fields = schema.fields(ast.kind(node)).unwrap_or_default();
    ChildSlots {
        ast,
        node,
        fields: fields.iter(),
        current: None,
    }
}

/// Iterator returned by [`child_slots`].
pub struct ChildSlots<'a> {
    ast: &'a Ast,
    node: NodeId,
    fields: std::slice::Iter<'a, sylva_core::FieldSpec>,
    current: Option<(&'a str, SlotChildren<'a>)>,
}

impl<'a> Iterator for ChildSlots<'a> {
    type Item = ChildSlot<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((field, children)) = &mut self.current
                && let Some((index, node)) = children.next()
            {
                return Some(ChildSlot {
                    field: *field,
                    index,
                    node,
                });
            }
            let spec = self.fields.next()?;
            // Fields the node lacks are treated as absent.
            self.current = self
                .ast
                .slot(self.node, spec.name())
                .map(|slot| (spec.name(), slot.children()));
        }
    }
}

/// Pre-order walk from `root`. `None` is a no-op.
///
/// The visitor may return [`Visit`], `bool` or `()`.
pub fn walk<'a, S, F, R>(ast: &'a Ast, schema: &'a S, root: impl Into<Option<NodeId>>, mut visitor: F)
where
    S: NodeSchema + ?Sized,
    F: FnMut(NodeRef<'a>) -> R,
    R: Into<Visit>,
{
    let Some(root) = root.into() else {
        return;
    };
    let mut stack = vec![root];
    let mut pending = Vec::new();

    while let Some(id) = stack.pop() {
        match visitor(ast.node(id)).into() {
            Visit::Continue => {
                pending.extend(child_slots(ast, schema, id).map(|c| c.node));
                stack.extend(pending.drain(..).rev());
            }
            Visit::SkipChildren => {}
            Visit::Stop => return,
        }
    }
}

struct Frame<'a> {
    node: NodeId,
    depth: usize,
    field: Option<&'a str>,
    index: Option<usize>,
}

/// Pre-order walk that also reports each node's [`TraversalContext`].
pub fn walk_with_context<'a, S, F, R>(
    ast: &'a Ast,
    schema: &'a S,
    root: impl Into<Option<NodeId>>,
    mut visitor: F,
) where
    S: NodeSchema + ?Sized,
    F: FnMut(NodeRef<'a>, &TraversalContext<'_>) -> R,
    R: Into<Visit>,
{
    let Some(root) = root.into() else {
        return;
    };
    let mut stack = vec![Frame {
        node: root,
        depth: 0,
        field: None,
        index: None,
    }];
    // Current root-to-node path; truncated to the frame depth on every pop.
    let mut path: Vec<NodeId> = Vec::new();
    let mut pending = Vec::new();

    while let Some(frame) = stack.pop() {
        path.truncate(frame.depth);
        let ctx = TraversalContext {
            parent: path.last().copied(),
            ancestors: &path,
            field: frame.field,
            index: frame.index,
        };

        match visitor(ast.node(frame.node), &ctx).into() {
            Visit::Continue => {
                path.push(frame.node);
                let depth = path.len();
                pending.extend(child_slots(ast, schema, frame.node).map(|c| Frame {
                    node: c.node,
                    depth,
                    field: Some(c.field),
                    index: c.index,
                }));
                stack.extend(pending.drain(..).rev());
            }
            Visit::SkipChildren => {}
            Visit::Stop => return,
        }
    }
}
