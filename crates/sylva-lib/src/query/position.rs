//! Position-based queries.

use sylva_core::{NodeSchema, Span};

use super::TreeView;
use crate::ast::NodeId;
use crate::walk::Visit;

impl<'a, S: NodeSchema + ?Sized> TreeView<'a, S> {
    /// Innermost node whose range contains `pos` (end-exclusive).
    ///
    /// Subtrees starting after `pos` are pruned. The last match in pre-order
    /// wins, which is the deepest one when child ranges nest in their parents.
    pub fn deepest_node_at(&self, root: impl Into<Option<NodeId>>, pos: u32) -> Option<NodeId> {
        let mut deepest = None;
        self.walk(root, |node| {
            let span = node.span();
            if span.start > pos {
                return Visit::SkipChildren;
            }
            if span.contains_pos(pos) {
                deepest = Some(node.id());
            }
            Visit::Continue
        });
        deepest
    }

    /// Every node overlapping `[start, end)`, in pre-order.
    ///
    /// Subtrees of non-overlapping nodes are pruned, since children lie
    /// inside their parent's range.
    pub fn nodes_overlapping(
        &self,
        root: impl Into<Option<NodeId>>,
        start: u32,
        end: u32,
    ) -> Vec<NodeId> {
        let range = Span::new(start, end);
        let mut found = Vec::new();
        self.walk(root, |node| {
            let span = node.span();
            if !span.overlaps(range) {
                return Visit::SkipChildren;
            }
            found.push(node.id());
            Visit::Continue
        });
        found
    }
}
