//! Single-sweep comment attachment.
//!
//! Comments and nodes are both ordered by start position and swept together
//! with one comment cursor and a stack of open nodes (nodes whose range
//! encloses the sweep position):
//!
//! 1. Before node `N`, every open node not containing `N` is closed, innermost
//!    first. Closing `P` takes the cursor comments lying inside `P` as
//!    `Inner` on `P`.
//! 2. At `N`, comments ending at or before `N.start` are `Leading` on `N`. A
//!    comment straddling `N.start` is `Inner` on the innermost open node
//!    containing it, or `Leading` on `N` if there is none.
//! 3. After the last node the remaining open nodes are closed the same way,
//!    and whatever is left is `Trailing` on the last node.
//!
//! So a comment between two children leads the following child, a comment
//! after the last child but inside the parent is inner to the parent, and a
//! comment inside a leaf is inner to that leaf.

use sylva_core::{NodeSchema, Span};

use super::{Attachment, Comment, Relation};
use crate::ast::NodeId;
use crate::query::TreeView;

/// Assign every comment to one node below `root`.
///
/// Attachments are returned in comment start order. An empty comment list or
/// a `None` root yields no attachments without walking the tree.
pub fn attach_comments<'c, S: NodeSchema + ?Sized>(
    tree: &TreeView<'_, S>,
    root: impl Into<Option<NodeId>>,
    comments: &'c [Comment],
) -> Vec<Attachment<'c>> {
    let Some(root) = root.into() else {
        return Vec::new();
    };
    if comments.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&'c Comment> = comments.iter().collect();
    sorted.sort_by_key(|c| c.span.start);

    let mut nodes: Vec<(NodeId, Span)> = Vec::new();
    tree.walk(root, |node| nodes.push((node.id(), node.span())));
    // Stable: nodes sharing a start keep pre-order, outer before inner.
    nodes.sort_by_key(|(_, span)| span.start);

    tracing::debug!(
        nodes = nodes.len(),
        comments = sorted.len(),
        "attaching comments"
    );

    let mut sweep = Sweep {
        comments: &sorted,
        cursor: 0,
        open: Vec::new(),
        out: Vec::with_capacity(sorted.len()),
    };
    for &(id, span) in &nodes {
        sweep.close_until(span);
        sweep.lead(id, span);
        sweep.open.push((id, span));
    }
    sweep.close_all();
    // The root is always collected, so `nodes` is non-empty.
    if let Some(&(last, _)) = nodes.last() {
        sweep.trail(last);
    }

    let out = sweep.out;
    tracing::debug!(
        leading = count(&out, Relation::Leading),
        inner = count(&out, Relation::Inner),
        trailing = count(&out, Relation::Trailing),
        "attached comments"
    );
    out
}

fn count(attachments: &[Attachment<'_>], relation: Relation) -> usize {
    attachments
        .iter()
        .filter(|a| a.relation == relation)
        .count()
}

struct Sweep<'s, 'c> {
    comments: &'s [&'c Comment],
    cursor: usize,
    open: Vec<(NodeId, Span)>,
    out: Vec<Attachment<'c>>,
}

impl<'c> Sweep<'_, 'c> {
    fn peek(&self) -> Option<&'c Comment> {
        self.comments.get(self.cursor).copied()
    }

    fn emit(&mut self, node: NodeId, relation: Relation) {
        let comment = self.comments[self.cursor];
        tracing::trace!(comment = %comment.span, node = %node, %relation, "attach");
        self.out.push(Attachment {
            comment,
            node,
            relation,
        });
        self.cursor += 1;
    }

    /// Close open nodes that do not contain `next`, innermost first.
    fn close_until(&mut self, next: Span) {
        while let Some(&(id, span)) = self.open.last() {
            if span.contains_range(next) {
                break;
            }
            self.open.pop();
            self.take_inner(id, span);
        }
    }

    fn close_all(&mut self) {
        while let Some((id, span)) = self.open.pop() {
            self.take_inner(id, span);
        }
    }

    fn take_inner(&mut self, id: NodeId, span: Span) {
        while let Some(comment) = self.peek() {
            if !span.contains_range(comment.span) {
                break;
            }
            self.emit(id, Relation::Inner);
        }
    }

    fn lead(&mut self, id: NodeId, span: Span) {
        while let Some(comment) = self.peek() {
            if comment.span.end <= span.start {
                self.emit(id, Relation::Leading);
            } else if comment.span.start < span.start {
                let owner = self
                    .open
                    .iter()
                    .rev()
                    .find(|(_, open)| open.contains_range(comment.span));
                match owner {
                    Some(&(owner, _)) => self.emit(owner, Relation::Inner),
                    None => self.emit(id, Relation::Leading),
                }
            } else {
                break;
            }
        }
    }

    fn trail(&mut self, last: NodeId) {
        while self.peek().is_some() {
            self.emit(last, Relation::Trailing);
        }
    }
}
