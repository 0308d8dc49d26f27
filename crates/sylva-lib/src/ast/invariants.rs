//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::{Ast, NodeData, NodeId};

impl Ast {
    pub(crate) fn ensure_node(&self, id: NodeId) -> &NodeData {
        self.nodes.get(id.index()).unwrap_or_else(|| {
            panic!(
                "Ast: node {id:?} not found ({} nodes; handle from another tree?)",
                self.nodes.len()
            )
        })
    }
}

impl super::AstBuilder {
    pub(crate) fn ensure_node_mut(&mut self, id: NodeId) -> &mut NodeData {
        let len = self.ast.nodes.len();
        self.ast.nodes.get_mut(id.index()).unwrap_or_else(|| {
            panic!("AstBuilder: node {id:?} not allocated ({len} nodes)")
        })
    }
}
