//! S-expression rendering of trees.
//!
//! ```text
//! (Program
//!   body[0]: (ExpressionStatement
//!     expression: (BinaryExpression operator="+"
//!       left: (Identifier name="a")
//!       right: (Identifier name="b"))))
//! ```
//!
//! Only schema-traversable children are rendered, in traversal order.

use std::fmt::Write as _;

use sylva_core::NodeSchema;

use crate::ast::{NodeId, Scalar};
use crate::query::TreeView;

/// ANSI color palette for dumps.
///
/// Node kinds are blue, string attributes green, field labels and spans dim.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub kind: &'static str,
    pub string: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        kind: "\x1b[34m",
        string: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        kind: "",
        string: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.kind.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DumpOptions {
    /// Append `[start..end]` to every node.
    pub spans: bool,
    /// Render scalar attributes as `key=value`.
    pub attrs: bool,
    pub colors: Colors,
}

impl DumpOptions {
    pub fn new() -> Self {
        Self {
            attrs: true,
            ..Self::default()
        }
    }

    pub fn spans(mut self, spans: bool) -> Self {
        self.spans = spans;
        self
    }

    pub fn attrs(mut self, attrs: bool) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }
}

/// Render the subtree at `root`; empty for `None`.
pub fn dump_tree<S: NodeSchema + ?Sized>(
    tree: &TreeView<'_, S>,
    root: impl Into<Option<NodeId>>,
    options: DumpOptions,
) -> String {
    let c = options.colors;
    // (depth, rendered line without closing parens)
    let mut lines: Vec<(usize, String)> = Vec::new();

    tree.walk_with_context(root, |node, ctx| {
        let mut line = "  ".repeat(ctx.depth());
        if let Some(field) = ctx.field {
            let _ = write!(line, "{}{field}", c.dim);
            if let Some(index) = ctx.index {
                let _ = write!(line, "[{index}]");
            }
            let _ = write!(line, ":{} ", c.reset);
        }
        let _ = write!(line, "({}{}{}", c.kind, node.kind(), c.reset);
        if options.spans {
            let span = node.span();
            let _ = write!(line, " {}[{}..{}]{}", c.dim, span.start, span.end, c.reset);
        }
        if options.attrs {
            for (key, value) in node.ast().attrs(node.id()) {
                match value {
                    Scalar::String(_) => {
                        let _ = write!(line, " {key}={}{value}{}", c.string, c.reset);
                    }
                    _ => {
                        let _ = write!(line, " {key}={value}");
                    }
                }
            }
        }
        lines.push((ctx.depth(), line));
    });

    let mut out = String::new();
    for (i, (depth, line)) in lines.iter().enumerate() {
        out.push_str(line);
        let next_depth = lines.get(i + 1).map_or(0, |(d, _)| *d);
        // Close this node plus every ancestor the next line leaves.
        let closing = if i + 1 < lines.len() && next_depth > *depth {
            0
        } else {
            depth + 1 - next_depth
        };
        for _ in 0..closing {
            out.push(')');
        }
        out.push('\n');
    }
    out
}
