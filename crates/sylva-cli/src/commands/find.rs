use sylva_core::{NodeSchema, Span};
use sylva_lib::dump::Colors;
use sylva_lib::{NodeId, ParentIndex, TreeView};

use super::input::{self, InputArgs};

pub enum FindQuery {
    Kind(String),
    At(u32),
    Overlapping(Span),
}

pub struct FindArgs {
    pub input: InputArgs,
    pub query: FindQuery,
    pub color: bool,
}

pub fn run(args: FindArgs) {
    let input = input::load_or_exit(&args.input);
    let tree = TreeView::new(&input.doc.ast, &input.schema);
    let colors = Colors::new(args.color);

    let found = search(&tree, &args.query);
    if found.is_empty() {
        tracing::info!("no matching nodes");
        return;
    }

    let index = tree.parent_index(tree.ast().root());
    for id in found {
        println!("{}", describe(&tree, &index, id, colors));
    }
}

pub fn search<S: NodeSchema + ?Sized>(tree: &TreeView<'_, S>, query: &FindQuery) -> Vec<NodeId> {
    let root = tree.ast().root();
    match query {
        FindQuery::Kind(kind) => tree.find_by_type(root, kind),
        FindQuery::At(pos) => tree.deepest_node_at(root, *pos).into_iter().collect(),
        FindQuery::Overlapping(span) => tree.nodes_overlapping(root, span.start, span.end),
    }
}

/// `#id Kind [start..end]`, followed by `in Parent.field[index]` for non-roots.
pub fn describe<S: NodeSchema + ?Sized>(
    tree: &TreeView<'_, S>,
    index: &ParentIndex<'_>,
    id: NodeId,
    c: Colors,
) -> String {
    let ast = tree.ast();
    let node = ast.node(id);
    let mut line = format!(
        "{id} {}{}{} {}[{:?}]{}",
        c.kind,
        node.kind(),
        c.reset,
        c.dim,
        node.span(),
        c.reset
    );
    if let Some(link) = index.link(id) {
        line.push_str(&format!(" in {}.{}", ast.kind(link.parent), link.field));
        if let Some(i) = link.index {
            line.push_str(&format!("[{i}]"));
        }
    }
    line
}
