use indexmap::IndexMap;
use serde::Serialize;
use sylva_core::NodeSchema;
use sylva_lib::TreeView;
use sylva_lib::ast::Document;

use super::input::{self, InputArgs};

pub struct StatsArgs {
    pub input: InputArgs,
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct Stats {
    /// Nodes reachable from the root through schema fields.
    pub nodes: usize,
    /// Nodes stored in the tree, reachable or not.
    pub stored: usize,
    pub max_depth: usize,
    pub comments: usize,
    pub tokens: usize,
    /// Most frequent first, ties by name.
    pub kinds: Vec<KindCount>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct KindCount {
    pub kind: String,
    pub count: usize,
}

pub fn run(args: StatsArgs) {
    let input = input::load_or_exit(&args.input);
    let stats = collect(&input.doc, &input.schema);

    if args.json {
        match serde_json::to_string_pretty(&stats) {
            Ok(json) => println!("{json}"),
            Err(err) => input::fail(err),
        }
        return;
    }

    println!("nodes      {}", stats.nodes);
    if stats.stored != stats.nodes {
        println!("stored     {}", stats.stored);
    }
    println!("max depth  {}", stats.max_depth);
    println!("comments   {}", stats.comments);
    println!("tokens     {}", stats.tokens);
    if stats.kinds.is_empty() {
        return;
    }
    println!();
    let width = stats.kinds[0].count.to_string().len();
    for KindCount { kind, count } in &stats.kinds {
        println!("  {count:>width$}  {kind}");
    }
}

pub fn collect<S: NodeSchema + ?Sized>(doc: &Document, schema: &S) -> Stats {
    let tree = TreeView::new(&doc.ast, schema);
    let mut nodes = 0;
    let mut max_depth = 0;
    let mut kinds: IndexMap<&str, usize> = IndexMap::new();

    tree.walk_with_context(doc.ast.root(), |node, ctx| {
        nodes += 1;
        max_depth = max_depth.max(ctx.depth());
        *kinds.entry(node.kind()).or_default() += 1;
    });

    let mut kinds: Vec<KindCount> = kinds
        .into_iter()
        .map(|(kind, count)| KindCount {
            kind: kind.to_owned(),
            count,
        })
        .collect();
    kinds.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.kind.cmp(&b.kind)));

    Stats {
        nodes,
        stored: doc.ast.len(),
        max_depth,
        comments: doc.comments.len(),
        tokens: doc.tokens.len(),
        kinds,
    }
}
