use serde::Serialize;
use sylva_core::{NodeSchema, Span};
use sylva_lib::dump::Colors;
use sylva_lib::{Attachment, TreeView, attach_comments};

use super::input::{self, InputArgs};

pub struct CommentsArgs {
    pub input: InputArgs,
    pub json: bool,
    pub color: bool,
}

/// One attachment as printed by `--json`.
#[derive(Debug, Serialize)]
pub struct AttachmentRecord<'a> {
    pub relation: String,
    pub node: usize,
    pub node_kind: &'a str,
    pub node_span: Span,
    pub comment_kind: &'static str,
    pub comment_span: Span,
    pub text: &'a str,
}

pub fn run(args: CommentsArgs) {
    let input = input::load_or_exit(&args.input);
    let ast = &input.doc.ast;
    let tree = TreeView::new(ast, &input.schema);
    let attachments = attach_comments(&tree, ast.root(), &input.doc.comments);

    if args.json {
        let records: Vec<AttachmentRecord<'_>> =
            attachments.iter().map(|a| record(&tree, a)).collect();
        match serde_json::to_string_pretty(&records) {
            Ok(json) => println!("{json}"),
            Err(err) => input::fail(err),
        }
        return;
    }

    let c = Colors::new(args.color);
    for a in &attachments {
        let node = ast.node(a.node);
        println!(
            "{:<8} {}{}{}{} {}[{:?}]{}  {} {:?}",
            a.relation.to_string(),
            c.kind,
            node.kind(),
            a.node,
            c.reset,
            c.dim,
            node.span(),
            c.reset,
            a.comment.kind,
            a.comment.text,
        );
    }
}

pub fn record<'a, S: NodeSchema + ?Sized>(
    tree: &TreeView<'a, S>,
    a: &Attachment<'a>,
) -> AttachmentRecord<'a> {
    let node = tree.ast().node(a.node);
    AttachmentRecord {
        relation: a.relation.to_string(),
        node: a.node.index(),
        node_kind: node.kind(),
        node_span: node.span(),
        comment_kind: a.comment.kind.as_str(),
        comment_span: a.comment.span,
        text: &a.comment.text,
    }
}
