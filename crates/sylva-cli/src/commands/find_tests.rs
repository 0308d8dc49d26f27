use sylva_core::{Span, estree};
use sylva_lib::TreeView;
use sylva_lib::ast::Ast;
use sylva_lib::dump::Colors;

use super::find::{FindQuery, describe, search};

/// `a + b;`
const BINARY: &str = r#"
{ "type": "Program", "start": 0, "end": 6, "body": [
  { "type": "ExpressionStatement", "start": 0, "end": 6,
    "expression": { "type": "BinaryExpression", "start": 0, "end": 5, "operator": "+",
      "left": { "type": "Identifier", "start": 0, "end": 1, "name": "a" },
      "right": { "type": "Identifier", "start": 4, "end": 5, "name": "b" } } }
] }
"#;

fn run(query: FindQuery) -> String {
    let ast = Ast::from_json(BINARY, &estree::SCHEMA).unwrap();
    let tree = TreeView::new(&ast, &estree::SCHEMA);
    let index = tree.parent_index(ast.root());
    search(&tree, &query)
        .into_iter()
        .map(|id| describe(&tree, &index, id, Colors::OFF))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn by_kind_reports_parent_field() {
    insta::assert_snapshot!(run(FindQuery::Kind("Identifier".to_owned())), @r"
    #3 Identifier [0..1] in BinaryExpression.left
    #4 Identifier [4..5] in BinaryExpression.right
    ");
}

#[test]
fn at_position_picks_innermost() {
    insta::assert_snapshot!(run(FindQuery::At(4)), @"#4 Identifier [4..5] in BinaryExpression.right");
    insta::assert_snapshot!(run(FindQuery::At(5)), @"#1 ExpressionStatement [0..6] in Program.body[0]");
}

#[test]
fn overlapping_range_includes_root() {
    insta::assert_snapshot!(run(FindQuery::Overlapping(Span::new(5, 6))), @r"
    #0 Program [0..6]
    #1 ExpressionStatement [0..6] in Program.body[0]
    ");
}

#[test]
fn unknown_kind_finds_nothing() {
    assert!(run(FindQuery::Kind("Pipe".to_owned())).is_empty());
}

#[test]
fn colored_output_wraps_kind() {
    let ast = Ast::from_json(BINARY, &estree::SCHEMA).unwrap();
    let tree = TreeView::new(&ast, &estree::SCHEMA);
    let index = tree.parent_index(ast.root());
    let root = ast.root().unwrap();

    let line = describe(&tree, &index, root, Colors::ON);
    assert_eq!(line, "#0 \x1b[34mProgram\x1b[0m \x1b[2m[0..6]\x1b[0m");
}
