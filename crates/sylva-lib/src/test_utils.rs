use indoc::indoc;
use sylva_core::estree;

use crate::ast::{Ast, Document, NodeId};
use crate::query::TreeView;

/// `a + /* x */ b;`
pub const BINARY: &str = indoc! {r#"
    { "type": "Program", "start": 0, "end": 14, "sourceType": "script", "body": [
      { "type": "ExpressionStatement", "start": 0, "end": 14,
        "expression": { "type": "BinaryExpression", "start": 0, "end": 13, "operator": "+",
          "left": { "type": "Identifier", "start": 0, "end": 1, "name": "a" },
          "right": { "type": "Identifier", "start": 12, "end": 13, "name": "b" } } }
      ],
      "comments": [ { "type": "Block", "value": " x ", "start": 4, "end": 11 } ],
      "tokens": [
        { "type": "Identifier", "value": "a", "start": 0, "end": 1 },
        { "type": "Punctuator", "value": "+", "start": 2, "end": 3 },
        { "type": "Identifier", "value": "b", "start": 12, "end": 13 },
        { "type": "Punctuator", "value": ";", "start": 13, "end": 14 }
      ]
    }
"#};

/// ```js
/// // lead
/// function f(x, y) {
///   if (x) return y; // after return
///   /* tail */
/// }
/// let arr = [1, , 2];
/// // eof
/// ```
///
/// Node ids follow pre-order:
/// `#0 Program, #1 FunctionDeclaration, #2 f, #3 x, #4 y, #5 BlockStatement,
/// #6 IfStatement, #7 x, #8 ReturnStatement, #9 y, #10 VariableDeclaration,
/// #11 VariableDeclarator, #12 arr, #13 ArrayExpression, #14 1, #15 2`.
pub const SAMPLE: &str = indoc! {r#"
    { "type": "Program", "start": 8, "end": 96, "sourceType": "script", "body": [
      { "type": "FunctionDeclaration", "start": 8, "end": 76,
        "id": { "type": "Identifier", "start": 17, "end": 18, "name": "f" },
        "expression": false, "generator": false, "async": false,
        "params": [
          { "type": "Identifier", "start": 19, "end": 20, "name": "x" },
          { "type": "Identifier", "start": 22, "end": 23, "name": "y" }
        ],
        "body": { "type": "BlockStatement", "start": 25, "end": 76, "body": [
          { "type": "IfStatement", "start": 29, "end": 45,
            "test": { "type": "Identifier", "start": 33, "end": 34, "name": "x" },
            "consequent": { "type": "ReturnStatement", "start": 36, "end": 45,
              "argument": { "type": "Identifier", "start": 43, "end": 44, "name": "y" } },
            "alternate": null }
        ] } },
      { "type": "VariableDeclaration", "start": 77, "end": 96, "kind": "let", "declarations": [
        { "type": "VariableDeclarator", "start": 81, "end": 95,
          "id": { "type": "Identifier", "start": 81, "end": 84, "name": "arr" },
          "init": { "type": "ArrayExpression", "start": 87, "end": 95, "elements": [
            { "type": "Literal", "start": 88, "end": 89, "value": 1, "raw": "1" },
            null,
            { "type": "Literal", "start": 93, "end": 94, "value": 2, "raw": "2" }
          ] } }
      ] }
      ],
      "comments": [
        { "type": "Line", "value": " lead", "start": 0, "end": 7 },
        { "type": "Line", "value": " after return", "start": 46, "end": 61 },
        { "type": "Block", "value": " tail ", "start": 64, "end": 74 },
        { "type": "Line", "value": " eof", "start": 97, "end": 103 }
      ]
    }
"#};

pub fn load(json: &str) -> Document {
    Document::from_json(json, &estree::SCHEMA).expect("fixture must load")
}

pub fn view(ast: &Ast) -> TreeView<'_, sylva_core::StaticSchema> {
    TreeView::new(ast, &estree::SCHEMA)
}

pub fn id(index: usize) -> NodeId {
    NodeId::from_index(index)
}

/// `kind@start..end` labels, for compact assertions.
pub fn labels(ast: &Ast, ids: &[NodeId]) -> Vec<String> {
    ids.iter()
        .map(|&id| format!("{}@{:?}", ast.kind(id), ast.span(id)))
        .collect()
}
