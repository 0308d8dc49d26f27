use indoc::indoc;
use sylva_core::{DynamicSchema, Span, estree, required};

use super::{Ast, Document, Scalar, Slot};
use crate::Error;
use crate::comments::CommentKind;
use crate::test_utils::{BINARY, SAMPLE, id, load};
use crate::tokens::TokenKind;

#[test]
fn loads_nodes_in_preorder() {
    let doc = load(SAMPLE);
    let ast = &doc.ast;

    assert_eq!(ast.len(), 16);
    assert_eq!(ast.root(), Some(id(0)));
    let kinds: Vec<_> = ast.ids().map(|n| ast.kind(n)).collect();
    assert_eq!(
        kinds,
        vec![
            "Program",
            "FunctionDeclaration",
            "Identifier",
            "Identifier",
            "Identifier",
            "BlockStatement",
            "IfStatement",
            "Identifier",
            "ReturnStatement",
            "Identifier",
            "VariableDeclaration",
            "VariableDeclarator",
            "Identifier",
            "ArrayExpression",
            "Literal",
            "Literal",
        ]
    );
}

#[test]
fn slot_shapes_follow_cardinality() {
    let doc = load(SAMPLE);
    let ast = &doc.ast;

    // required
    assert_eq!(ast.slot(id(6), "test"), Some(&Slot::Node(id(7))));
    // optional, present and absent
    assert_eq!(ast.slot(id(1), "id"), Some(&Slot::Optional(Some(id(2)))));
    assert_eq!(ast.slot(id(6), "alternate"), Some(&Slot::Optional(None)));
    // sequence with a hole
    assert_eq!(
        ast.slot(id(13), "elements"),
        Some(&Slot::Sequence(vec![Some(id(14)), None, Some(id(15))]))
    );
}

#[test]
fn scalars_become_attributes() {
    let doc = load(SAMPLE);
    let ast = &doc.ast;

    assert_eq!(ast.attr(id(10), "kind"), Some(&Scalar::from("let")));
    assert_eq!(ast.attr(id(1), "async"), Some(&Scalar::Bool(false)));
    assert_eq!(ast.attr(id(14), "value"), Some(&Scalar::Number(1.0)));
    assert_eq!(ast.attr(id(0), "sourceType"), Some(&Scalar::from("script")));
    // positional and list properties are not attributes
    assert_eq!(ast.attr(id(0), "start"), None);
    assert_eq!(ast.attr(id(0), "comments"), None);
}

#[test]
fn missing_sequence_is_empty() {
    let json = r#"{ "type": "ArrayExpression", "start": 0, "end": 2 }"#;
    let ast = Ast::from_json(json, &estree::SCHEMA).unwrap();

    assert_eq!(ast.slot(id(0), "elements"), Some(&Slot::Sequence(Vec::new())));
}

#[test]
fn range_pair_span() {
    let json = r#"{ "type": "Identifier", "range": [3, 7], "name": "x" }"#;
    let ast = Ast::from_json(json, &estree::SCHEMA).unwrap();

    assert_eq!(ast.span(id(0)), Span::new(3, 7));
}

#[test]
fn unknown_kind_is_leaf() {
    let json = indoc! {r#"
        { "type": "TSAsExpression", "start": 0, "end": 9,
          "expression": { "type": "Identifier", "start": 0, "end": 1, "name": "x" } }
    "#};
    let ast = Ast::from_json(json, &estree::SCHEMA).unwrap();

    assert_eq!(ast.len(), 1);
    assert_eq!(ast.slots(id(0)).count(), 0);
}

#[test]
fn custom_schema_drives_loading() {
    let schema = DynamicSchema::from_static(&estree::SCHEMA)
        .with_kind("TSAsExpression", vec![required("expression")]);
    let json = indoc! {r#"
        { "type": "TSAsExpression", "start": 0, "end": 9,
          "expression": { "type": "Identifier", "start": 0, "end": 1, "name": "x" } }
    "#};
    let ast = Ast::from_json(json, &schema).unwrap();

    assert_eq!(ast.len(), 2);
    assert_eq!(ast.slot(id(0), "expression"), Some(&Slot::Node(id(1))));
}

#[test]
fn document_extracts_comments_and_tokens() {
    let doc = load(BINARY);

    assert_eq!(doc.comments.len(), 1);
    assert_eq!(doc.comments[0].kind, CommentKind::Block);
    assert_eq!(doc.comments[0].span, Span::new(4, 11));
    assert_eq!(doc.comments[0].text, " x ");

    let kinds: Vec<_> = doc.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Punctuator,
            TokenKind::Identifier,
            TokenKind::Punctuator
        ]
    );
}

#[test]
fn document_without_lists() {
    let json = r#"{ "type": "Program", "start": 0, "end": 0, "body": [] }"#;
    let doc = Document::from_json(json, &estree::SCHEMA).unwrap();

    assert!(doc.comments.is_empty());
    assert!(doc.tokens.is_empty());
}

#[test]
fn error_missing_type() {
    let json = r#"{ "type": "Program", "start": 0, "end": 5, "body": [ { "start": 0, "end": 1 } ] }"#;
    let err = Ast::from_json(json, &estree::SCHEMA).unwrap_err();

    assert!(matches!(err, Error::MissingType { .. }));
    assert_eq!(
        err.to_string(),
        "expected a node object with a `type` string at `$.body[0]`"
    );
}

#[test]
fn error_invalid_span() {
    let json = r#"{ "type": "Program", "body": [] }"#;
    let err = Ast::from_json(json, &estree::SCHEMA).unwrap_err();

    assert_eq!(
        err.to_string(),
        "node `Program` at `$` has no usable `start`/`end` or `range`"
    );
}

#[test]
fn error_not_a_node() {
    let json = r#"{ "type": "ExpressionStatement", "start": 0, "end": 1, "expression": 42 }"#;
    let err = Ast::from_json(json, &estree::SCHEMA).unwrap_err();

    assert!(matches!(
        err,
        Error::NotANode { ref kind, ref field } if kind == "ExpressionStatement" && field == "expression"
    ));
}

#[test]
fn error_bad_comment() {
    let json = indoc! {r#"
        { "type": "Program", "start": 0, "end": 0, "body": [],
          "comments": [ { "type": "Line", "value": "", "start": 0, "end": 2 },
                        { "type": "Doc", "value": "", "start": 3, "end": 5 } ] }
    "#};
    let err = Document::from_json(json, &estree::SCHEMA).unwrap_err();

    assert_eq!(
        err.to_string(),
        "invalid comment at index 1: unknown comment type"
    );
}

#[test]
fn error_bad_token() {
    let json = indoc! {r#"
        { "type": "Program", "start": 0, "end": 0, "body": [],
          "tokens": [ { "type": "Punctuator", "value": ";" } ] }
    "#};
    let err = Document::from_json(json, &estree::SCHEMA).unwrap_err();

    assert!(matches!(err, Error::InvalidToken { index: 0, .. }));
}

#[test]
fn error_json() {
    let err = Ast::from_json("{ not json", &estree::SCHEMA).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}
