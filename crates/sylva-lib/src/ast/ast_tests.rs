use sylva_core::{Ranged, Span};

use super::{Ast, AstBuilder, NodeId, Scalar, Slot};

fn binary() -> (Ast, [NodeId; 3]) {
    let mut b = AstBuilder::new();
    let bin = b.node("BinaryExpression", 0..5);
    let left = b.node("Identifier", 0..1);
    let right = b.node("Identifier", 4..5);
    b.set_child(bin, "left", left)
        .set_child(bin, "right", right)
        .set_attr(bin, "operator", "+")
        .set_attr(left, "name", "a")
        .set_attr(right, "name", "b");
    (b.finish(bin), [bin, left, right])
}

#[test]
fn builder_allocates_in_order() {
    let (ast, [bin, left, right]) = binary();

    assert_eq!(ast.len(), 3);
    assert_eq!(ast.root(), Some(bin));
    assert_eq!([bin.index(), left.index(), right.index()], [0, 1, 2]);
    assert_eq!(ast.ids().collect::<Vec<_>>(), vec![bin, left, right]);
}

#[test]
fn accessors() {
    let (ast, [bin, left, _]) = binary();

    assert_eq!(ast.kind(bin), "BinaryExpression");
    assert_eq!(ast.span(left), Span::new(0, 1));
    assert_eq!(ast.slot(bin, "left"), Some(&Slot::Node(left)));
    assert_eq!(ast.slot(bin, "argument"), None);
    assert_eq!(ast.attr(bin, "operator"), Some(&Scalar::from("+")));
    assert_eq!(ast.attr(bin, "missing"), None);

    let node = ast.node(left);
    assert_eq!(node.kind(), "Identifier");
    assert_eq!(node.str_attr("name"), Some("a"));
    assert_eq!(node.end(), 1);
    assert!(node.is_kind("Identifier"));
}

#[test]
fn slots_keep_insertion_order() {
    let (ast, [bin, left, right]) = binary();

    let slots: Vec<_> = ast.slots(bin).collect();
    assert_eq!(
        slots,
        vec![("left", &Slot::Node(left)), ("right", &Slot::Node(right))]
    );
}

#[test]
fn setters_replace() {
    let mut b = AstBuilder::new();
    let call = b.node("CallExpression", 0..10);
    let first = b.node("Identifier", 0..1);
    let second = b.node("Identifier", 0..2);
    b.set_child(call, "callee", first)
        .set_child(call, "callee", second)
        .set_attr(call, "optional", false)
        .set_attr(call, "optional", true);
    let ast = b.finish(call);

    assert_eq!(ast.slot(call, "callee"), Some(&Slot::Node(second)));
    assert_eq!(ast.slots(call).count(), 1);
    assert_eq!(ast.attr(call, "optional"), Some(&Scalar::Bool(true)));
}

#[test]
fn push_child_builds_sequence_with_holes() {
    let mut b = AstBuilder::new();
    let arr = b.node("ArrayExpression", 0..8);
    let one = b.node("Literal", 1..2);
    let two = b.node("Literal", 6..7);
    b.push_child(arr, "elements", Some(one))
        .push_child(arr, "elements", None)
        .push_child(arr, "elements", Some(two));
    let ast = b.finish(arr);

    let slot = ast.slot(arr, "elements").unwrap();
    assert_eq!(slot, &Slot::Sequence(vec![Some(one), None, Some(two)]));
    assert_eq!(
        slot.children().collect::<Vec<_>>(),
        vec![(Some(0), one), (Some(2), two)]
    );
}

#[test]
fn slot_children_single() {
    let id = NodeId::from_index(3);
    assert_eq!(Slot::Node(id).children().collect::<Vec<_>>(), vec![(None, id)]);
    assert_eq!(Slot::Optional(None).children().count(), 0);
    assert!(!Slot::Optional(Some(id)).is_sequence());
    assert!(Slot::Sequence(Vec::new()).is_sequence());
}

#[test]
fn checked_access() {
    let (ast, _) = binary();

    assert!(ast.get(NodeId::from_index(2)).is_some());
    assert!(ast.get(NodeId::from_index(3)).is_none());
    assert!(!ast.has_node(NodeId::from_index(99)));
}

#[test]
#[should_panic(expected = "not found")]
fn foreign_handle_panics() {
    let (ast, _) = binary();
    ast.kind(NodeId::from_index(42));
}

#[test]
#[should_panic(expected = "not allocated")]
fn builder_rejects_unallocated_child() {
    let mut b = AstBuilder::new();
    let root = b.node("Program", 0..0);
    b.set_child(root, "body", NodeId::from_index(7));
}

#[test]
fn empty_tree() {
    let ast = AstBuilder::new().finish_empty();
    assert!(ast.is_empty());
    assert_eq!(ast.root(), None);
}

#[test]
fn scalar_display() {
    assert_eq!(Scalar::Null.to_string(), "null");
    assert_eq!(Scalar::Bool(true).to_string(), "true");
    assert_eq!(Scalar::Number(1.0).to_string(), "1");
    assert_eq!(Scalar::Number(0.5).to_string(), "0.5");
    assert_eq!(Scalar::from("a\"b").to_string(), r#""a\"b""#);
}

#[test]
fn node_ref_debug() {
    let (ast, [_, left, _]) = binary();
    assert_eq!(format!("{:?}", ast.node(left)), "Identifier#1@0..1");
}
