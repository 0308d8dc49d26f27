use super::Link;
use crate::test_utils::{SAMPLE, id, load, view};

#[test]
fn links_record_slot() {
    let doc = load(SAMPLE);
    let index = view(&doc.ast).parent_index(doc.ast.root());

    assert_eq!(index.len(), 16);
    assert_eq!(index.link(id(0)), None);
    assert_eq!(
        index.link(id(4)),
        Some(Link {
            parent: id(1),
            field: "params",
            index: Some(1)
        })
    );
    assert_eq!(
        index.link(id(5)),
        Some(Link {
            parent: id(1),
            field: "body",
            index: None
        })
    );
}

#[test]
fn agrees_with_walking_queries() {
    let doc = load(SAMPLE);
    let tree = view(&doc.ast);
    let root = doc.ast.root();
    let index = tree.parent_index(root);

    for node in doc.ast.ids() {
        assert_eq!(index.parent(node), tree.parent_of(root, node));
        assert_eq!(index.ancestors(node), tree.ancestors_of(root, node));
        assert_eq!(index.depth(node), tree.depth(root, node));
        assert_eq!(index.siblings(node), tree.siblings_of(root, node));
        assert_eq!(index.contains(node), tree.contains(root, node));
    }
}

#[test]
fn scoped_to_root() {
    let doc = load(SAMPLE);
    let index = view(&doc.ast).parent_index(id(10));

    assert_eq!(index.root(), Some(id(10)));
    assert_eq!(index.len(), 6);
    assert!(index.contains(id(15)));
    assert!(!index.contains(id(1)));
    assert_eq!(index.depth(id(15)), Some(3));
    assert_eq!(index.parent(id(10)), None);
}

#[test]
fn empty_for_none_root() {
    let doc = load(SAMPLE);
    let index = view(&doc.ast).parent_index(None);

    assert!(index.is_empty());
    assert_eq!(index.parent(id(3)), None);
    assert!(index.ancestors(id(3)).is_empty());
}
