use crate::Interner;

#[test]
fn intern_deduplicates() {
    let mut interner = Interner::new();

    let a = interner.intern("Identifier");
    let b = interner.intern("Identifier");
    let c = interner.intern("Literal");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.len(), 2);
}

#[test]
fn resolve_returns_original_text() {
    let mut interner = Interner::new();

    let sym = interner.intern("BinaryExpression");
    assert_eq!(interner.resolve(sym), "BinaryExpression");
}

#[test]
fn get_does_not_intern() {
    let mut interner = Interner::new();
    let left = interner.intern("left");

    assert_eq!(interner.get("left"), Some(left));
    assert_eq!(interner.get("right"), None);
    assert_eq!(interner.len(), 1);
}

#[test]
fn symbol_ordering_is_insertion_order() {
    let mut interner = Interner::new();

    let z = interner.intern("z");
    let a = interner.intern("a");

    assert!(z < a);
    assert_eq!(z.as_u32(), 0);
    assert_eq!(a.as_u32(), 1);
}

#[test]
fn try_resolve_foreign_symbol() {
    let mut big = Interner::new();
    big.intern("a");
    let foreign = big.intern("b");

    let small = Interner::new();
    assert_eq!(small.try_resolve(foreign), None);
}

#[test]
fn iter_yields_insertion_order() {
    let mut interner = Interner::new();
    interner.intern("body");
    interner.intern("params");
    interner.intern("body");

    let names: Vec<_> = interner.iter().map(|(_, s)| s).collect();
    assert_eq!(names, ["body", "params"]);
}

#[test]
#[should_panic(expected = "out of range")]
fn resolve_foreign_symbol_panics() {
    let mut big = Interner::new();
    let foreign = big.intern("a");

    Interner::new().resolve(foreign);
}
