use super::{
    OperatorCategory, Token, TokenKind, is_assignment_operator, is_binary_operator,
    is_logical_operator, is_reserved_word, is_unary_operator, is_update_operator,
};

#[test]
fn kind_groups() {
    assert!(TokenKind::Keyword.is_keyword());
    assert!(TokenKind::Punctuator.is_punctuator());
    assert!(TokenKind::Template.is_literal());
    assert!(TokenKind::RegularExpression.is_literal());
    assert!(!TokenKind::Identifier.is_literal());
    assert!(TokenKind::PrivateIdentifier.is_identifier());
    assert!(!TokenKind::JsxText.is_identifier());
}

#[test]
fn operator_tables() {
    assert!(is_binary_operator(">>>"));
    assert!(is_binary_operator("instanceof"));
    assert!(!is_binary_operator("&&"));
    assert!(is_logical_operator("??"));
    assert!(is_unary_operator("typeof"));
    assert!(!is_unary_operator("++"));
    assert!(is_update_operator("--"));
    assert!(is_assignment_operator("??="));
    assert!(is_assignment_operator(">>>="));
    assert!(!is_assignment_operator("=="));
}

#[test]
fn categories_overlap_for_sign_operators() {
    let minus: Vec<_> = OperatorCategory::of("-").collect();
    assert_eq!(minus, vec![OperatorCategory::Binary, OperatorCategory::Unary]);
    assert_eq!(OperatorCategory::of("=>").count(), 0);
}

#[test]
fn token_operator_classification() {
    let plus = Token::punctuator(0..1, "+");
    let typeof_kw = Token::keyword(0..6, "typeof");
    let string = Token::new(TokenKind::String, 0..3, "'+'");

    assert!(plus.is_operator(OperatorCategory::Binary));
    assert!(typeof_kw.is_operator(OperatorCategory::Unary));
    assert!(!string.is_operator(OperatorCategory::Binary));
    assert!(string.operator_categories().is_empty());
    assert_eq!(
        Token::punctuator(0..2, "+=").operator_categories(),
        vec![OperatorCategory::Assignment]
    );
}

#[test]
fn reserved_words() {
    assert!(is_reserved_word("class"));
    assert!(is_reserved_word("yield"));
    assert!(!is_reserved_word("of"));
    assert!(!is_reserved_word("undefined"));

    assert!(Token::keyword(0..5, "while").is_reserved_word());
    assert!(Token::new(TokenKind::Null, 0..4, "null").is_reserved_word());
    assert!(!Token::new(TokenKind::String, 0..7, "'class'").is_reserved_word());
}

#[test]
fn category_display() {
    assert_eq!(OperatorCategory::Logical.to_string(), "logical");
}
