//! Static classification tables keyed on token kind and text.

use std::fmt;

use super::{Token, TokenKind};

impl TokenKind {
    pub fn is_keyword(self) -> bool {
        self == TokenKind::Keyword
    }

    pub fn is_punctuator(self) -> bool {
        self == TokenKind::Punctuator
    }

    /// String, numeric, boolean, null, template and regex literals.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::String
                | TokenKind::Numeric
                | TokenKind::Boolean
                | TokenKind::Null
                | TokenKind::Template
                | TokenKind::RegularExpression
        )
    }

    pub fn is_identifier(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::PrivateIdentifier | TokenKind::JsxIdentifier
        )
    }
}

pub fn is_binary_operator(text: &str) -> bool {
    matches!(
        text,
        "==" | "!="
            | "==="
            | "!=="
            | "<"
            | "<="
            | ">"
            | ">="
            | "<<"
            | ">>"
            | ">>>"
            | "+"
            | "-"
            | "*"
            | "/"
            | "%"
            | "**"
            | "|"
            | "^"
            | "&"
            | "in"
            | "instanceof"
    )
}

pub fn is_logical_operator(text: &str) -> bool {
    matches!(text, "&&" | "||" | "??")
}

pub fn is_unary_operator(text: &str) -> bool {
    matches!(
        text,
        "-" | "+" | "!" | "~" | "typeof" | "void" | "delete"
    )
}

pub fn is_update_operator(text: &str) -> bool {
    matches!(text, "++" | "--")
}

pub fn is_assignment_operator(text: &str) -> bool {
    matches!(
        text,
        "=" | "+="
            | "-="
            | "*="
            | "/="
            | "%="
            | "**="
            | "<<="
            | ">>="
            | ">>>="
            | "|="
            | "^="
            | "&="
            | "&&="
            | "||="
            | "??="
    )
}

/// Reserved words of strict-mode ES2022, including literals and future
/// reserved words.
pub fn is_reserved_word(text: &str) -> bool {
    matches!(
        text,
        "await"
            | "break"
            | "case"
            | "catch"
            | "class"
            | "const"
            | "continue"
            | "debugger"
            | "default"
            | "delete"
            | "do"
            | "else"
            | "enum"
            | "export"
            | "extends"
            | "false"
            | "finally"
            | "for"
            | "function"
            | "if"
            | "implements"
            | "import"
            | "in"
            | "instanceof"
            | "interface"
            | "let"
            | "new"
            | "null"
            | "package"
            | "private"
            | "protected"
            | "public"
            | "return"
            | "static"
            | "super"
            | "switch"
            | "this"
            | "throw"
            | "true"
            | "try"
            | "typeof"
            | "var"
            | "void"
            | "while"
            | "with"
            | "yield"
    )
}

/// Operator family of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Binary,
    Logical,
    Unary,
    Update,
    Assignment,
}

impl OperatorCategory {
    pub const ALL: [OperatorCategory; 5] = [
        OperatorCategory::Binary,
        OperatorCategory::Logical,
        OperatorCategory::Unary,
        OperatorCategory::Update,
        OperatorCategory::Assignment,
    ];

    pub fn matches(self, text: &str) -> bool {
        match self {
            OperatorCategory::Binary => is_binary_operator(text),
            OperatorCategory::Logical => is_logical_operator(text),
            OperatorCategory::Unary => is_unary_operator(text),
            OperatorCategory::Update => is_update_operator(text),
            OperatorCategory::Assignment => is_assignment_operator(text),
        }
    }

    /// Every category `text` belongs to; `-` and `+` are both binary and unary.
    pub fn of(text: &str) -> impl Iterator<Item = OperatorCategory> + '_ {
        Self::ALL.into_iter().filter(move |c| c.matches(text))
    }
}

impl fmt::Display for OperatorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OperatorCategory::Binary => "binary",
            OperatorCategory::Logical => "logical",
            OperatorCategory::Unary => "unary",
            OperatorCategory::Update => "update",
            OperatorCategory::Assignment => "assignment",
        })
    }
}

impl Token {
    /// Operators are punctuators, plus the word operators (`in`, `typeof`, ...)
    /// which lex as keywords.
    pub fn is_operator(&self, category: OperatorCategory) -> bool {
        matches!(self.kind, TokenKind::Punctuator | TokenKind::Keyword)
            && category.matches(&self.value)
    }

    /// Operator categories of this token, empty for non-operators.
    pub fn operator_categories(&self) -> Vec<OperatorCategory> {
        if !matches!(self.kind, TokenKind::Punctuator | TokenKind::Keyword) {
            return Vec::new();
        }
        OperatorCategory::of(&self.value).collect()
    }

    pub fn is_reserved_word(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Keyword | TokenKind::Identifier | TokenKind::Boolean | TokenKind::Null
        )
            && is_reserved_word(&self.value)
    }
}
