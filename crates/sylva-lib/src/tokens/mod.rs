//! Tokens and position lookups over a sorted token list.

mod classify;

#[cfg(test)]
mod classify_tests;

use std::fmt;

use sylva_core::{Ranged, Span};

pub use classify::{
    OperatorCategory, is_assignment_operator, is_binary_operator, is_logical_operator,
    is_reserved_word, is_unary_operator, is_update_operator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Punctuator,
    Identifier,
    PrivateIdentifier,
    String,
    Numeric,
    Boolean,
    Null,
    Template,
    RegularExpression,
    JsxText,
    JsxIdentifier,
}

impl TokenKind {
    /// Map an ESTree token `type` (as produced by espree and acorn).
    pub fn from_estree(tag: &str) -> Option<Self> {
        Some(match tag {
            "Keyword" => TokenKind::Keyword,
            "Punctuator" => TokenKind::Punctuator,
            "Identifier" => TokenKind::Identifier,
            "PrivateIdentifier" => TokenKind::PrivateIdentifier,
            "String" => TokenKind::String,
            "Numeric" => TokenKind::Numeric,
            "Boolean" => TokenKind::Boolean,
            "Null" => TokenKind::Null,
            "Template" => TokenKind::Template,
            "RegularExpression" => TokenKind::RegularExpression,
            "JSXText" => TokenKind::JsxText,
            "JSXIdentifier" => TokenKind::JsxIdentifier,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Punctuator => "Punctuator",
            TokenKind::Identifier => "Identifier",
            TokenKind::PrivateIdentifier => "PrivateIdentifier",
            TokenKind::String => "String",
            TokenKind::Numeric => "Numeric",
            TokenKind::Boolean => "Boolean",
            TokenKind::Null => "Null",
            TokenKind::Template => "Template",
            TokenKind::RegularExpression => "RegularExpression",
            TokenKind::JsxText => "JSXText",
            TokenKind::JsxIdentifier => "JSXIdentifier",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexical token with its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, span: impl Into<Span>, value: impl Into<String>) -> Self {
        Self {
            kind,
            span: span.into(),
            value: value.into(),
        }
    }

    pub fn punctuator(span: impl Into<Span>, value: impl Into<String>) -> Self {
        Self::new(TokenKind::Punctuator, span, value)
    }

    pub fn identifier(span: impl Into<Span>, value: impl Into<String>) -> Self {
        Self::new(TokenKind::Identifier, span, value)
    }

    pub fn keyword(span: impl Into<Span>, value: impl Into<String>) -> Self {
        Self::new(TokenKind::Keyword, span, value)
    }
}

impl Ranged for Token {
    fn span(&self) -> Span {
        self.span
    }
}

/// Position lookups over a token list sorted by start.
///
/// Tokens are assumed not to overlap, which any lexer guarantees; range
/// lookups then reduce to binary searches.
#[derive(Debug, Clone, Default)]
pub struct TokenIndex {
    tokens: Vec<Token>,
}

impl TokenIndex {
    /// Index `tokens`, sorting them by start if they are not already.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.is_sorted_by_key(|t| t.span.start) {
            tracing::debug!(tokens = tokens.len(), "sorting unsorted token list");
            tokens.sort_by_key(|t| t.span.start);
        }
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Tokens ending at or before `pos`.
    pub fn tokens_before(&self, pos: u32) -> &[Token] {
        let end = self.tokens.partition_point(|t| t.span.end <= pos);
        &self.tokens[..end]
    }

    /// Tokens starting at or after `pos`.
    pub fn tokens_after(&self, pos: u32) -> &[Token] {
        let start = self.tokens.partition_point(|t| t.span.start < pos);
        &self.tokens[start..]
    }

    /// Tokens lying entirely within `[start, end)`.
    pub fn tokens_in_range(&self, start: u32, end: u32) -> &[Token] {
        let range = Span::new(start, end);
        let (lo, hi) = self.bounds(range);
        &self.tokens[lo..hi]
    }

    /// Tokens lying within the range of `node`.
    pub fn tokens_for_node(&self, node: &impl Ranged) -> &[Token] {
        let (lo, hi) = self.bounds(node.span());
        &self.tokens[lo..hi]
    }

    /// Index and token containing `pos`, end-exclusive.
    pub fn token_at(&self, pos: u32) -> Option<(usize, &Token)> {
        let idx = self.tokens.partition_point(|t| t.span.start <= pos);
        let idx = idx.checked_sub(1)?;
        let token = &self.tokens[idx];
        token.span.contains_pos(pos).then_some((idx, token))
    }

    /// Index of the first token starting at or after `pos`.
    pub fn index_after(&self, pos: u32) -> Option<usize> {
        let idx = self.tokens.partition_point(|t| t.span.start < pos);
        (idx < self.tokens.len()).then_some(idx)
    }

    pub fn next_token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index.checked_add(1)?)
    }

    pub fn previous_token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index.checked_sub(1)?)
    }

    pub fn first_token_of(&self, node: &impl Ranged) -> Option<&Token> {
        self.tokens_for_node(node).first()
    }

    pub fn last_token_of(&self, node: &impl Ranged) -> Option<&Token> {
        self.tokens_for_node(node).last()
    }

    /// Gap between token `index` and the next token's start; `0` for the last
    /// token or an index out of bounds.
    pub fn whitespace_after(&self, index: usize) -> u32 {
        match (self.tokens.get(index), self.next_token(index)) {
            (Some(token), Some(next)) => next.span.start.saturating_sub(token.span.end),
            _ => 0,
        }
    }

    /// `[lo, hi)` index bounds of the tokens contained in `range`.
    fn bounds(&self, range: Span) -> (usize, usize) {
        let lo = self.tokens.partition_point(|t| t.span.start < range.start);
        let hi = lo + self.tokens[lo..].partition_point(|t| range.contains_range(t.span));
        (lo, hi)
    }
}

impl From<Vec<Token>> for TokenIndex {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}
