//! Loading ESTree-shaped JSON trees.
//!
//! An object with a `type` string is a node. Its range comes from numeric
//! `start`/`end` properties or a `range: [start, end]` pair. Properties the
//! schema lists for the node's kind become child slots:
//! - object → child node
//! - `null` or missing → absent optional child (empty sequence for `multiple` fields)
//! - array → sequence, `null` elements are holes
//!
//! Remaining primitive-valued properties become scalar attributes. Nested
//! objects the schema does not list (`loc`, `regex`, ...) are dropped, so a
//! kind without a schema entry loads as a leaf.
//!
//! `comments` and `tokens` arrays on the top-level object are extracted into
//! flat lists.

use serde_json::{Map, Value};
use sylva_core::{NodeSchema, Span};

use super::{Ast, AstBuilder, NodeId, Scalar, Slot};
use crate::comments::{Comment, CommentKind};
use crate::tokens::{Token, TokenKind};
use crate::{Error, Result};

/// Properties that never become attributes.
const RESERVED: &[&str] = &["type", "start", "end", "range", "loc", "comments", "tokens"];

/// A loaded tree with the comment and token lists of its source.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub ast: Ast,
    pub comments: Vec<Comment>,
    pub tokens: Vec<Token>,
}

impl Document {
    pub fn from_json<S: NodeSchema + ?Sized>(json: &str, schema: &S) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value, schema)
    }

    pub fn from_value<S: NodeSchema + ?Sized>(value: &Value, schema: &S) -> Result<Self> {
        let ast = Ast::from_value(value, schema)?;
        let (comments, tokens) = match value {
            Value::Object(obj) => (
                obj.get("comments").map(load_comments).transpose()?,
                obj.get("tokens").map(load_tokens).transpose()?,
            ),
            _ => (None, None),
        };
        let doc = Self {
            ast,
            comments: comments.unwrap_or_default(),
            tokens: tokens.unwrap_or_default(),
        };
        tracing::debug!(
            nodes = doc.ast.len(),
            comments = doc.comments.len(),
            tokens = doc.tokens.len(),
            "loaded document"
        );
        Ok(doc)
    }
}

impl Ast {
    /// Load a tree from JSON text, ignoring any comment or token lists.
    pub fn from_json<S: NodeSchema + ?Sized>(json: &str, schema: &S) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value, schema)
    }

    pub fn from_value<S: NodeSchema + ?Sized>(value: &Value, schema: &S) -> Result<Self> {
        let mut loader = Loader {
            builder: AstBuilder::new(),
            schema,
            path: Vec::new(),
        };
        let root = loader.node(value)?;
        Ok(loader.builder.finish(root))
    }
}

#[derive(Debug, Clone, Copy)]
enum PathSegment<'a> {
    Field(&'a str),
    Index(usize),
}

struct Loader<'a, S: ?Sized> {
    builder: AstBuilder,
    schema: &'a S,
    /// Location of the value being loaded, rendered only on error.
    path: Vec<PathSegment<'a>>,
}

impl<'a, S: NodeSchema + ?Sized> Loader<'a, S> {
    fn node(&mut self, value: &'a Value) -> Result<NodeId> {
        let Some(obj) = value.as_object() else {
            return Err(Error::MissingType {
                path: self.render_path(),
            });
        };
        let Some(kind) = obj.get("type").and_then(Value::as_str) else {
            return Err(Error::MissingType {
                path: self.render_path(),
            });
        };
        let Some(span) = span_of(obj) else {
            return Err(Error::InvalidSpan {
                kind: kind.to_owned(),
                path: self.render_path(),
            });
        };

        // Parents are allocated before their children, so ids follow pre-order.
        let id = self.builder.node(kind, span);
        let schema = self.schema;
        let fields = schema.fields(kind).unwrap_or_default();

        for spec in fields {
            let name = spec.name();
            self.path.push(PathSegment::Field(name));
            let slot = match obj.get(name) {
                None | Some(Value::Null) if spec.is_sequence() => Slot::Sequence(Vec::new()),
                None | Some(Value::Null) => Slot::Optional(None),
                Some(child @ Value::Object(_)) => {
                    let child = self.node(child)?;
                    if spec.cardinality.required && !spec.is_sequence() {
                        Slot::Node(child)
                    } else {
                        Slot::Optional(Some(child))
                    }
                }
                Some(Value::Array(items)) => Slot::Sequence(self.sequence(items)?),
                Some(_) => {
                    return Err(Error::NotANode {
                        kind: kind.to_owned(),
                        field: name.to_owned(),
                    });
                }
            };
            self.path.pop();
            match slot {
                Slot::Node(child) => self.builder.set_child(id, name, child),
                Slot::Optional(child) => self.builder.set_optional(id, name, child),
                Slot::Sequence(items) => self.builder.set_sequence(id, name, items),
            };
        }

        for (key, prop) in obj {
            if RESERVED.contains(&key.as_str()) || fields.iter().any(|f| f.name() == key) {
                continue;
            }
            if let Some(scalar) = scalar_of(prop) {
                self.builder.set_attr(id, key, scalar);
            }
        }

        Ok(id)
    }

    fn sequence(&mut self, items: &'a [Value]) -> Result<Vec<Option<NodeId>>> {
        let mut out = Vec::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            self.path.push(PathSegment::Index(idx));
            let child = match item {
                Value::Null => None,
                _ => Some(self.node(item)?),
            };
            self.path.pop();
            out.push(child);
        }
        Ok(out)
    }

    fn render_path(&self) -> String {
        let mut out = String::from("$");
        for segment in &self.path {
            match segment {
                PathSegment::Field(name) => {
                    out.push('.');
                    out.push_str(name);
                }
                PathSegment::Index(idx) => {
                    out.push('[');
                    out.push_str(&idx.to_string());
                    out.push(']');
                }
            }
        }
        out
    }
}

fn span_of(obj: &Map<String, Value>) -> Option<Span> {
    let offset = |v: &Value| v.as_u64().and_then(|n| u32::try_from(n).ok());
    if let (Some(start), Some(end)) = (obj.get("start"), obj.get("end")) {
        return Some(Span::new(offset(start)?, offset(end)?));
    }
    match obj.get("range")?.as_array()?.as_slice() {
        [start, end] => Some(Span::new(offset(start)?, offset(end)?)),
        _ => None,
    }
}

fn scalar_of(value: &Value) -> Option<Scalar> {
    Some(match value {
        Value::Null => Scalar::Null,
        Value::Bool(b) => Scalar::Bool(*b),
        Value::Number(n) => Scalar::Number(n.as_f64()?),
        Value::String(s) => Scalar::String(s.clone()),
        Value::Array(_) | Value::Object(_) => return None,
    })
}

fn load_comments(value: &Value) -> Result<Vec<Comment>> {
    let Some(items) = value.as_array() else {
        return Err(Error::InvalidComment {
            index: 0,
            reason: "`comments` is not an array",
        });
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let invalid = |reason| Error::InvalidComment { index, reason };
            let obj = item.as_object().ok_or(invalid("not an object"))?;
            let kind = obj
                .get("type")
                .and_then(Value::as_str)
                .ok_or(invalid("missing `type`"))?;
            let kind = CommentKind::from_estree(kind).ok_or(invalid("unknown comment type"))?;
            let span = span_of(obj).ok_or(invalid("missing `start`/`end` or `range`"))?;
            let text = obj
                .get("value")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned();
            Ok(Comment { kind, span, text })
        })
        .collect()
}

fn load_tokens(value: &Value) -> Result<Vec<Token>> {
    let Some(items) = value.as_array() else {
        return Err(Error::InvalidToken {
            index: 0,
            reason: "`tokens` is not an array",
        });
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let invalid = |reason| Error::InvalidToken { index, reason };
            let obj = item.as_object().ok_or(invalid("not an object"))?;
            let kind = obj
                .get("type")
                .and_then(Value::as_str)
                .ok_or(invalid("missing `type`"))?;
            let kind = TokenKind::from_estree(kind).ok_or(invalid("unknown token type"))?;
            let span = span_of(obj).ok_or(invalid("missing `start`/`end` or `range`"))?;
            let value = obj
                .get("value")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned();
            Ok(Token { kind, span, value })
        })
        .collect()
}
