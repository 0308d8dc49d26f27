//! Errors raised while loading a node schema.

/// Error during schema parsing or construction.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("schema JSON parse error: {0}")]
    Json(#[source] serde_json::Error),

    #[error("duplicate schema entry for node kind `{0}`")]
    DuplicateKind(String),

    #[error("node kind `{kind}` declares field `{field}` more than once")]
    DuplicateField { kind: String, field: String },
}
