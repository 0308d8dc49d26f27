#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for Sylva syntax trees.
//!
//! The node schema tells the traversal engine which fields of a node hold
//! children, and in which order they appear in source. It comes in two layers:
//! - **Deserialization layer**: 1:1 mapping to a schema JSON file
//! - **Lookup layer**: kind-keyed ordered field lists
//!
//! Two implementations of the lookup layer:
//! - **Static** (`StaticSchema`): sorted arrays, zero runtime init
//! - **Dynamic** (`DynamicSchema`): IndexMap-based, for runtime construction
//!
//! The crate also hosts the position model (`Span`, `Ranged`) and the string
//! interner shared by the tree representation.

use std::borrow::Cow;

use indexmap::IndexMap;
use indexmap::map::Entry;

mod error;
pub mod estree;
mod interner;
mod span;

#[cfg(test)]
mod interner_tests;

pub use error::SchemaError;
pub use interner::{Interner, Symbol};
pub use span::{Ranged, Span, after, before, contains_range, is_in_range, overlap};

// ============================================================================
// Deserialization Layer
// ============================================================================

/// Raw schema entry as it appears in a schema JSON file.
///
/// ```json
/// { "type": "IfStatement", "fields": [
///     { "name": "test", "required": true },
///     { "name": "consequent", "required": true },
///     { "name": "alternate" }
/// ] }
/// ```
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawNodeSchema {
    #[serde(rename = "type")]
    pub type_name: String,
    /// Traversable fields in source-appearance order.
    #[serde(default)]
    pub fields: Vec<RawField>,
}

/// A single traversable field of a raw schema entry.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawField {
    pub name: String,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub required: bool,
}

/// Parse schema JSON content into raw entries.
pub fn parse_node_schema(json: &str) -> Result<Vec<RawNodeSchema>, SchemaError> {
    serde_json::from_str(json).map_err(SchemaError::Json)
}

// ============================================================================
// Common Types
// ============================================================================

/// Expected shape of a child slot.
///
/// `multiple` fields hold a sequence of nodes, `required` single fields always
/// hold a node, the rest hold an optional node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cardinality {
    pub multiple: bool,
    pub required: bool,
}

impl Cardinality {
    pub const OPTIONAL: Self = Self {
        multiple: false,
        required: false,
    };
    pub const REQUIRED: Self = Self {
        multiple: false,
        required: true,
    };
    pub const MANY: Self = Self {
        multiple: true,
        required: false,
    };
}

/// A traversable child field of a node kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    pub name: Cow<'static, str>,
    pub cardinality: Cardinality,
}

impl FieldSpec {
    pub const fn new(name: &'static str, cardinality: Cardinality) -> Self {
        Self {
            name: Cow::Borrowed(name),
            cardinality,
        }
    }

    pub fn owned(name: impl Into<String>, cardinality: Cardinality) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            cardinality,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn is_sequence(&self) -> bool {
        self.cardinality.multiple
    }
}

/// Optional single-node field.
pub const fn optional(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, Cardinality::OPTIONAL)
}

/// Required single-node field.
pub const fn required(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, Cardinality::REQUIRED)
}

/// Sequence-of-nodes field.
pub const fn many(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, Cardinality::MANY)
}

// ============================================================================
// NodeSchema Trait
// ============================================================================

/// Kind → ordered traversable fields.
///
/// A kind without an entry has no traversable children: the traversal engine
/// treats it as a leaf instead of failing, so partially specified schemas
/// degrade gracefully.
pub trait NodeSchema {
    /// Ordered traversable fields of `kind`, `None` if the kind is unknown.
    fn fields(&self, kind: &str) -> Option<&[FieldSpec]>;

    fn contains(&self, kind: &str) -> bool {
        self.fields(kind).is_some()
    }

    fn field(&self, kind: &str, name: &str) -> Option<&FieldSpec> {
        self.fields(kind)?.iter().find(|f| f.name() == name)
    }

    /// Unknown kinds and kinds with no fields are both leaves.
    fn is_leaf(&self, kind: &str) -> bool {
        self.fields(kind).is_none_or(|fields| fields.is_empty())
    }
}

impl<T: NodeSchema + ?Sized> NodeSchema for &T {
    fn fields(&self, kind: &str) -> Option<&[FieldSpec]> {
        (*self).fields(kind)
    }
}

// ============================================================================
// Static Lookup Layer (zero runtime init)
// ============================================================================

/// Schema backed by a static table.
///
/// Entries must be sorted by kind name; lookups use binary search.
#[derive(Debug, Clone, Copy)]
pub struct StaticSchema {
    entries: &'static [(&'static str, &'static [FieldSpec])],
}

impl StaticSchema {
    pub const fn new(entries: &'static [(&'static str, &'static [FieldSpec])]) -> Self {
        Self { entries }
    }

    pub fn get(&self, kind: &str) -> Option<&'static [FieldSpec]> {
        self.entries
            .binary_search_by(|(name, _)| (*name).cmp(kind))
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static [FieldSpec])> {
        self.entries.iter().copied()
    }

    /// Whether the table satisfies the sorted-by-kind precondition.
    pub fn is_sorted(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].0 < w[1].0)
    }
}

impl NodeSchema for StaticSchema {
    fn fields(&self, kind: &str) -> Option<&[FieldSpec]> {
        self.get(kind)
    }
}

// ============================================================================
// Dynamic Lookup Layer (runtime construction)
// ============================================================================

/// Schema built at runtime, preserving kind insertion order.
#[derive(Debug, Clone, Default)]
pub struct DynamicSchema {
    kinds: IndexMap<String, Vec<FieldSpec>>,
}

impl DynamicSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw entries. Duplicate kinds or fields are rejected.
    pub fn from_raw(raw_nodes: &[RawNodeSchema]) -> Result<Self, SchemaError> {
        let mut schema = Self::new();

        for raw in raw_nodes {
            let mut fields: Vec<FieldSpec> = Vec::with_capacity(raw.fields.len());
            for raw_field in &raw.fields {
                if fields.iter().any(|f| f.name() == raw_field.name) {
                    return Err(SchemaError::DuplicateField {
                        kind: raw.type_name.clone(),
                        field: raw_field.name.clone(),
                    });
                }
                fields.push(FieldSpec::owned(
                    raw_field.name.clone(),
                    Cardinality {
                        multiple: raw_field.multiple,
                        required: raw_field.required,
                    },
                ));
            }

            match schema.kinds.entry(raw.type_name.clone()) {
                Entry::Occupied(_) => {
                    return Err(SchemaError::DuplicateKind(raw.type_name.clone()));
                }
                Entry::Vacant(slot) => {
                    slot.insert(fields);
                }
            }
        }

        tracing::debug!(kinds = schema.len(), "built node schema");
        Ok(schema)
    }

    /// Parse and build from schema JSON in one step.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Self::from_raw(&parse_node_schema(json)?)
    }

    /// Copy every entry of a static table.
    pub fn from_static(schema: &StaticSchema) -> Self {
        let kinds = schema
            .iter()
            .map(|(kind, fields)| (kind.to_owned(), fields.to_vec()))
            .collect();
        Self { kinds }
    }

    /// Add or replace the entry for `kind`.
    pub fn with_kind(mut self, kind: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        self.insert(kind, fields);
        self
    }

    /// Add or replace the entry for `kind`, returning the previous entry.
    pub fn insert(
        &mut self,
        kind: impl Into<String>,
        fields: Vec<FieldSpec>,
    ) -> Option<Vec<FieldSpec>> {
        self.kinds.insert(kind.into(), fields)
    }

    /// Overlay `other` on top of `self`; entries of `other` win.
    pub fn extend(&mut self, other: DynamicSchema) {
        self.kinds.extend(other.kinds);
    }

    pub fn get(&self, kind: &str) -> Option<&[FieldSpec]> {
        self.kinds.get(kind).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FieldSpec])> {
        self.kinds
            .iter()
            .map(|(kind, fields)| (kind.as_str(), fields.as_slice()))
    }
}

impl NodeSchema for DynamicSchema {
    fn fields(&self, kind: &str) -> Option<&[FieldSpec]> {
        self.get(kind)
    }
}
