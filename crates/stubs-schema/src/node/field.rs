use crate::prelude::*;
use derive_more::{Deref, IntoIterator};
use std::ops::Not;

///
/// FieldList
///
/// Fields in declaration order. Order is part of the schema: generators
/// emit members in exactly this sequence.
///

#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, IntoIterator, PartialEq, Serialize)]
#[into_iterator(owned, ref)]
#[serde(transparent)]
pub struct FieldList(Vec<FieldDescriptor>);

impl FieldList {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    // get
    #[must_use]
    pub fn get(&self, field_name: &str) -> Option<&FieldDescriptor> {
        self.0.iter().find(|f| f.field_name == field_name)
    }

    pub fn push(&mut self, field: FieldDescriptor) {
        self.0.push(field);
    }

    /// Every field flagged as a key, in declaration order.
    pub fn key_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.0.iter().filter(|f| f.is_key)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|f| f.field_name.as_str())
    }
}

impl From<Vec<FieldDescriptor>> for FieldList {
    fn from(fields: Vec<FieldDescriptor>) -> Self {
        Self(fields)
    }
}

impl FromIterator<FieldDescriptor> for FieldList {
    fn from_iter<I: IntoIterator<Item = FieldDescriptor>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

///
/// FieldDescriptor
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub field_name: String,
    pub semantic_type: SemanticType,

    #[serde(default, skip_serializing_if = "EncodingHints::is_empty")]
    pub encoding_hints: EncodingHints,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub is_key: bool,
}

impl FieldDescriptor {
    #[must_use]
    pub fn new(field_name: impl Into<String>, semantic_type: SemanticType) -> Self {
        Self {
            field_name: field_name.into(),
            semantic_type,
            encoding_hints: EncodingHints::new(),
            is_key: false,
        }
    }

    /// Add an encoding hint for one target.
    #[must_use]
    pub fn with_hint(mut self, target: impl Into<String>, token: impl Into<String>) -> Self {
        self.encoding_hints.insert(target, token);
        self
    }

    #[must_use]
    pub fn with_hints(mut self, hints: EncodingHints) -> Self {
        self.encoding_hints = hints;
        self
    }

    /// Mark this field as the identifying field of its type.
    #[must_use]
    pub const fn key(mut self) -> Self {
        self.is_key = true;
        self
    }

    /// Token used by `target` for this field, if any.
    #[must_use]
    pub fn hint(&self, target: &str) -> Option<&str> {
        self.encoding_hints.get(target)
    }
}
