use crate::prelude::*;
use std::{
    collections::{BTreeMap, btree_map},
    iter::FusedIterator,
};

///
/// Registry
///
/// Frozen catalog of type descriptors keyed by type name. There is no way
/// to mutate it, so it can be shared across threads without locking.
///

#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Registry {
    types: BTreeMap<String, TypeDescriptor>,
}

impl Registry {
    pub(crate) const fn from_types(types: BTreeMap<String, TypeDescriptor>) -> Self {
        Self { types }
    }

    /// Look up a descriptor, failing with `NotFound` for unknown names.
    pub fn lookup(&self, type_name: &str) -> Result<&TypeDescriptor, NodeError> {
        self.get(type_name)
            .ok_or_else(|| NodeError::NotFound(type_name.to_string()))
    }

    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<&TypeDescriptor> {
        self.types.get(type_name)
    }

    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Every registered type name, in sorted order. The iterator is `Clone`,
    /// so a consumer can restart enumeration from a saved copy.
    #[must_use]
    pub fn list_type_names(&self) -> TypeNames<'_> {
        TypeNames {
            inner: self.types.keys(),
        }
    }

    /// Descriptors in type-name order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a TypeDescriptor;
    type IntoIter = btree_map::Values<'a, String, TypeDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.values()
    }
}

///
/// TypeNames
///

#[derive(Clone, Debug)]
pub struct TypeNames<'a> {
    inner: btree_map::Keys<'a, String, TypeDescriptor>,
}

impl<'a> Iterator for TypeNames<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for TypeNames<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(String::as_str)
    }
}

impl ExactSizeIterator for TypeNames<'_> {}

impl FusedIterator for TypeNames<'_> {}
