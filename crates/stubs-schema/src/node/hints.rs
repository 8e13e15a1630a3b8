use crate::prelude::*;
use std::collections::{BTreeMap, btree_map};

///
/// EncodingHints
///
/// Target format name mapped to the literal type token that target uses,
/// e.g. `cpp -> uint32_t`. Target names are open-ended and never checked
/// against a known list.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EncodingHints(BTreeMap<String, String>);

impl EncodingHints {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, target: impl Into<String>, token: impl Into<String>) -> Self {
        self.insert(target, token);
        self
    }

    /// Set the token for a target, returning the previous one.
    pub fn insert(
        &mut self,
        target: impl Into<String>,
        token: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(target.into(), token.into())
    }

    #[must_use]
    pub fn get(&self, target: &str) -> Option<&str> {
        self.0.get(target).map(String::as_str)
    }

    /// Target names in sorted order.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EncodingHints {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for EncodingHints {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
