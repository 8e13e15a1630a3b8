use crate::{Error, ThisError, prelude::*, validate::validate_registry};
use std::collections::BTreeMap;

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("validation failed: {0}")]
    Validation(ErrorTree),
}

///
/// RegistryBuilder
///
/// The mutable half of the registry lifecycle. Descriptors are registered
/// here during startup, then [`freeze`](Self::freeze) validates them and
/// hands back the read-only [`Registry`].
///

#[derive(Clone, Debug, Default)]
pub struct RegistryBuilder {
    types: BTreeMap<String, TypeDescriptor>,
}

impl RegistryBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            types: BTreeMap::new(),
        }
    }

    /// Insert or overwrite the descriptor for `type_name`; last write wins.
    ///
    /// The descriptor is stored under `type_name`, and its own `type_name`
    /// is rewritten to match if the two disagree.
    pub fn register(&mut self, type_name: impl Into<String>, mut descriptor: TypeDescriptor) {
        let type_name = type_name.into();

        if descriptor.type_name != type_name {
            tracing::warn!(
                key = %type_name,
                descriptor = %descriptor.type_name,
                "descriptor name differs from registry key, using key"
            );
            descriptor.type_name.clone_from(&type_name);
        }

        let fields = descriptor.fields.len();
        match self.types.insert(type_name.clone(), descriptor) {
            Some(prev) if prev != self.types[&type_name] => {
                tracing::warn!(type_name = %type_name, "overwrote existing type descriptor");
            }
            _ => {
                tracing::debug!(type_name = %type_name, fields, "registered type descriptor");
            }
        }
    }

    /// Register the descriptor a type carries through [`Describe`].
    pub fn register_type<T: Describe>(&mut self) {
        let descriptor = T::descriptor();

        self.register(descriptor.type_name.clone(), descriptor);
    }

    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Validate every descriptor and produce the immutable registry.
    ///
    /// Freezing is all-or-nothing: one invalid descriptor fails the whole
    /// registry, and the error lists every problem found. Type and field
    /// names must be ASCII identifiers.
    pub fn freeze(self) -> Result<Registry, Error> {
        validate_registry(&self.types).map_err(BuildError::Validation)?;

        tracing::info!(types = self.types.len(), "type registry frozen");

        Ok(Registry::from_types(self.types))
    }
}

impl Extend<TypeDescriptor> for RegistryBuilder {
    fn extend<I: IntoIterator<Item = TypeDescriptor>>(&mut self, iter: I) {
        for descriptor in iter {
            self.register(descriptor.type_name.clone(), descriptor);
        }
    }
}
