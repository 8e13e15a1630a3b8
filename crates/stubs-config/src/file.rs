use crate::ConfigError;
use serde::Deserialize;
use std::{collections::BTreeMap, fs, path::Path};
use stubs_schema::{
    build::RegistryBuilder,
    error::ErrorTree,
    node::{EncodingHints, FieldDescriptor, TypeDescriptor},
    types::SemanticType,
};

///
/// SchemaFile
///

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaFile {
    #[serde(default)]
    pub types: Vec<TypeSpec>,
}

///
/// TypeSpec
///

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeSpec {
    pub name: String,

    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

///
/// FieldSpec
///
/// `type` stays a string until conversion so that a bad tag can be reported
/// with the type and field it belongs to.
///

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub key: bool,

    #[serde(default)]
    pub encoding: BTreeMap<String, String>,
}

impl SchemaFile {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file = Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), types = file.types.len(), "loaded schema file");

        Ok(file)
    }

    /// Convert every type spec, reporting all bad semantic tags at once.
    pub fn descriptors(&self) -> Result<Vec<TypeDescriptor>, ConfigError> {
        let mut errs = ErrorTree::new();
        let mut out = Vec::with_capacity(self.types.len());

        for spec in &self.types {
            match spec.descriptor() {
                Ok(descriptor) => out.push(descriptor),
                Err(tree) => errs.merge_for(spec.name.clone(), tree),
            }
        }

        errs.result().map_err(ConfigError::Invalid)?;

        Ok(out)
    }

    pub fn register_into(&self, builder: &mut RegistryBuilder) -> Result<(), ConfigError> {
        for descriptor in self.descriptors()? {
            builder.register(descriptor.type_name.clone(), descriptor);
        }

        Ok(())
    }
}

impl TypeSpec {
    fn descriptor(&self) -> Result<TypeDescriptor, ErrorTree> {
        let mut errs = ErrorTree::new();
        let mut descriptor = TypeDescriptor::new(self.name.clone());

        for field in &self.fields {
            match field.ty.parse::<SemanticType>() {
                Ok(semantic_type) => descriptor.fields.push(field.descriptor(semantic_type)),
                Err(e) => errs.add_for(field.name.clone(), e),
            }
        }

        errs.result().map(|()| descriptor)
    }
}

impl FieldSpec {
    fn descriptor(&self, semantic_type: SemanticType) -> FieldDescriptor {
        let hints = self.encoding.clone().into_iter().collect::<EncodingHints>();
        let field = FieldDescriptor::new(self.name.clone(), semantic_type).with_hints(hints);

        if self.key { field.key() } else { field }
    }
}
