use crate::{
    Describe, Error,
    schema::{build::RegistryBuilder, registry::Registry},
};

///
/// Domain
///

#[derive(Clone, Debug, Default, Describe, Eq, PartialEq)]
pub struct Domain {
    #[stub(key, encode(cpp = "std::string", ipc = "char_string"))]
    pub name: String,

    #[stub(encode(cpp = "uint32_t", ipc = "uint32_t"))]
    pub domain_id: u32,
}

/// Register every builtin stub type.
pub fn register_builtin(builder: &mut RegistryBuilder) {
    builder.register_type::<Domain>();
}

/// Registry holding only the builtin stub types.
pub fn registry() -> Result<Registry, Error> {
    let mut builder = RegistryBuilder::new();
    register_builtin(&mut builder);

    builder.freeze()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{node::Describe as _, types::SemanticType};

    #[test]
    fn domain_descriptor_matches_declaration() {
        let ty = Domain::descriptor();

        assert_eq!(ty.type_name, "Domain");
        assert_eq!(ty.fields.len(), 2);

        let name = &ty.fields[0];
        assert_eq!(name.field_name, "name");
        assert_eq!(name.semantic_type, SemanticType::String);
        assert!(name.is_key);
        assert_eq!(name.hint("cpp"), Some("std::string"));
        assert_eq!(name.hint("ipc"), Some("char_string"));

        let domain_id = &ty.fields[1];
        assert_eq!(domain_id.field_name, "domain_id");
        assert_eq!(domain_id.semantic_type, SemanticType::Uint32);
        assert!(!domain_id.is_key);
        assert_eq!(domain_id.hint("cpp"), Some("uint32_t"));
        assert_eq!(domain_id.hint("ipc"), Some("uint32_t"));
    }

    #[test]
    fn builtin_registry_contains_domain() {
        let registry = registry().unwrap();

        assert_eq!(registry.list_type_names().collect::<Vec<_>>(), ["Domain"]);
        assert!(registry.lookup("Widget").is_err());
    }
}
